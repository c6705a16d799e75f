//! Testing utilities.
//!
//! This is inside `src` rather than `tests` since we use this code in some unit
//! tests.

use std::ops::Deref;
use std::path::PathBuf;
use std::process::Command;

use assert_fs::TempDir;
use eyre::Context;
use itertools::Itertools;

const DUMMY_NAME: &str = "Testy McTestface";
const DUMMY_EMAIL: &str = "test@example.com";

/// Wrapper around the Git executable, for testing.
#[derive(Clone, Debug)]
pub(crate) struct Git {
    /// The path to the repository on disk. The directory itself must exist,
    /// although it might not have a `.git` folder in it. (Use `Git::init_repo`
    /// to initialize it.)
    pub(crate) repo_path: PathBuf,

    /// The path to the Git executable on disk.
    pub(crate) path_to_git: PathBuf,
}

impl Git {
    /// Run a Git command, failing unless it exits successfully.
    pub(crate) fn run<S: AsRef<str> + std::fmt::Debug>(
        &self,
        args: &[S],
    ) -> eyre::Result<(String, String)> {
        let args = args.iter().map(|arg| arg.as_ref()).collect_vec();
        let result = Command::new(&self.path_to_git)
            .current_dir(&self.repo_path)
            .args(&args)
            .env_clear()
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .wrap_err_with(|| {
                format!(
                    "Running git
                    Executable: {:?}
                    Args: {:?}",
                    &self.path_to_git, &args
                )
            })?;

        if !result.status.success() {
            eyre::bail!(
                "Git command {:?} {:?} exited with {}
stdout:
{}
stderr:
{}",
                &self.path_to_git,
                &args,
                result.status,
                &String::from_utf8_lossy(&result.stdout),
                &String::from_utf8_lossy(&result.stderr),
            )
        }
        let stdout = String::from_utf8(result.stdout)?;
        let stderr = String::from_utf8(result.stderr)?;
        Ok((stdout, stderr))
    }

    /// Set up a Git repo in the directory and initialize git to work
    /// with it.
    pub(crate) fn init_repo(&self) -> eyre::Result<()> {
        self.run(&["init"])?;
        self.run(&["config", "user.name", DUMMY_NAME])?;
        self.run(&["config", "user.email", DUMMY_EMAIL])?;
        Ok(())
    }

    /// Write a hook script into `.githooks/`, leaving its mode as created.
    pub(crate) fn write_hook(&self, name: &str, contents: &str) -> eyre::Result<PathBuf> {
        let hooks_dir = self.repo_path.join(".githooks");
        std::fs::create_dir_all(&hooks_dir)?;
        let hook_path = hooks_dir.join(name);
        std::fs::write(&hook_path, contents)?;
        Ok(hook_path)
    }

    /// Get a `Repo` object for this repository.
    pub(crate) fn get_repo(&self) -> eyre::Result<git2::Repository> {
        let repo = git2::Repository::open(&self.repo_path)?;
        Ok(repo)
    }
}

/// Wrapper around a `Git` instance which cleans up the repository once dropped.
pub(crate) struct GitWrapper {
    #[allow(dead_code)]
    repo_dir: TempDir,
    git: Git,
}

impl Deref for GitWrapper {
    type Target = Git;

    fn deref(&self) -> &Self::Target {
        &self.git
    }
}

/// Create a temporary directory for testing and a `Git` instance to use with it.
pub(crate) fn make_git() -> eyre::Result<GitWrapper> {
    let repo_dir = TempDir::new()?;
    let path_to_git = get_path_to_git()?;
    let git = Git {
        repo_path: repo_dir.path().to_path_buf(),
        path_to_git,
    };
    Ok(GitWrapper { repo_dir, git })
}

fn get_path_to_git() -> eyre::Result<PathBuf> {
    crate::utils::git_exe().ok_or_else(|| eyre::eyre!("`git` not found on PATH"))
}
