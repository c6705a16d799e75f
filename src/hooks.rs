//! Locating hooks the way `git` does

#[derive(Clone, Debug)]
pub struct Hooks {
    root: std::path::PathBuf,
}

impl Hooks {
    pub fn new(hook_root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            root: hook_root.into(),
        }
    }

    /// Hooks directory `git` will use for `repo`
    ///
    /// From `git-config(1)`, a relative `core.hooksPath` is resolved against the directory hooks
    /// run in: the root of the working tree, or `$GIT_DIR` for a bare repository.
    pub fn with_repo(repo: &git2::Repository) -> Result<Self, git2::Error> {
        let config = repo.config()?;
        let root = match config.get_path("core.hooksPath") {
            Ok(root) if root.is_relative() => {
                repo.workdir().unwrap_or_else(|| repo.path()).join(root)
            }
            Ok(root) => root,
            Err(_) => repo.path().join("hooks"),
        };
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn find_hook(&self, name: &str) -> Option<std::path::PathBuf> {
        let mut hook_path = self.root().join(name);
        if is_executable(&hook_path) {
            return Some(hook_path);
        }

        if !std::env::consts::EXE_SUFFIX.is_empty() {
            hook_path.set_extension(std::env::consts::EXE_SUFFIX);
            if is_executable(&hook_path) {
                return Some(hook_path);
            }
        }

        None
    }
}

/// Set `path`'s permission bits to exactly `mode`
#[cfg(unix)]
pub fn set_mode(path: &std::path::Path, mode: u32) -> Result<(), std::io::Error> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

/// Permission bits don't exist here; any existing file is runnable by `git`'s `sh`.
#[cfg(not(unix))]
pub fn set_mode(path: &std::path::Path, mode: u32) -> Result<(), std::io::Error> {
    log::debug!(
        "Skipping mode {:o} for {}: no permission bits on this platform",
        mode,
        path.display()
    );
    Ok(())
}

#[cfg(unix)]
pub fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let metadata = match path.metadata() {
        Ok(metadata) => metadata,
        Err(_) => return false,
    };
    let permissions = metadata.permissions();
    metadata.is_file() && permissions.mode() & 0o111 != 0
}

#[cfg(not(unix))]
pub fn is_executable(path: &std::path::Path) -> bool {
    path.is_file()
}
