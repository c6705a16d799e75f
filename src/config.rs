//! Knobs for [`install_with`][crate::install::install_with]
//!
//! [`InstallOptions::default`] is what the `setup-pre-commit-hook` binary runs with.

/// Directory, relative to the work tree, that `core.hooksPath` is pointed at.
pub const DEFAULT_HOOKS_DIR: &str = ".githooks";

/// Hook inside [`DEFAULT_HOOKS_DIR`] that gets made executable.
pub const DEFAULT_HOOK_NAME: &str = "pre-commit";

/// `rwxr-xr-x`
pub const DEFAULT_MODE: u32 = 0o755;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallOptions {
    hooks_dir: String,
    hook_name: String,
    mode: u32,
    work_dir: Option<std::path::PathBuf>,
    git: Option<std::path::PathBuf>,
}

impl InstallOptions {
    pub fn new() -> Self {
        Self {
            hooks_dir: DEFAULT_HOOKS_DIR.to_owned(),
            hook_name: DEFAULT_HOOK_NAME.to_owned(),
            mode: DEFAULT_MODE,
            work_dir: None,
            git: None,
        }
    }

    /// Value written to `core.hooksPath`, also used to locate the hook
    pub fn hooks_dir(mut self, hooks_dir: impl Into<String>) -> Self {
        self.hooks_dir = hooks_dir.into();
        self
    }

    pub fn hook_name(mut self, hook_name: impl Into<String>) -> Self {
        self.hook_name = hook_name.into();
        self
    }

    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Run `git` and resolve the hook relative to `work_dir` instead of the process's current
    /// directory
    pub fn work_dir(mut self, work_dir: impl Into<std::path::PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    /// Use this `git` rather than searching `PATH`
    pub fn git(mut self, git: impl Into<std::path::PathBuf>) -> Self {
        self.git = Some(git.into());
        self
    }

    pub fn get_hooks_dir(&self) -> &str {
        &self.hooks_dir
    }

    pub fn get_hook_name(&self) -> &str {
        &self.hook_name
    }

    pub fn get_mode(&self) -> u32 {
        self.mode
    }

    pub fn get_work_dir(&self) -> Option<&std::path::Path> {
        self.work_dir.as_deref()
    }

    pub fn get_git(&self) -> Option<&std::path::Path> {
        self.git.as_deref()
    }

    /// Hook location as the user sees it, e.g. `.githooks/pre-commit`
    pub fn hook_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.hooks_dir).join(&self.hook_name)
    }

    /// Hook location to hand to the filesystem
    pub(crate) fn resolved_hook_path(&self) -> std::path::PathBuf {
        match self.get_work_dir() {
            Some(work_dir) => work_dir.join(self.hook_path()),
            None => self.hook_path(),
        }
    }
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self::new()
    }
}
