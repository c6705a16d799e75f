//! The `git config` invocation

use crate::error::InstallError;

/// Repository-scoped `git config <key> <value>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigCommand {
    key: String,
    value: String,
}

impl ConfigCommand {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `git config core.hooksPath <hooks_dir>`
    pub fn hooks_path(hooks_dir: impl Into<String>) -> Self {
        Self::new("core.hooksPath", hooks_dir)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Arguments passed to `git`
    pub fn args(&self) -> [&str; 3] {
        ["config", &self.key, &self.value]
    }

    /// Run `git` and wait for it to exit
    ///
    /// stdio is inherited so git's own diagnostics reach the user.
    pub fn run(
        &self,
        git: &std::path::Path,
        cwd: Option<&std::path::Path>,
    ) -> Result<(), InstallError> {
        let args = self.args();
        let command = crate::utils::display_command("git", &args);
        log::debug!("Running `{command}`");

        let mut cmd = std::process::Command::new(git);
        cmd.args(args);
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }
        let status = match cmd.status() {
            Ok(status) => status,
            Err(source) => return Err(InstallError::Spawn { command, source }),
        };
        if !status.success() {
            return Err(InstallError::CommandFailed {
                command,
                code: status.code(),
            });
        }

        log::trace!("`{command}` succeeded");
        Ok(())
    }
}
