//! Failures of [`install`][crate::install::install]

/// Exit code when a failure has no more specific code to report.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Errors that stop [`install`][crate::install::install]
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    /// No `git` executable on `PATH`.
    #[error("could not find `git` on PATH")]
    GitNotFound,

    /// `git` was found but could not be started.
    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// `git` ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the process was killed by a signal.
    #[error("`{command}` failed with {}", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The hook to make executable does not exist.
    #[error("The file {} does not exist.", .path.display())]
    MissingHookFile { path: std::path::PathBuf },

    /// The hook exists but its mode could not be changed.
    #[error("could not set permissions on {}", .path.display())]
    Permissions {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Process exit code to report for this failure
    ///
    /// A failed `git` invocation propagates git's own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => FAILURE_EXIT_CODE,
        }
    }

    /// The `git config` step failed, so no permissions were touched
    pub fn is_external_command(&self) -> bool {
        matches!(
            self,
            Self::GitNotFound | Self::Spawn { .. } | Self::CommandFailed { .. }
        )
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_owned(),
    }
}
