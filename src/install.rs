//! Point `core.hooksPath` at the checked-in hooks and make the hook runnable
//!
//! Two steps, strictly in order:
//! 1. `git config core.hooksPath <hooks_dir>`; a failure here stops everything.
//! 2. Set the hook's mode, failing if the hook isn't there.
//!
//! Both steps overwrite rather than accumulate, so running again is harmless.

use crate::command::ConfigCommand;
use crate::config::InstallOptions;
use crate::error::InstallError;

/// What [`install_with`] changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Installed {
    /// Hook path as given relative to the work tree
    pub hook_path: std::path::PathBuf,
    /// Permission bits applied to `hook_path`
    pub mode: u32,
}

/// Install with [`InstallOptions::default`] in the current directory
pub fn install() -> Result<Installed, InstallError> {
    install_with(&InstallOptions::default())
}

pub fn install_with(options: &InstallOptions) -> Result<Installed, InstallError> {
    configure_hooks_path(options)?;
    adjust_permissions(options)
}

fn configure_hooks_path(options: &InstallOptions) -> Result<(), InstallError> {
    let git = match options.get_git() {
        Some(git) => git.to_owned(),
        None => crate::utils::git_exe().ok_or(InstallError::GitNotFound)?,
    };
    log::trace!("Using git at {}", git.display());

    ConfigCommand::hooks_path(options.get_hooks_dir()).run(&git, options.get_work_dir())
}

fn adjust_permissions(options: &InstallOptions) -> Result<Installed, InstallError> {
    let hook_path = options.hook_path();
    let resolved = options.resolved_hook_path();
    if !resolved.exists() {
        return Err(InstallError::MissingHookFile { path: hook_path });
    }

    let mode = options.get_mode();
    crate::hooks::set_mode(&resolved, mode).map_err(|source| InstallError::Permissions {
        path: hook_path.clone(),
        source,
    })?;
    log::debug!("Set mode {:o} on {}", mode, hook_path.display());

    check_discoverable(options, &resolved);

    Ok(Installed { hook_path, mode })
}

/// Report whether `git` will now pick the hook up
///
/// Purely informational; the install already succeeded.
fn check_discoverable(options: &InstallOptions, resolved: &std::path::Path) {
    let cwd = options
        .get_work_dir()
        .unwrap_or_else(|| std::path::Path::new("."));
    let hooks = match git2::Repository::discover(cwd)
        .and_then(|repo| crate::hooks::Hooks::with_repo(&repo))
    {
        Ok(hooks) => hooks,
        Err(err) => {
            log::trace!("Could not inspect repository: {err}");
            return;
        }
    };

    match hooks.find_hook(options.get_hook_name()) {
        Some(found) if same_file(&found, resolved) => {
            log::debug!("git will run {}", found.display());
        }
        Some(found) => {
            log::debug!(
                "git will run {} rather than {}",
                found.display(),
                resolved.display()
            );
        }
        None => {
            log::debug!(
                "git will not find `{}` under {}",
                options.get_hook_name(),
                hooks.root().display()
            );
        }
    }
}

fn same_file(lhs: &std::path::Path, rhs: &std::path::Path) -> bool {
    match (std::fs::canonicalize(lhs), std::fs::canonicalize(rhs)) {
        (Ok(lhs), Ok(rhs)) => lhs == rhs,
        _ => false,
    }
}
