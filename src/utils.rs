/// Path to the `git` executable that `install` will run.
pub fn git_exe() -> Option<std::path::PathBuf> {
    let exe_name = if cfg!(target_os = "windows") {
        "git.exe"
    } else {
        "git"
    };

    which::which(exe_name).ok()
}

/// Render an argument list the way a user would type it into a POSIX shell.
pub(crate) fn display_command(program: &str, args: &[&str]) -> String {
    let words = std::iter::once(program).chain(args.iter().copied());
    // `try_join` only rejects nul bytes, which can't appear in a spawned argv anyway
    shlex::try_join(words.clone()).unwrap_or_else(|_| itertools::join(words, " "))
}
