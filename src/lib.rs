//! Point a git repository at its checked-in hooks
//!
//! Equivalent to:
//! ```sh
//! git config core.hooksPath .githooks
//! chmod 755 .githooks/pre-commit
//! ```
//! except that a missing `.githooks/pre-commit` is an error.
//!
//! See [`install::install`] for the `setup-pre-commit-hook` behavior and
//! [`install::install_with`] to change the directory, hook, or mode.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

pub mod command;
pub mod config;
pub mod error;
pub mod hooks;
pub mod install;
pub mod utils;

pub use config::InstallOptions;
pub use error::InstallError;
pub use install::{install, install_with, Installed};

#[cfg(test)]
mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
