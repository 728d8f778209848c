//! Prerequisite detection and dependency installation
//!
//! This module provides:
//! - Detection of git and the package manager binaries
//! - The streamed package manager install step

pub mod check;
pub mod install;

pub use check::{check_git, check_package_manager, RuntimeInfo};
pub use install::install_dependencies;
