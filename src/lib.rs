//! # git-backdate
//!
//! A CLI tool to fabricate a backdated commit history for a working directory.
//!
//! This crate provides functionality to:
//! - Prompt for a repository path, remote URL, and primary file
//! - Initialize the repository and remote if they do not exist yet
//! - Enumerate every file and commit each one individually
//! - Forge author and committer dates inside a fixed historical window
//! - Force-push the resulting branch to the remote
//!
//! ## Usage
//!
//! ```bash
//! git-backdate
//! ```
//!
//! The tool asks for its three inputs interactively and then runs to
//! completion without further interaction.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`git`] - Git command wrappers
//! - [`dates`] - Historical date window and sampling
//! - [`plan`] - File enumeration and commit plan construction
//! - [`prompt`] - User input abstractions
//! - [`banner`] - Decorative CLI banner

pub mod banner;
pub mod cli;
pub mod dates;
pub mod git;
pub mod plan;
pub mod prompt;
