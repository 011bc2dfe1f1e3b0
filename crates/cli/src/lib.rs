//! Line-oriented terminal front end for the calculator.
//!
//! A thin shell: it parses commands, calls the order session, prints the
//! snapshots it reads back, and writes exported documents to disk.

pub mod command;
pub mod config;
pub mod shell;

pub use command::{Command, CommandError, RemoveTarget};
pub use config::ShellConfig;
pub use shell::{Flow, Shell};
