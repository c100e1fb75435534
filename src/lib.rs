//! sagui: command-line front end for the sagui build tool
//!
//! Maps subcommands (`develop`, `build`, `dist`, `test:*`, `update`) to an
//! invocation configuration and hands it to the action runner.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
