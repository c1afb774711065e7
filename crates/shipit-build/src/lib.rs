//! External build command runner for shipit.
//!
//! Runs the package-install and static-build commands on the host, streaming
//! their output straight to the operator's terminal.

pub mod process;

pub use process::{ShellStep, run};
