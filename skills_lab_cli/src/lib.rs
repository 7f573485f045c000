//! Future Skills Lab console front end
//!
//! The menu shell is generic over its reader and writer so sessions can be
//! scripted in tests.

pub mod prompt;
pub mod shell;

pub use shell::{MenuChoice, Shell, ShellConfig};
