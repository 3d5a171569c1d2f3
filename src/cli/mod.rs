//! CLI command implementations

pub mod commands;
pub mod console;
pub mod init;
pub mod listen;
pub mod serve;
