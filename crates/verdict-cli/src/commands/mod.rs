// crates/verdict-cli/src/commands/mod.rs
//
// Command module declarations for the Verdict CLI.

pub mod admin;
pub mod init;
pub mod params;
pub mod slash;
