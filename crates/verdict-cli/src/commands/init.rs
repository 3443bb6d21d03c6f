// crates/verdict-cli/src/commands/init.rs
//
// `verdict init`: seed the slashing partition with genesis params.

use crate::config::CliConfig;
use crate::session::{CliError, Session};

/// Run the init command. Existing params are never overwritten.
pub fn run(session: &Session, config: &CliConfig) -> Result<(), CliError> {
    let params = session.transact(|keeper| {
        keeper.initialize(&config.params)?;
        keeper.params()
    })?;

    println!("Slashing state initialized in {}", config.data_dir);
    println!("  Min slash count: {}", params.min_slash_count);
    println!("  Admins:          {}", params.slash_admins.len());
    Ok(())
}
