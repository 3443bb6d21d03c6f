// crates/verdict-cli/src/commands/admin.rs
//
// `verdict admin {add, remove, list}`: admin registry management.

use clap::Subcommand;

use verdict_core::Address;

use crate::output::{format_json, OutputFormat};
use crate::session::{CliError, Session};

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// Grant admin rights. Anyone may add the first admin.
    Add {
        /// Address to promote (hex).
        #[arg(long)]
        admin: Address,
        /// Address requesting the change (hex).
        #[arg(long)]
        requester: Address,
    },
    /// Revoke admin rights. Requires an existing admin.
    Remove {
        /// Address to demote (hex).
        #[arg(long)]
        admin: Address,
        /// Admin performing the removal (hex).
        #[arg(long)]
        remover: Address,
    },
    /// List current admins.
    List,
}

pub fn run(session: &Session, cmd: &AdminCmd, format: OutputFormat) -> Result<(), CliError> {
    match cmd {
        AdminCmd::Add { admin, requester } => {
            session.transact(|keeper| keeper.add_admin(*admin, requester))?;
            println!("Admin {} added", admin);
        }
        AdminCmd::Remove { admin, remover } => {
            session.transact(|keeper| keeper.remove_admin(admin, remover))?;
            println!("Admin {} removed", admin);
        }
        AdminCmd::List => {
            let admins = session.transact(|keeper| keeper.admins())?;
            match format {
                OutputFormat::Json => println!("{}", format_json(&admins)),
                OutputFormat::Table if admins.is_empty() => {
                    println!("No admins registered. The next `admin add` bootstraps the list.")
                }
                OutputFormat::Table => {
                    for admin in &admins {
                        println!("{}", admin);
                    }
                }
            }
        }
    }
    Ok(())
}
