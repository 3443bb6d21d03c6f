// crates/verdict-cli/src/commands/slash.rs
//
// `verdict slash {get, list, argument, slasher, creator}`: slash ledger
// queries.

use clap::Subcommand;

use verdict_core::Address;

use crate::output::{render_slashes, OutputFormat};
use crate::session::{CliError, Session};

#[derive(Debug, Subcommand)]
pub enum SlashCmd {
    /// Show one slash by ID.
    Get {
        #[arg(long)]
        id: u64,
    },
    /// List every slash in ID order.
    List {
        /// Stop after this many entries.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Slashes filed against an argument.
    Argument {
        #[arg(long)]
        argument_id: u64,
    },
    /// The slash one user filed against one argument, if any.
    Slasher {
        /// Slasher address (hex).
        #[arg(long)]
        slasher: Address,
        #[arg(long)]
        argument_id: u64,
    },
    /// Every slash a user has filed.
    Creator {
        /// Creator address (hex).
        #[arg(long)]
        creator: Address,
    },
}

pub fn run(session: &Session, cmd: &SlashCmd, format: OutputFormat) -> Result<(), CliError> {
    let slashes = match cmd {
        SlashCmd::Get { id } => {
            let slash = session.transact(|keeper| keeper.slash(*id))?;
            if format == OutputFormat::Table {
                println!("{}", slash);
                println!("  Detail: {}", slash.detailed_reason);
                return Ok(());
            }
            vec![slash]
        }
        SlashCmd::List { limit } => session.transact(|keeper| match limit {
            Some(n) => keeper.iter_slashes().take(*n).collect(),
            None => keeper.slashes(),
        })?,
        SlashCmd::Argument { argument_id } => {
            let (slashes, count) = session.transact(|keeper| {
                Ok((
                    keeper.argument_slashes(*argument_id)?,
                    keeper.slash_count(*argument_id)?,
                ))
            })?;
            tracing::debug!(argument_id, count, "Loaded argument slashes");
            slashes
        }
        SlashCmd::Slasher {
            slasher,
            argument_id,
        } => session.transact(|keeper| keeper.argument_slasher_slashes(slasher, *argument_id))?,
        SlashCmd::Creator { creator } => {
            session.transact(|keeper| keeper.creator_slashes(creator))?
        }
    };

    println!("{}", render_slashes(&slashes, format));
    Ok(())
}
