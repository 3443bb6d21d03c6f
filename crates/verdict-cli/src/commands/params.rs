// crates/verdict-cli/src/commands/params.rs
//
// `verdict params {show, set}`: read or replace governance params.

use std::fs;

use clap::Subcommand;

use verdict_slashing::Params;

use crate::config::expand_tilde;
use crate::output::{format_json, format_table, param_rows, OutputFormat};
use crate::session::{CliError, Session};

#[derive(Debug, Subcommand)]
pub enum ParamsCmd {
    /// Show the current params.
    Show,
    /// Replace the params with the contents of a TOML file.
    Set {
        /// TOML file holding a full or partial params table.
        #[arg(long)]
        file: String,
    },
}

pub fn run(session: &Session, cmd: &ParamsCmd, format: OutputFormat) -> Result<(), CliError> {
    match cmd {
        ParamsCmd::Show => {
            let params = session.transact(|keeper| keeper.params())?;
            print_params(&params, format);
        }
        ParamsCmd::Set { file } => {
            let contents = fs::read_to_string(expand_tilde(file))?;
            let params: Params =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            session.transact(|keeper| keeper.set_params(&params))?;
            println!("Params updated from {}", file);
            print_params(&params, format);
        }
    }
    Ok(())
}

fn print_params(params: &Params, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", format_json(params)),
        OutputFormat::Table => println!("{}", format_table(&param_rows(params))),
    }
}
