use clap::{Parser, Subcommand};

mod cmd;

use cmd::{
    asset::AssetCommand, income::IncomeCommand, presets::PresetsCommand, schema::SchemaCommand,
};

#[derive(Parser, Debug)]
#[command(name = "fisk", version, about = "Dutch Tax Calculator for Asset Returns and Income")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate box 3 tax on the deemed return of assets
    Asset(AssetCommand),
    /// Calculate box 1 progressive income tax
    Income(IncomeCommand),
    /// List the built-in parameter sets
    Presets(PresetsCommand),
    /// Print the --params JSON Schema or CSV input header
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Asset(cmd) => cmd.exec(),
        Command::Income(cmd) => cmd.exec(),
        Command::Presets(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
