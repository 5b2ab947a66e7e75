//! Schema command - print expected parameter and input formats

use clap::{Args, ValueEnum};
use fisk::tax::{AssetTaxParameters, IncomeTaxParameters};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which calculation to describe
    #[arg(value_enum)]
    kind: SchemaKind,

    /// Print the CSV input header instead of the --params JSON Schema
    #[arg(long)]
    csv_header: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    /// Asset tax (box 3)
    Asset,
    /// Income tax (box 1)
    Income,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.csv_header {
            println!("{}", csv_columns(self.kind).join(","));
            return Ok(());
        }

        let schema = match self.kind {
            SchemaKind::Asset => schema_for!(AssetTaxParameters),
            SchemaKind::Income => schema_for!(IncomeTaxParameters),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}

fn csv_columns(kind: SchemaKind) -> &'static [&'static str] {
    match kind {
        SchemaKind::Asset => &["id", "value"],
        SchemaKind::Income => &["id", "income"],
    }
}
