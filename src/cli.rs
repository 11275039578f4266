use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fraud-check",
    about = "Submit a transaction to the fraud-scoring service and show the verdict."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in the transaction form and submit it.
    Manual {
        /// TOML file with initial field values (amount, method, customerAge, IP, ...)
        #[arg(long)]
        form: Option<PathBuf>,
        /// Set a single field, e.g. --set amount=100.5 (repeatable, applied in order)
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Upload a photo, extract the transaction from it, and submit that.
    Photo {
        /// Image file to upload
        path: Option<PathBuf>,
    },
}

/// 解析 `字段=值`，值可以为空或包含 `=`
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got '{}'", raw)),
    }
}
