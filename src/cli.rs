use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use compte_api::{
    compte::{parse_solde, TypeCompte},
    types::BaseUrl,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional path to a settings JSON file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Backend root URL for this run, overrides the configured one (e.g: "http://localhost:8082")
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<BaseUrl>,

    /// Opens the accounts screen when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the CLI
    Config(ConfigArgs),

    /// Open the interactive accounts screen
    Ui,

    /// List your accounts
    List,

    /// Create an account
    Add(AddArgs),

    /// Change the balance and type of an account
    Edit(EditArgs),

    /// Delete an account
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Backend root URL, the accounts resource lives at `<URL>/comptes`
    #[arg(value_name = "URL")]
    pub url: BaseUrl,
}

#[derive(Args)]
pub struct AddArgs {
    /// Initial balance (e.g: 1250.50)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_solde_arg)]
    pub solde: f64,

    /// Type of the account: courant or epargne
    #[arg(long = "type", value_name = "TYPE", default_value = "courant")]
    pub kind: TypeCompte,
}

#[derive(Args)]
pub struct EditArgs {
    /// Account ID, you can get it with the `comptes list` command
    #[arg(long, value_name = "ID")]
    pub id: i64,

    /// New balance
    #[arg(long, allow_negative_numbers = true, value_parser = parse_solde_arg)]
    pub solde: f64,

    /// New type (courant or epargne), keeps the current one when omitted
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<TypeCompte>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Account ID, you can get it with the `comptes list` command
    #[arg(long, value_name = "ID")]
    pub id: i64,
}

fn parse_solde_arg(s: &str) -> Result<f64, String> {
    parse_solde(s).ok_or_else(|| format!("invalid balance `{s}`: expected a finite number"))
}
