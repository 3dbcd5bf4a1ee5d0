use anyhow::Result;

use compte_api::compte::Compte;

use crate::{cli::Commands, ux::card::card_lines, AppCtx};

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod ui;

pub async fn handle(command: Option<Commands>, ctx: &AppCtx) -> Result<()> {
    match command {
        Some(Commands::Config(args)) => config::handle(args, ctx).await,
        Some(Commands::List) => list::handle(ctx).await,
        Some(Commands::Add(args)) => add::handle(args, ctx).await,
        Some(Commands::Edit(args)) => edit::handle(args, ctx).await,
        Some(Commands::Delete(args)) => delete::handle(args, ctx).await,
        Some(Commands::Ui) | None => ui::handle(ctx).await,
    }
}

/// Print an account card on stdout.
pub fn print_compte(compte: &Compte) {
    match compte.id {
        Some(id) => println!("#{id}"),
        None => println!("#?"),
    }
    for line in card_lines(compte) {
        println!("  {line}");
    }
}
