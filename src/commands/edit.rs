use anyhow::{Context, Result};

use crate::{cli::EditArgs, commands::print_compte, AppCtx};

pub async fn handle(args: EditArgs, ctx: &AppCtx) -> Result<()> {
    let service = ctx.service()?;

    let Some(comptes) = service.fetch_comptes().await else {
        return Ok(());
    };
    let compte = comptes
        .iter()
        .find(|c| c.id == Some(args.id))
        .context("Account not found. Run `comptes list` to list your accounts")?;

    let kind = args.kind.unwrap_or(compte.kind);
    let Some(comptes) = service
        .update_compte(compte, &comptes, args.solde, kind)
        .await
    else {
        return Ok(());
    };

    if let Some(updated) = comptes.iter().find(|c| c.id == Some(args.id)) {
        print_compte(updated);
    }
    Ok(())
}
