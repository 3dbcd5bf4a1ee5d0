use anyhow::{Context, Result};
use tracing::info;

use crate::{cli::DeleteArgs, AppCtx};

pub async fn handle(args: DeleteArgs, ctx: &AppCtx) -> Result<()> {
    let service = ctx.service()?;

    let Some(comptes) = service.fetch_comptes().await else {
        return Ok(());
    };
    let compte = comptes
        .iter()
        .find(|c| c.id == Some(args.id))
        .context("Account not found. Run `comptes list` to list your accounts")?;

    if let Some(remaining) = service.delete_compte(compte, &comptes).await {
        info!("{} comptes left ✅", remaining.len());
    }
    Ok(())
}
