use anyhow::Result;
use tracing::info;

use crate::{commands::print_compte, AppCtx};

pub async fn handle(ctx: &AppCtx) -> Result<()> {
    let service = ctx.service()?;

    let Some(comptes) = service.fetch_comptes().await else {
        return Ok(());
    };

    info!("Found {} comptes", comptes.len());
    for compte in &comptes {
        print_compte(compte);
    }
    Ok(())
}
