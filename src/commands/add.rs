use anyhow::Result;

use crate::{cli::AddArgs, commands::print_compte, AppCtx};

pub async fn handle(args: AddArgs, ctx: &AppCtx) -> Result<()> {
    let service = ctx.service()?;

    let Some(comptes) = service.add_compte(&[], args.solde, args.kind).await else {
        return Ok(());
    };

    if let Some(added) = comptes.last() {
        print_compte(added);
    }
    Ok(())
}
