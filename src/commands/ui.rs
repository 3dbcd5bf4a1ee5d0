use anyhow::Result;
use tokio::{runtime::Handle, task};

use crate::{ux::run_screen, AppCtx};

pub async fn handle(ctx: &AppCtx) -> Result<()> {
    let service = ctx.service()?;
    let runtime = Handle::current();
    task::block_in_place(|| run_screen(service, runtime))
}
