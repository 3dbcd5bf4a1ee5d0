use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, settings::Settings, AppCtx};

pub async fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    ctx.settings_store.save(&Settings {
        base_url: Some(args.url.to_string()),
    })?;
    info!("Configuration saved successfully ✅ (backend: {})", args.url);
    Ok(())
}
