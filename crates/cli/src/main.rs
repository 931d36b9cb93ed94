use std::io;

use stockroom_cli::{Settings, demo};

fn main() -> anyhow::Result<()> {
    let (settings, rejected) = Settings::from_env();
    stockroom_observability::init(&settings.log_config())?;

    for warning in rejected {
        tracing::warn!("{warning}");
    }

    demo::run(&settings, io::stdout().lock())?;
    Ok(())
}
