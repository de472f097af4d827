//! Create the todos table and exit

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    args.database.connect_store().await?;
    tracing::info!("todos table is ready");
    Ok(())
}
