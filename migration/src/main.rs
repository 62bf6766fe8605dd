use sea_orm_migration::prelude::*;

/// Applies schema changes out of band. The API server only checks for pending
/// migrations and refuses to start; it never runs them itself.
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
