// ─────────────────────────────────────────────────────────────────────────────
//  Mizan — Wallet Analytics
//
//  Mizan (ميزان): "The Balance" — weighs every wallet in the ledger by what it
//  sent, what it received, and where it stands in the transaction graph.
// ─────────────────────────────────────────────────────────────────────────────

use clap::Parser;
use mizan::cli::Cli;
use mizan::engine::Mizan;
use mizan::error::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    Mizan::run(Cli::parse()).await?;
    Ok(())
}
