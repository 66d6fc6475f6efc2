//! Update `contract-versions.json` from on-chain `VERSION` data.

use aastar_versions::{
    cli::{self, ToolArgs},
    output::{self, Progress},
    Cast, Reconciler, VersionFile,
};
use chrono::Utc;
use clap::Parser;
use std::process::ExitCode;

/// Sync declared contract versions with on-chain data.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    tool: ToolArgs,
}

fn main() -> eyre::Result<ExitCode> {
    let args = Args::parse();
    let config = cli::setup(&args.tool)?;

    output::print_banner("🔄 Auto-syncing contract versions from on-chain data");
    output::print_info(&format!("RPC: {}", config.rpc_url()));
    println!();

    let cast = Cast::from_config(&config);
    if let Err(e) = cast.ensure_available() {
        output::print_error(&format!("Error: {e}. Please install Foundry."));
        return Ok(ExitCode::FAILURE);
    }

    let file = VersionFile::new(config.versions_file());
    let versions = file.load()?;

    println!("Checking contracts for version updates...");
    println!();

    let today = Utc::now().date_naive();
    let progress = Progress::new(&cast, versions.contracts());
    let outcome = Reconciler::new(progress, today)
        .reconcile_with(&versions, output::print_reconcile_entry);

    println!();
    if outcome.has_updates() {
        file.store(&outcome.document)?;
        output::print_success("Contract versions updated successfully!");
        println!();
        println!("Updated file: {}", file.path().display());
        println!();
        println!("Next steps:");
        println!("1. Review the changes: git diff {}", file.path().display());
        println!("2. Rebuild: cargo build");
        println!("3. Commit the changes");
    } else {
        output::print_success("All contracts are up to date!");
    }

    let skipped = outcome.skipped();
    if skipped > 0 {
        output::print_warning(&format!("{skipped} contract(s) skipped"));
    }

    println!();
    println!("Note: only contracts with a VERSION interface are updated.");
    Ok(ExitCode::SUCCESS)
}
