//! Print declared versions side by side with on-chain `VERSION` data.

use aastar_versions::{
    cli::{self, ToolArgs},
    output::{self, Progress},
    Cast, Reporter, VersionFile,
};
use clap::Parser;
use std::process::ExitCode;

/// Verify declared contract versions against on-chain data. Read-only.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    tool: ToolArgs,
}

fn main() -> eyre::Result<ExitCode> {
    let args = Args::parse();
    let config = cli::setup(&args.tool)?;

    output::print_banner("On-Chain Version Verification Table");
    output::print_info(&format!("RPC: {}", config.rpc_url()));
    println!();

    let cast = Cast::from_config(&config);
    if let Err(e) = cast.ensure_available() {
        output::print_error(&format!("Error: {e}. Please install Foundry."));
        return Ok(ExitCode::FAILURE);
    }

    let versions = VersionFile::new(config.versions_file()).load()?;
    let progress = Progress::new(&cast, versions.contracts());
    let report = Reporter::new(progress).report(versions.contracts());

    println!("{report}");
    println!();

    let mismatches = report.mismatches().count();
    if mismatches == 0 {
        output::print_success("All contracts match");
    } else {
        output::print_warning(&format!("{mismatches} contract(s) differ or could not be read"));
    }

    println!();
    println!(
        "Note: This verification queries on-chain data and may take a few minutes depending on RPC response time."
    );
    Ok(ExitCode::SUCCESS)
}
