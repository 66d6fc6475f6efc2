//! Print the on-chain `VERSION` and `VERSION_CODE` of one contract.

use aastar_versions::{
    cli::{self, ToolArgs},
    output, Cast, VersionFile,
};
use alloy::primitives::Address;
use clap::Parser;
use eyre::eyre;
use std::process::ExitCode;

/// Read VERSION data for a single contract.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Contract name (exact, as in the versions file) or address.
    contract: String,
    #[command(flatten)]
    tool: ToolArgs,
}

fn main() -> eyre::Result<ExitCode> {
    let args = Args::parse();
    let config = cli::setup(&args.tool)?;

    let cast = Cast::from_config(&config);
    if let Err(e) = cast.ensure_available() {
        output::print_error(&format!("Error: {e}. Please install Foundry."));
        return Ok(ExitCode::FAILURE);
    }

    let versions = VersionFile::new(config.versions_file()).load()?;
    let declared = match args.contract.parse::<Address>() {
        Ok(address) => versions.by_address(address),
        Err(_) => versions.by_name(&args.contract),
    }
    .ok_or_else(|| {
        eyre!("no contract named or at '{}' in {}", args.contract, config.versions_file().display())
    })?;

    let version = cast.version(declared.address);
    let version_code = cast.version_code(declared.address);

    match (&version, &version_code) {
        (Ok(version), Ok(code)) => {
            output::print_success(&format!("{} verification:", declared.name));
            println!("   Address:      {}", declared.address);
            println!("   VERSION:      {version}");
            println!("   VERSION_CODE: {code}");
            if !declared.version_matches(version) || !declared.version_code_matches(code) {
                output::print_warning(&format!(
                    "declared {} ({}) differs from on-chain",
                    declared.version, declared.version_code
                ));
            }
        }
        _ => {
            for e in [version.as_ref().err(), version_code.as_ref().err()].into_iter().flatten() {
                output::print_error(&format!("Error: {e}"));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
