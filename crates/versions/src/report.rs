use crate::VersionSource;
use aastar_constants::ContractVersion;
use alloy::primitives::Address;
use std::fmt;

const MISSING: &str = "ERROR";
const MATCH: &str = "✅";
const MISMATCH: &str = "❌";

/// Declared and observed VERSION data for one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Contract name.
    pub name: String,
    /// Contract address.
    pub address: Address,
    /// Declared version.
    pub declared_version: String,
    /// Observed version, `None` if the read failed.
    pub observed_version: Option<String>,
    /// Declared version code.
    pub declared_code: u64,
    /// Observed version code, `None` if the read failed.
    pub observed_code: Option<String>,
}

impl Comparison {
    /// True if the observed version equals the declared one. A failed read
    /// never matches.
    pub fn version_matches(&self) -> bool {
        self.observed_version.as_deref() == Some(self.declared_version.as_str())
    }

    /// True if the observed version code equals the declared one, compared
    /// as decimal strings. A failed read never matches.
    pub fn version_code_matches(&self) -> bool {
        self.observed_code.as_deref() == Some(self.declared_code.to_string().as_str())
    }

    /// True if both values match.
    pub fn is_match(&self) -> bool {
        self.version_matches() && self.version_code_matches()
    }
}

const fn mark(ok: bool) -> &'static str {
    if ok {
        MATCH
    } else {
        MISMATCH
    }
}

/// A side-by-side comparison of declared and on-chain versions.
///
/// Displays as a fixed-width table followed by a legend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionReport {
    rows: Vec<Comparison>,
}

impl VersionReport {
    /// Get the rows, in input order.
    pub fn rows(&self) -> &[Comparison] {
        &self.rows
    }

    /// Rows where either value does not match.
    pub fn mismatches(&self) -> impl Iterator<Item = &Comparison> {
        self.rows.iter().filter(|c| !c.is_match())
    }

    /// True if every row matches.
    pub fn all_match(&self) -> bool {
        self.mismatches().next().is_none()
    }
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {:<18} | {:<42} | {:<7} | {:<8} | ✓ | {:<12} | {:<13} | ✓ |",
            "Contract Name", "Address", "Config", "On-Chain", "Config Code", "On-Chain Code"
        )?;
        writeln!(
            f,
            "|{}|{}|{}|{}|───|{}|{}|───|",
            "─".repeat(20),
            "─".repeat(44),
            "─".repeat(9),
            "─".repeat(10),
            "─".repeat(14),
            "─".repeat(15),
        )?;

        for row in &self.rows {
            writeln!(
                f,
                "| {:<18} | {:<42} | {:<7} | {:<8} | {} | {:<12} | {:<13} | {} |",
                row.name,
                row.address.to_string(),
                row.declared_version,
                row.observed_version.as_deref().unwrap_or(MISSING),
                mark(row.version_matches()),
                row.declared_code,
                row.observed_code.as_deref().unwrap_or(MISSING),
                mark(row.version_code_matches()),
            )?;
        }

        writeln!(f)?;
        write!(f, "Legend: {MATCH} = Match, {MISMATCH} = Mismatch or Error")
    }
}

/// Compares declared versions against on-chain data without modifying
/// anything.
#[derive(Debug, Clone)]
pub struct Reporter<S> {
    source: S,
}

impl<S: VersionSource> Reporter<S> {
    /// Create a new reporter.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Compare every contract, in order.
    pub fn report<'a, I>(&self, contracts: I) -> VersionReport
    where
        I: IntoIterator<Item = &'a ContractVersion>,
    {
        self.report_with(contracts, |_| {})
    }

    /// Compare every contract, calling `on_row` as each one completes.
    pub fn report_with<'a, I, F>(&self, contracts: I, mut on_row: F) -> VersionReport
    where
        I: IntoIterator<Item = &'a ContractVersion>,
        F: FnMut(&Comparison),
    {
        let rows = contracts
            .into_iter()
            .map(|declared| {
                let observed = self.source.fetch(declared.address);
                let row = Comparison {
                    name: declared.name.clone(),
                    address: declared.address,
                    declared_version: declared.version.clone(),
                    observed_version: observed.version,
                    declared_code: declared.version_code,
                    observed_code: observed.version_code,
                };
                on_row(&row);
                row
            })
            .collect();
        VersionReport { rows }
    }
}
