use crate::{OnChainVersion, VersionSource};
use aastar_constants::{ContractPath, ContractVersion, ContractVersions};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// A change applied to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUpdate {
    /// Declared version before the update.
    pub from_version: String,
    /// Observed version, now declared.
    pub to_version: String,
    /// Declared version code before the update.
    pub from_code: u64,
    /// Observed version code, now declared.
    pub to_code: u64,
    /// New deployment date.
    pub deployed_at: NaiveDate,
}

/// What happened to one record during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileStatus {
    /// At least one of `VERSION` / `VERSION_CODE` could not be read. The
    /// record is left alone.
    NoInterface,
    /// The on-chain version code is not a `u64`. The record is left alone.
    InvalidVersionCode(String),
    /// Declared and observed values agree.
    UpToDate,
    /// The record was updated to the observed values.
    Updated(VersionUpdate),
}

/// The result of reconciling one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileEntry {
    /// Where the record lives in the document.
    pub path: ContractPath,
    /// Contract name.
    pub name: String,
    /// What happened.
    pub status: ReconcileStatus,
}

/// The result of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The document with all updates applied. Equal to the input if nothing
    /// was updated.
    pub document: ContractVersions,
    /// Per-record results, in declaration order.
    pub entries: Vec<ReconcileEntry>,
}

impl ReconcileOutcome {
    /// True if any record was updated.
    pub fn has_updates(&self) -> bool {
        self.updated().next().is_some()
    }

    /// Records that were updated.
    pub fn updated(&self) -> impl Iterator<Item = (&ContractPath, &VersionUpdate)> {
        self.entries.iter().filter_map(|e| match &e.status {
            ReconcileStatus::Updated(update) => Some((&e.path, update)),
            _ => None,
        })
    }

    /// Number of records that were skipped.
    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                matches!(
                    e.status,
                    ReconcileStatus::NoInterface | ReconcileStatus::InvalidVersionCode(_)
                )
            })
            .count()
    }
}

/// Brings declared contract versions in line with on-chain data.
///
/// Records are fetched and compared one at a time in declaration order.
/// When either value differs, the record's version, version code and
/// deployment date are replaced. Updates are applied in place to a copy of
/// the parsed document, so records sharing a name never interfere.
#[derive(Debug, Clone)]
pub struct Reconciler<S> {
    source: S,
    today: NaiveDate,
}

impl<S: VersionSource> Reconciler<S> {
    /// Create a new reconciler. `today` becomes the deployment date of
    /// updated records.
    pub const fn new(source: S, today: NaiveDate) -> Self {
        Self { source, today }
    }

    /// Reconcile every record in the document.
    pub fn reconcile(&self, versions: &ContractVersions) -> ReconcileOutcome {
        self.reconcile_with(versions, |_| {})
    }

    /// Reconcile every record, calling `on_entry` as each one completes.
    pub fn reconcile_with<F>(&self, versions: &ContractVersions, mut on_entry: F) -> ReconcileOutcome
    where
        F: FnMut(&ReconcileEntry),
    {
        let mut document = versions.clone();
        let mut entries = Vec::with_capacity(document.len());

        for (path, record) in document.entries_mut() {
            let observed = self.source.fetch(record.address);
            let status = self.check(record, &observed);

            if let ReconcileStatus::Updated(update) = &status {
                record.version.clone_from(&update.to_version);
                record.version_code = update.to_code;
                record.deployed_at = update.deployed_at;
                info!(%path, from = %update.from_version, to = %update.to_version, "version updated");
            }

            let entry = ReconcileEntry { path, name: record.name.clone(), status };
            on_entry(&entry);
            entries.push(entry);
        }

        ReconcileOutcome { document, entries }
    }

    fn check(&self, declared: &ContractVersion, observed: &OnChainVersion) -> ReconcileStatus {
        let (Some(version), Some(code)) = (&observed.version, &observed.version_code) else {
            warn!(name = %declared.name, address = %declared.address, "no VERSION interface");
            return ReconcileStatus::NoInterface;
        };

        if declared.version_matches(version) && declared.version_code_matches(code) {
            debug!(name = %declared.name, %version, "up to date");
            return ReconcileStatus::UpToDate;
        }

        let Ok(to_code) = code.parse::<u64>() else {
            warn!(name = %declared.name, %code, "unparseable VERSION_CODE");
            return ReconcileStatus::InvalidVersionCode(code.clone());
        };

        ReconcileStatus::Updated(VersionUpdate {
            from_version: declared.version.clone(),
            to_version: version.clone(),
            from_code: declared.version_code,
            to_code,
            deployed_at: self.today,
        })
    }
}
