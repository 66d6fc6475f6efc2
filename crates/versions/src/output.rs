use crate::{OnChainVersion, ReconcileEntry, ReconcileStatus, VersionSource};
use aastar_constants::ContractVersion;
use alloy::primitives::Address;
use colored::Colorize;
use std::{borrow::Cow, collections::HashMap, io::Write};

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{}", format!("✅ {msg}").green());
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{}", format!("❌ {msg}").red());
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("{}", format!("⚠️  {msg}").yellow());
}

/// Print an informational message.
pub fn print_info(msg: &str) {
    println!("{}", msg.blue());
}

/// Print a bold title with an underline.
pub fn print_banner(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(60));
}

/// Format a `from → to` change line.
pub fn format_change(label: &str, from: impl std::fmt::Display, to: impl std::fmt::Display) -> String {
    format!("   {label}: {from} → {to}")
}

/// Print the console line(s) for one reconciled record.
pub fn print_reconcile_entry(entry: &ReconcileEntry) {
    match &entry.status {
        ReconcileStatus::NoInterface => {
            print_warning(&format!("{}: no VERSION interface, skipped", entry.name));
        }
        ReconcileStatus::InvalidVersionCode(code) => {
            print_warning(&format!("{}: unreadable VERSION_CODE {code:?}, skipped", entry.name));
        }
        ReconcileStatus::UpToDate => {
            print_success(&format!("{}: up to date", entry.name));
        }
        ReconcileStatus::Updated(update) => {
            println!("{}", format!("🔄 {} ({}): update needed", entry.name, entry.path).cyan());
            println!("{}", format_change("version", &update.from_version, &update.to_version));
            println!("{}", format_change("versionCode", update.from_code, update.to_code));
            println!("   deployedAt: {}", update.deployed_at);
        }
    }
}

/// A [`VersionSource`] that shows a transient `Checking <name>...` line
/// while each fetch runs. Addresses with no known contract are shown as
/// the address itself.
#[derive(Debug, Clone)]
pub struct Progress<S> {
    inner: S,
    names: HashMap<Address, String>,
}

impl<S> Progress<S> {
    /// Wrap a source, labelling each address with its contract name. When
    /// an address appears more than once, the first name wins.
    pub fn new<'a, I>(inner: S, contracts: I) -> Self
    where
        I: IntoIterator<Item = &'a ContractVersion>,
    {
        let mut names = HashMap::new();
        for contract in contracts {
            names.entry(contract.address).or_insert_with(|| contract.name.clone());
        }
        Self { inner, names }
    }

    /// The label shown while `address` is fetched.
    pub fn label(&self, address: Address) -> Cow<'_, str> {
        self.names
            .get(&address)
            .map_or_else(|| Cow::Owned(address.to_string()), |name| Cow::Borrowed(name.as_str()))
    }
}

impl<S: VersionSource> VersionSource for Progress<S> {
    fn fetch(&self, address: Address) -> OnChainVersion {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "Checking {}...", self.label(address));
        let _ = stdout.flush();
        drop(stdout);

        let observed = self.inner.fetch(address);

        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "\r\x1b[K");
        let _ = stdout.flush();
        observed
    }
}
