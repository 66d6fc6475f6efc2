#![allow(dead_code)]

use aastar_constants::test_utils;
use aastar_versions::{OnChainVersion, VersionSource};
use alloy::primitives::Address;
use chrono::NaiveDate;
use std::{cell::RefCell, collections::HashMap};

/// An in-memory chain. Unknown addresses have no VERSION interface.
#[derive(Debug, Default)]
pub struct FakeChain {
    versions: HashMap<Address, (Option<String>, Option<String>)>,
    calls: RefCell<Vec<Address>>,
}

impl FakeChain {
    /// A chain where every fixture contract reports its declared version.
    pub fn matching_fixture() -> Self {
        let mut chain = Self::default();
        for contract in test_utils::versions().contracts() {
            chain = chain.with(contract.address, &contract.version, &contract.version_code.to_string());
        }
        chain
    }

    pub fn with(mut self, address: Address, version: &str, code: &str) -> Self {
        self.versions.insert(address, (Some(version.to_string()), Some(code.to_string())));
        self
    }

    pub fn with_partial(mut self, address: Address, version: Option<&str>, code: Option<&str>) -> Self {
        self.versions.insert(address, (version.map(Into::into), code.map(Into::into)));
        self
    }

    pub fn without(mut self, address: Address) -> Self {
        self.versions.remove(&address);
        self
    }

    pub fn calls(&self) -> Vec<Address> {
        self.calls.borrow().clone()
    }
}

impl VersionSource for FakeChain {
    fn fetch(&self, address: Address) -> OnChainVersion {
        self.calls.borrow_mut().push(address);
        match self.versions.get(&address) {
            Some((version, version_code)) => {
                OnChainVersion { address, version: version.clone(), version_code: version_code.clone() }
            }
            None => OnChainVersion::missing(address),
        }
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
}
