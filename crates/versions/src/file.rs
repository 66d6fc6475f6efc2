use crate::VersionFileError;
use aastar_constants::ContractVersions;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// The contract versions file on disk.
///
/// The file is read whole and replaced whole. There is no lock and no
/// backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    /// Create a handle for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<ContractVersions, VersionFileError> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|source| VersionFileError::Io { path: self.path.clone(), source })?;
        let versions = ContractVersions::from_json_str(&contents)
            .map_err(|source| VersionFileError::Parse { path: self.path.clone(), source })?;
        debug!(contracts = versions.len(), "loaded contract versions");
        Ok(versions)
    }

    /// Serialize the document and atomically replace the file with it.
    ///
    /// The new contents are written to a temporary file in the same
    /// directory, which is then renamed over the original.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn store(&self, versions: &ContractVersions) -> Result<(), VersionFileError> {
        let contents = versions.to_json_string().map_err(VersionFileError::Serialize)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let io_err = |source| VersionFileError::Io { path: self.path.clone(), source };

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(contents.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path)
            .map_err(|source| VersionFileError::Persist { path: self.path.clone(), source })?;

        debug!(bytes = contents.len(), "stored contract versions");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use aastar_constants::{test_utils, ContractPath};

    #[test]
    fn store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = VersionFile::new(dir.path().join("contract-versions.json"));
        fs::write(file.path(), test_utils::VERSIONS_JSON).unwrap();

        let mut versions = file.load().unwrap();
        versions.get_mut(&ContractPath::new("core", "registry")).unwrap().version_code = 20104;
        file.store(&versions).unwrap();

        assert_eq!(file.load().unwrap(), versions);
        let on_disk = fs::read_to_string(file.path()).unwrap();
        assert_eq!(on_disk, test_utils::VERSIONS_JSON.replacen("20103", "20104", 1));
    }

    #[test]
    fn load_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = VersionFile::new(&path).load().unwrap_err();
        assert!(matches!(err, VersionFileError::Io { .. }));
        assert!(err.to_string().starts_with(&path.display().to_string()));

        fs::write(&path, "{ not json").unwrap();
        let err = VersionFile::new(&path).load().unwrap_err();
        assert!(matches!(err, VersionFileError::Parse { .. }));
    }
}
