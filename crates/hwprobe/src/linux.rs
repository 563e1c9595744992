use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{IdentifierSource, ReadError, firmware_model};

/// Files consulted in order, relative to the filesystem root.
///
/// DMI covers PCs and servers, the devicetree covers ARM boards.
const MODEL_FILES: &[&str] = &[
    "sys/devices/virtual/dmi/id/product_name",
    "sys/firmware/devicetree/base/model",
];

/// Hardware identifier reader for Linux and Android.
///
/// Tries the DMI product name, then the devicetree model. The `uname` machine
/// field is not used: it names the CPU architecture, not the model.
#[derive(Debug, Clone)]
pub struct HostReader {
    root: PathBuf,
}

impl HostReader {
    /// Create a reader for the running system.
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Create a reader that looks for sysfs under another root directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The filesystem root this reader looks under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_model_file(&self, relative: &str) -> Result<Option<String>, ReadError> {
        let path = self.root.join(relative);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                debug!(?path, %err, "model file not readable");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        match firmware_model(&bytes, "sysfs") {
            Ok(value) => Ok(Some(value)),
            Err(ReadError::Empty { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl IdentifierSource for HostReader {
    fn read_identifier(&self) -> Result<String, ReadError> {
        let mut last_err = None;
        for relative in MODEL_FILES {
            match self.read_model_file(relative) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => {}
                Err(err) => {
                    debug!(file = *relative, %err, "skipping model file");
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or(ReadError::Empty {
            source_name: "sysfs",
        }))
    }
}

impl Default for HostReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(root: &Path, relative: &str, contents: &[u8]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn dmi_product_name_wins() {
        let root = tempfile::tempdir().unwrap();
        stage(root.path(), MODEL_FILES[0], b"ThinkPad X1 Carbon Gen 9\n");
        stage(root.path(), MODEL_FILES[1], b"Raspberry Pi 4 Model B Rev 1.4\0");

        let reader = HostReader::with_root(root.path());
        assert_eq!(reader.read_identifier().unwrap(), "ThinkPad X1 Carbon Gen 9");
    }

    #[test]
    fn devicetree_model_strips_nul() {
        let root = tempfile::tempdir().unwrap();
        stage(root.path(), MODEL_FILES[1], b"Raspberry Pi 4 Model B Rev 1.4\0");

        let reader = HostReader::with_root(root.path());
        assert_eq!(
            reader.read_identifier().unwrap(),
            "Raspberry Pi 4 Model B Rev 1.4"
        );
    }

    #[test]
    fn blank_and_placeholder_values_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        stage(root.path(), MODEL_FILES[0], b"To Be Filled By O.E.M.\n");
        stage(root.path(), MODEL_FILES[1], b"Pine64 RockPro64 v2.1\0");
        let reader = HostReader::with_root(root.path());
        assert_eq!(reader.read_identifier().unwrap(), "Pine64 RockPro64 v2.1");

        let root = tempfile::tempdir().unwrap();
        stage(root.path(), MODEL_FILES[0], b"   \n");
        stage(root.path(), MODEL_FILES[1], b"Pine64 RockPro64 v2.1\0");
        let reader = HostReader::with_root(root.path());
        assert_eq!(reader.read_identifier().unwrap(), "Pine64 RockPro64 v2.1");
    }

    #[test]
    fn nothing_staged_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let reader = HostReader::with_root(root.path());
        assert!(matches!(
            reader.read_identifier(),
            Err(ReadError::Empty {
                source_name: "sysfs"
            })
        ));
    }

    #[test]
    fn directory_in_place_of_file_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join(MODEL_FILES[0])).unwrap();
        fs::create_dir_all(root.path().join(MODEL_FILES[1])).unwrap();
        let reader = HostReader::with_root(root.path());
        assert!(matches!(reader.read_identifier(), Err(ReadError::Io(_))));
    }

    #[test]
    fn host_reader_defaults_to_real_root() {
        assert_eq!(HostReader::default().root(), Path::new("/"));
    }
}
