//! The identifier mapping table.
//!
//! A [`DeviceTable`] associates raw hardware identifiers with human-readable
//! labels. Keys are literal strings matched exactly; there are no patterns.
//! The built-in table is constructed once on first use and never mutated.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

use crate::builtin;

/// Product family of a table entry. Informational only, never used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFamily {
    IPhone,
    IPod,
    IPad,
    Watch,
    AppleTv,
    HomePod,
    Mac,
    Simulator,
}

impl DeviceFamily {
    /// All families, in the order the built-in table lists them.
    pub const ALL: [DeviceFamily; 8] = [
        DeviceFamily::IPhone,
        DeviceFamily::IPod,
        DeviceFamily::IPad,
        DeviceFamily::Watch,
        DeviceFamily::AppleTv,
        DeviceFamily::HomePod,
        DeviceFamily::Mac,
        DeviceFamily::Simulator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeviceFamily::IPhone => "iPhone",
            DeviceFamily::IPod => "iPod touch",
            DeviceFamily::IPad => "iPad",
            DeviceFamily::Watch => "Apple Watch",
            DeviceFamily::AppleTv => "Apple TV",
            DeviceFamily::HomePod => "HomePod",
            DeviceFamily::Mac => "Mac",
            DeviceFamily::Simulator => "Simulator",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// The raw identifier, e.g. `iPhone14,2`.
    pub identifier: Cow<'static, str>,
    /// The descriptive label, e.g. `iPhone 13 Pro`.
    pub label: Cow<'static, str>,
    pub family: DeviceFamily,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Empty identifier for label {label:?}")]
    EmptyIdentifier { label: String },

    #[error("Duplicate identifier: {identifier:?}")]
    DuplicateIdentifier { identifier: String },
}

/// An immutable exact-match table from raw identifier to [`DeviceInfo`].
///
/// Entries keep their insertion order for listing; lookups go through a
/// hash index and are case-sensitive, whole-string comparisons.
#[derive(Debug, Clone)]
pub struct DeviceTable {
    entries: Vec<DeviceInfo>,
    index: HashMap<Cow<'static, str>, usize>,
}

static BUILTIN: LazyLock<DeviceTable> =
    LazyLock::new(|| DeviceTable::from_trusted(builtin::ENTRIES));

impl DeviceTable {
    /// Build a table, checking that every identifier is non-empty and unique.
    pub fn new<I, K, L>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, L, DeviceFamily)>,
        K: Into<Cow<'static, str>>,
        L: Into<Cow<'static, str>>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (identifier, label, family) in entries {
            let info = DeviceInfo {
                identifier: identifier.into(),
                label: label.into(),
                family,
            };

            if info.identifier.is_empty() {
                return Err(TableError::EmptyIdentifier {
                    label: info.label.into_owned(),
                });
            }
            if table.index.contains_key(&info.identifier) {
                return Err(TableError::DuplicateIdentifier {
                    identifier: info.identifier.into_owned(),
                });
            }

            table.push(info);
        }

        Ok(table)
    }

    /// The table shipped with this crate.
    pub fn builtin() -> &'static DeviceTable {
        &BUILTIN
    }

    /// Build from static rows without validation. The first row for an
    /// identifier wins. The built-in rows are validated by tests instead.
    fn from_trusted(rows: &'static [(&'static str, &'static str, DeviceFamily)]) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(rows.len()),
            index: HashMap::with_capacity(rows.len()),
        };
        for &(identifier, label, family) in rows {
            if table.index.contains_key(identifier) {
                continue;
            }
            table.push(DeviceInfo {
                identifier: Cow::Borrowed(identifier),
                label: Cow::Borrowed(label),
                family,
            });
        }
        table
    }

    fn push(&mut self, info: DeviceInfo) {
        self.index.insert(info.identifier.clone(), self.entries.len());
        self.entries.push(info);
    }

    /// Look up an identifier by exact match.
    pub fn get(&self, identifier: &str) -> Option<&DeviceInfo> {
        self.index.get(identifier).map(|&i| &self.entries[i])
    }

    /// The label for an identifier, if the table knows it.
    pub fn label(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).map(|info| info.label.as_ref())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceInfo> {
        self.entries.iter()
    }

    /// Entries of one family, in source order.
    pub fn family(&self, family: DeviceFamily) -> impl Iterator<Item = &DeviceInfo> {
        self.entries.iter().filter(move |info| info.family == family)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeviceTable {
    type Item = &'a DeviceInfo;
    type IntoIter = std::slice::Iter<'a, DeviceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
