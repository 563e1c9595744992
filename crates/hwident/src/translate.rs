//! Raw identifier to descriptive label translation.

use std::fmt;

use crate::table::{DeviceInfo, DeviceTable};

/// Marker used in the fallback label for identifiers the table lacks.
pub const UNKNOWN_DEVICE: &str = "Unknown device";

/// Outcome of looking a raw identifier up in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'t, 'r> {
    /// The identifier is in the table.
    Known(&'t DeviceInfo),
    /// The identifier is not in the table; carries the input verbatim.
    Unknown(&'r str),
}

impl Resolution<'_, '_> {
    pub fn is_known(&self) -> bool {
        matches!(self, Resolution::Known(_))
    }
}

/// Renders the label, or `Unknown device (<raw>)` for a miss.
impl fmt::Display for Resolution<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Known(info) => f.write_str(&info.label),
            Resolution::Unknown(raw) => write!(f, "{UNKNOWN_DEVICE} ({raw})"),
        }
    }
}

/// Maps raw identifiers to labels through a [`DeviceTable`].
///
/// Matching is exact and case-sensitive; the input is never trimmed or
/// otherwise normalized, so `"iPhone10,1x"` does not match `"iPhone10,1"`.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    table: &'t DeviceTable,
}

impl<'t> Translator<'t> {
    pub fn new(table: &'t DeviceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t DeviceTable {
        self.table
    }

    pub fn resolve<'r>(&self, raw: &'r str) -> Resolution<'t, 'r> {
        match self.table.get(raw) {
            Some(info) => Resolution::Known(info),
            None => Resolution::Unknown(raw),
        }
    }

    /// The label for `raw`, or the fallback form embedding `raw`.
    pub fn translate(&self, raw: &str) -> String {
        self.resolve(raw).to_string()
    }
}

impl Translator<'static> {
    /// A translator over the built-in table.
    pub fn builtin() -> Self {
        Self::new(DeviceTable::builtin())
    }
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Translate `raw` with the built-in table.
pub fn translate(raw: &str) -> String {
    Translator::builtin().translate(raw)
}
