//! hwident - hardware model identification
//!
//! This library reads the raw hardware identifier of the device it runs on
//! (such as `iPhone14,2`) and translates it into a human-readable name (such
//! as `iPhone 13 Pro`) through a static table of known identifiers.

mod builtin;
pub mod machine;
pub mod table;
pub mod translate;

pub use hwprobe::{HostReader, IdentifierSource, ReadError};
pub use machine::{
    IdentifierKind, UNKNOWN_IDENTIFIER, identifier_kind, platform_label, platform_label_from,
    raw_identifier, raw_identifier_from,
};
pub use table::{DeviceFamily, DeviceInfo, DeviceTable, TableError};
pub use translate::{Resolution, Translator, UNKNOWN_DEVICE, translate};
