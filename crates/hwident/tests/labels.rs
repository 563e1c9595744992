//! End-to-end label tests, with the host replaced by fixed identifiers.

use hwident::{
    DeviceTable, IdentifierSource, ReadError, UNKNOWN_DEVICE, UNKNOWN_IDENTIFIER, platform_label,
    platform_label_from, raw_identifier, raw_identifier_from,
};

/// Entries pinned from the maintained table.
const PINNED: &[(&str, &str)] = &[
    ("iPhone14,2", "iPhone 13 Pro"),
    ("iPhone10,1", "iPhone 8"),
    ("iPhone12,8", "iPhone SE (2nd generation)"),
    ("iPhone17,5", "iPhone 16e"),
    ("iPod9,1", "iPod touch (7th generation)"),
    ("iPad13,18", "iPad (10th generation) (Wi-Fi)"),
    ("iPad14,1", "iPad mini (6th generation) (Wi-Fi)"),
    ("iPad16,5", "iPad Pro 13-inch (M4) (Wi-Fi)"),
    ("Watch7,5", "Apple Watch Ultra 2"),
    ("AppleTV14,1", "Apple TV 4K (3rd generation)"),
    ("AudioAccessory6,1", "HomePod (2nd generation)"),
    ("MacBookPro18,3", "MacBook Pro (14-inch, 2021)"),
    ("x86_64", "Simulator"),
];

/// A source that always fails with the error its function builds.
struct Failing(fn() -> ReadError);

impl IdentifierSource for Failing {
    fn read_identifier(&self) -> Result<String, ReadError> {
        Err((self.0)())
    }
}

fn assert_fallback(raw: &str) {
    let label = platform_label_from(raw);
    assert!(!label.is_empty());
    assert!(label.starts_with(UNKNOWN_DEVICE), "{raw:?} matched: {label}");
    assert!(label.contains(raw), "{label:?} does not echo {raw:?}");
}

// ============================================================================
// Known identifiers
// ============================================================================

#[test]
fn test_pinned_entries() {
    for (raw, label) in PINNED {
        assert_eq!(platform_label_from(*raw), *label, "for {raw}");
    }
}

#[test]
fn test_every_table_key_maps_to_its_label() {
    for info in DeviceTable::builtin() {
        assert_eq!(
            platform_label_from(&*info.identifier),
            info.label,
            "for {}",
            info.identifier
        );
    }
}

// ============================================================================
// Unknown identifiers
// ============================================================================

#[test]
fn test_future_device_falls_back() {
    assert_eq!(
        platform_label_from("FutureDevice99,1"),
        "Unknown device (FutureDevice99,1)"
    );
    assert_fallback("FutureDevice99,1");
}

#[test]
fn test_near_misses_fall_back() {
    for raw in [
        "iPhone10,1x",
        "iPhone10,",
        "Phone10,1",
        "IPHONE10,1",
        "iPhone10,1\n",
        "iPhone 8",
    ] {
        assert_fallback(raw);
    }
}

#[test]
fn test_unusual_inputs_fall_back() {
    for raw in [
        "?",
        "iPhone14,2\u{0}",
        "💻",
        "a very long identifier that no vendor would ship",
    ] {
        assert_fallback(raw);
    }
}

// ============================================================================
// Host failures
// ============================================================================

#[test]
fn test_failing_sources_read_as_unknown() {
    let failures: [fn() -> ReadError; 4] = [
        || ReadError::Unsupported,
        || ReadError::Empty {
            source_name: "sysctl",
        },
        || ReadError::NotUtf8 {
            source_name: "registry",
        },
        || ReadError::Io(std::io::Error::other("boom")),
    ];
    for make_err in failures {
        let source = Failing(make_err);
        assert_eq!(raw_identifier_from(&source), UNKNOWN_IDENTIFIER);
        assert_eq!(
            platform_label_from(&source),
            format!("{UNKNOWN_DEVICE} ({UNKNOWN_IDENTIFIER})")
        );
    }
}

// ============================================================================
// Determinism and concurrency
// ============================================================================

#[test]
fn test_deterministic() {
    for raw in ["iPhone14,2", "FutureDevice99,1", ""] {
        assert_eq!(platform_label_from(raw), platform_label_from(raw));
    }
    assert_eq!(platform_label(), platform_label());
}

#[test]
fn test_concurrent_first_use() {
    let results: Vec<(&'static str, String)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| (raw_identifier(), platform_label())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let (first_raw, first_label) = &results[0];
    assert!(!first_raw.is_empty());
    for (raw, label) in &results {
        assert!(std::ptr::eq(*raw, *first_raw));
        assert_eq!(label, first_label);
    }
}
