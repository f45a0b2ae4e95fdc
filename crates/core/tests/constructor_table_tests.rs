//! Integration tests for the keyed constructor tables
//!
//! Covers both lookup policies side by side: strict tables reject unknown
//! keys, defaulting tables absorb them.

use kiln_core::{ConstructorTable, CoreError, DefaultingTable, ErrorReport};
use once_cell::sync::Lazy;

trait Codec: Send + Sync {
    fn name(&self) -> &'static str;
}

struct Gzip;
struct Brotli;
struct Identity;

impl Codec for Gzip {
    fn name(&self) -> &'static str {
        "gzip"
    }
}

impl Codec for Brotli {
    fn name(&self) -> &'static str {
        "br"
    }
}

impl Codec for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }
}

fn gzip() -> Box<dyn Codec> {
    Box::new(Gzip)
}

fn brotli() -> Box<dyn Codec> {
    Box::new(Brotli)
}

fn identity() -> Box<dyn Codec> {
    Box::new(Identity)
}

static STRICT: Lazy<ConstructorTable<Box<dyn Codec>>> = Lazy::new(|| {
    ConstructorTable::new("codecs")
        .register("gzip", gzip)
        .register("br", brotli)
});

static LENIENT: Lazy<DefaultingTable<Box<dyn Codec>>> = Lazy::new(|| {
    ConstructorTable::new("codecs-lenient")
        .register("gzip", gzip)
        .register("br", brotli)
        .with_default("identity", identity)
});

#[test]
fn test_strict_table_rejects_unknown_key() {
    assert_eq!(STRICT.create("gzip").unwrap().name(), "gzip");

    let err = STRICT.create("zstd").err().unwrap();
    assert!(matches!(err, CoreError::UnknownKey { ref key, .. } if key == "zstd"));

    let report = ErrorReport::from(&err);
    assert_eq!(report.hint.as_deref(), Some("Use one of: br, gzip"));
}

#[test]
fn test_defaulting_table_absorbs_unknown_key() {
    assert_eq!(LENIENT.create("br").name(), "br");
    assert_eq!(LENIENT.create("zstd").name(), "identity");
    assert_eq!(LENIENT.resolve_key("zstd"), "identity");
    assert_eq!(LENIENT.keys(), vec!["br", "gzip", "identity"]);
}

#[test]
fn test_strict_view_of_defaulting_table() {
    assert!(LENIENT.strict().create("zstd").is_err());
    assert_eq!(LENIENT.default_key(), "identity");
    assert!(!STRICT.contains("identity"));
}
