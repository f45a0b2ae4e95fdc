//! Resolution of family keys to widget factories

use crate::error::{FamilyError, FamilyResult};
use crate::factory::{MacFactory, WidgetFactory, WindowsFactory};
use kiln_core::ConstructorTable;
use once_cell::sync::Lazy;

fn windows_factory() -> Box<dyn WidgetFactory> {
    Box::new(WindowsFactory)
}

fn mac_factory() -> Box<dyn WidgetFactory> {
    Box::new(MacFactory)
}

static FAMILIES: Lazy<ConstructorTable<Box<dyn WidgetFactory>>> = Lazy::new(|| {
    ConstructorTable::new("widget-families")
        .register("mac", mac_factory)
        .register("windows", windows_factory)
});

/// Resolve a normalized, lowercase family key to its factory
///
/// Only exact keys match. Anything else, including the
/// [`crate::UNSUPPORTED_PLATFORM`] sentinel, fails with
/// [`FamilyError::UnsupportedFamily`].
pub fn resolve_family(key: &str) -> FamilyResult<Box<dyn WidgetFactory>> {
    FAMILIES.create(key).map_err(|_| FamilyError::unsupported(key))
}

/// Keys accepted by [`resolve_family`], sorted
pub fn supported_families() -> Vec<&'static str> {
    FAMILIES.keys()
}
