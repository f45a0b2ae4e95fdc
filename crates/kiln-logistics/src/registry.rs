//! Key-based creation of logistics strategies

use crate::logistics::{AirLogistics, Logistics, RoadLogistics, SeaLogistics};
use kiln_core::{ConstructorTable, DefaultingTable};
use once_cell::sync::Lazy;

/// Key used when the requested one is not registered
pub const DEFAULT_DELIVERY: &str = "road";

fn road() -> Box<dyn Logistics> {
    Box::new(RoadLogistics)
}

fn sea() -> Box<dyn Logistics> {
    Box::new(SeaLogistics)
}

fn air() -> Box<dyn Logistics> {
    Box::new(AirLogistics)
}

static LOGISTICS: Lazy<DefaultingTable<Box<dyn Logistics>>> = Lazy::new(|| {
    ConstructorTable::new("logistics")
        .register("sea", sea)
        .register("air", air)
        .with_default(DEFAULT_DELIVERY, road)
});

/// Create the logistics strategy for `key`
///
/// Unknown keys do not fail: they get [`DEFAULT_DELIVERY`] logistics.
pub fn create_logistics(key: &str) -> Box<dyn Logistics> {
    LOGISTICS.create(key)
}

/// The registered key `key` resolves to
pub fn resolve_delivery_key(key: &str) -> &'static str {
    LOGISTICS.resolve_key(key)
}

/// Registered keys, sorted
pub fn delivery_keys() -> Vec<&'static str> {
    LOGISTICS.keys()
}
