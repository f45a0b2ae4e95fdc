//! # kiln-logistics
//!
//! Picks a logistics strategy by key and plans a delivery with the transport
//! it creates. Unknown keys fall back to road logistics.

pub mod logistics;
pub mod registry;
pub mod transport;

pub use logistics::{
    plan_delivery, AirLogistics, DeliveryKind, DeliveryPlan, Logistics, RoadLogistics,
    SeaLogistics,
};
pub use registry::{create_logistics, delivery_keys, resolve_delivery_key, DEFAULT_DELIVERY};
pub use transport::{Plane, Ship, Transport, Truck};
