use crate::transport::{Plane, Ship, Transport, Truck};
use serde::Serialize;
use std::fmt;

/// Delivery strategies known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    Road,
    Sea,
    Air,
}

impl DeliveryKind {
    pub fn as_key(&self) -> &'static str {
        match self {
            DeliveryKind::Road => "road",
            DeliveryKind::Sea => "sea",
            DeliveryKind::Air => "air",
        }
    }
}

impl fmt::Display for DeliveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// A logistics strategy
///
/// Implementations supply the transport; [`plan_delivery`] drives it.
pub trait Logistics: Send + Sync {
    fn kind(&self) -> DeliveryKind;

    /// Create the transport used for one delivery
    fn create_transport(&self) -> Box<dyn Transport>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn kind(&self) -> DeliveryKind {
        DeliveryKind::Road
    }

    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn kind(&self) -> DeliveryKind {
        DeliveryKind::Sea
    }

    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AirLogistics;

impl Logistics for AirLogistics {
    fn kind(&self) -> DeliveryKind {
        DeliveryKind::Air
    }

    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Plane)
    }
}

/// Record of the steps a delivery went through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPlan {
    pub kind: DeliveryKind,
    pub steps: Vec<&'static str>,
}

/// Create one transport and run start, deliver, stop on it, in that order
pub fn plan_delivery(logistics: &dyn Logistics) -> DeliveryPlan {
    let transport = logistics.create_transport();

    let steps = vec![
        transport.start_engine(),
        transport.deliver(),
        transport.stop_engine(),
    ];

    tracing::debug!(kind = %logistics.kind(), "Planned delivery");

    DeliveryPlan {
        kind: logistics.kind(),
        steps,
    }
}
