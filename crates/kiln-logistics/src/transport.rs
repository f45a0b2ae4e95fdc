//! Transport contract and vehicles
//!
//! Each action returns the line it would display.

pub trait Transport: Send + Sync {
    fn start_engine(&self) -> &'static str;
    fn deliver(&self) -> &'static str;
    fn stop_engine(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Truck;

impl Transport for Truck {
    fn start_engine(&self) -> &'static str {
        "Starting truck engine"
    }

    fn deliver(&self) -> &'static str {
        "Delivering by land in a truck"
    }

    fn stop_engine(&self) -> &'static str {
        "Stopping truck engine"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Ship;

impl Transport for Ship {
    fn start_engine(&self) -> &'static str {
        "Starting ship engine"
    }

    fn deliver(&self) -> &'static str {
        "Delivering by sea in a ship"
    }

    fn stop_engine(&self) -> &'static str {
        "Stopping ship engine"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Plane;

impl Transport for Plane {
    fn start_engine(&self) -> &'static str {
        "Starting plane engine"
    }

    fn deliver(&self) -> &'static str {
        "Delivering by air in a plane"
    }

    fn stop_engine(&self) -> &'static str {
        "Stopping plane engine"
    }
}
