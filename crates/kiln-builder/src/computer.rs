use crate::builder::ComputerBuilder;
use serde::Serialize;
use std::fmt;

/// Finalized hardware configuration
///
/// Only [`ComputerBuilder::build`] creates values of this type, and there are
/// no setters: a `Computer` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computer {
    cpu: String,
    gpu: String,
    ram: u32,
    storage: String,
    motherboard: String,
    has_ssd: bool,
    has_wifi: bool,
}

impl Computer {
    pub(crate) fn new(
        cpu: String,
        gpu: String,
        ram: u32,
        storage: String,
        motherboard: String,
        has_ssd: bool,
        has_wifi: bool,
    ) -> Self {
        Self {
            cpu,
            gpu,
            ram,
            storage,
            motherboard,
            has_ssd,
            has_wifi,
        }
    }

    /// Start a new builder
    pub fn builder() -> ComputerBuilder {
        ComputerBuilder::new()
    }

    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    /// GPU description, empty when none was set
    pub fn gpu(&self) -> &str {
        &self.gpu
    }

    /// Memory in gigabytes
    pub fn ram(&self) -> u32 {
        self.ram
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn motherboard(&self) -> &str {
        &self.motherboard
    }

    pub fn has_ssd(&self) -> bool {
        self.has_ssd
    }

    pub fn has_wifi(&self) -> bool {
        self.has_wifi
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Computer{{cpu='{}', gpu='{}', ram={}GB, storage='{}', motherboard='{}', hasSSD={}, hasWiFi={}}}",
            self.cpu, self.gpu, self.ram, self.storage, self.motherboard, self.has_ssd, self.has_wifi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Computer {
        Computer::new(
            "Intel i5".to_string(),
            String::new(),
            16,
            "500GB HDD".to_string(),
            "Board A".to_string(),
            false,
            true,
        )
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            sample().to_string(),
            "Computer{cpu='Intel i5', gpu='', ram=16GB, storage='500GB HDD', motherboard='Board A', hasSSD=false, hasWiFi=true}"
        );
    }

    #[test]
    fn test_serializes_all_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["cpu"], "Intel i5");
        assert_eq!(json["ram"], 16);
        assert_eq!(json["has_ssd"], false);
        assert_eq!(json["has_wifi"], true);
    }
}
