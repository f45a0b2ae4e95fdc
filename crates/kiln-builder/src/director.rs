//! Ready-made configurations

use crate::builder::ComputerBuilder;
use crate::computer::Computer;
use crate::error::BuildResult;
use kiln_core::CoreError;
use std::fmt;
use std::str::FromStr;

/// Named configurations produced by [`ComputerDirector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputerPreset {
    Gaming,
    Office,
    Server,
    Budget,
}

impl ComputerPreset {
    pub const ALL: [ComputerPreset; 4] = [
        ComputerPreset::Gaming,
        ComputerPreset::Office,
        ComputerPreset::Server,
        ComputerPreset::Budget,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            ComputerPreset::Gaming => "gaming",
            ComputerPreset::Office => "office",
            ComputerPreset::Server => "server",
            ComputerPreset::Budget => "budget",
        }
    }
}

impl fmt::Display for ComputerPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ComputerPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_key() == key)
            .ok_or_else(|| {
                CoreError::unknown_key(
                    "presets",
                    s,
                    Self::ALL.iter().map(|p| p.as_key().to_string()).collect(),
                )
            })
    }
}

/// Encapsulates the construction steps for each preset
pub struct ComputerDirector;

impl ComputerDirector {
    /// The configured, not yet validated builder for `preset`
    pub fn builder_for(preset: ComputerPreset) -> ComputerBuilder {
        match preset {
            ComputerPreset::Gaming => ComputerBuilder::new()
                .with_cpu("Intel i9-13900K")
                .with_gpu("NVIDIA RTX 4090")
                .with_ram(32)
                .with_motherboard("ASUS ROG Strix Z790")
                .with_storage("2TB NVMe SSD")
                .with_ssd(true)
                .with_wifi(true),
            ComputerPreset::Office => ComputerBuilder::new()
                .with_cpu("Intel i5-13400")
                .with_gpu("Intel UHD Graphics")
                .with_ram(16)
                .with_motherboard("MSI B760M")
                .with_storage("512GB SSD")
                .with_ssd(true)
                .with_wifi(true),
            // Servers are wired
            ComputerPreset::Server => ComputerBuilder::new()
                .with_cpu("AMD EPYC 7763")
                .with_ram(128)
                .with_motherboard("Supermicro H12SSL")
                .with_storage("4TB Enterprise SSD")
                .with_ssd(true)
                .with_wifi(false),
            ComputerPreset::Budget => ComputerBuilder::new()
                .with_cpu("AMD Ryzen 3 4300G")
                .with_gpu("AMD Radeon Graphics")
                .with_ram(8)
                .with_motherboard("ASRock A520M")
                .with_storage("256GB SSD")
                .with_ssd(true)
                .with_wifi(true),
        }
    }

    pub fn build(preset: ComputerPreset) -> BuildResult<Computer> {
        Self::builder_for(preset).build()
    }

    pub fn gaming_pc() -> BuildResult<Computer> {
        Self::build(ComputerPreset::Gaming)
    }

    pub fn office_pc() -> BuildResult<Computer> {
        Self::build(ComputerPreset::Office)
    }

    pub fn server_pc() -> BuildResult<Computer> {
        Self::build(ComputerPreset::Server)
    }

    pub fn budget_pc() -> BuildResult<Computer> {
        Self::build(ComputerPreset::Budget)
    }
}
