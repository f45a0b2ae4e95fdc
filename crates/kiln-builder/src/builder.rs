use crate::computer::Computer;
use crate::error::{BuildResult, ComputerField};
use crate::rules::{require_positive, require_text};

/// Storage description used when none is set
pub const DEFAULT_STORAGE: &str = "500GB HDD";

/// Marker rewritten when the SSD flag is turned on
pub const HDD_MARKER: &str = "HDD";
pub const SSD_MARKER: &str = "SSD";

/// Accumulates fields for a [`Computer`]
///
/// Setters never validate. All checks run in [`ComputerBuilder::build`], in a
/// fixed order, and the first failure is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerBuilder {
    cpu: Option<String>,
    gpu: Option<String>,
    ram: i32,
    has_ssd: bool,
    storage: String,
    motherboard: Option<String>,
    has_wifi: bool,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self {
            cpu: None,
            gpu: None,
            ram: 0,
            has_ssd: false,
            storage: DEFAULT_STORAGE.to_string(),
            motherboard: None,
            has_wifi: false,
        }
    }

    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn with_gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }

    /// Memory in gigabytes. Non-positive values are rejected at build time.
    pub fn with_ram(mut self, ram: i32) -> Self {
        self.ram = ram;
        self
    }

    /// Set the SSD flag
    ///
    /// Turning the flag on rewrites every `HDD` in the current storage
    /// description to `SSD`. A storage description set afterwards is kept
    /// as given.
    pub fn with_ssd(mut self, has_ssd: bool) -> Self {
        self.has_ssd = has_ssd;
        if has_ssd && self.storage.contains(HDD_MARKER) {
            let upgraded = self.storage.replace(HDD_MARKER, SSD_MARKER);
            tracing::trace!(from = %self.storage, to = %upgraded, "Upgraded storage to SSD");
            self.storage = upgraded;
        }
        self
    }

    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }

    pub fn with_motherboard(mut self, motherboard: impl Into<String>) -> Self {
        self.motherboard = Some(motherboard.into());
        self
    }

    pub fn with_wifi(mut self, has_wifi: bool) -> Self {
        self.has_wifi = has_wifi;
        self
    }

    /// Current storage description, including any SSD rewrite
    pub fn storage(&self) -> &str {
        &self.storage
    }

    /// Validate and produce the finished value
    ///
    /// Rules, in order: CPU present and non-blank, RAM positive,
    /// motherboard present and non-blank.
    pub fn build(self) -> BuildResult<Computer> {
        let cpu = require_text(ComputerField::Cpu, self.cpu)?;
        let ram = require_positive(ComputerField::Ram, self.ram)?;
        let motherboard = require_text(ComputerField::Motherboard, self.motherboard)?;

        tracing::debug!(cpu = %cpu, ram, motherboard = %motherboard, "Built computer");

        Ok(Computer::new(
            cpu,
            self.gpu.unwrap_or_default(),
            ram,
            self.storage,
            motherboard,
            self.has_ssd,
            self.has_wifi,
        ))
    }
}

impl Default for ComputerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    fn minimal() -> ComputerBuilder {
        ComputerBuilder::new()
            .with_cpu("Intel i5")
            .with_ram(16)
            .with_motherboard("Board A")
    }

    #[test]
    fn test_minimal_build_uses_defaults() {
        let pc = minimal().build().unwrap();

        assert_eq!(pc.cpu(), "Intel i5");
        assert_eq!(pc.ram(), 16);
        assert_eq!(pc.motherboard(), "Board A");
        assert_eq!(pc.gpu(), "");
        assert_eq!(pc.storage(), DEFAULT_STORAGE);
        assert!(!pc.has_ssd());
        assert!(!pc.has_wifi());
    }

    #[test]
    fn test_last_set_value_wins() {
        let pc = minimal()
            .with_cpu("AMD Ryzen 5")
            .with_ram(32)
            .with_gpu("GTX 1060")
            .with_gpu("RTX 3060")
            .with_wifi(true)
            .with_wifi(false)
            .build()
            .unwrap();

        assert_eq!(pc.cpu(), "AMD Ryzen 5");
        assert_eq!(pc.ram(), 32);
        assert_eq!(pc.gpu(), "RTX 3060");
        assert!(!pc.has_wifi());
    }

    #[test]
    fn test_valid_combinations_keep_last_set_values() {
        struct Case {
            cpu: &'static str,
            ram: i32,
            motherboard: &'static str,
            gpu: Option<&'static str>,
            storage: Option<&'static str>,
            wifi: Option<bool>,
        }

        let cases = [
            Case { cpu: "Intel i3", ram: 1, motherboard: "B1", gpu: None, storage: None, wifi: None },
            Case { cpu: "Intel i9", ram: 64, motherboard: "Z790", gpu: Some("RTX 4090"), storage: Some("2TB NVMe"), wifi: Some(true) },
            Case { cpu: " Ryzen 7 ", ram: i32::MAX, motherboard: "X570", gpu: Some(""), storage: Some("1TB HDD"), wifi: Some(false) },
            Case { cpu: "M2", ram: 8, motherboard: "\u{A0}", gpu: Some("integrated"), storage: None, wifi: Some(true) },
            Case { cpu: "EPYC", ram: 512, motherboard: "SP3", gpu: None, storage: Some(""), wifi: None },
        ];

        for case in &cases {
            // Every field is set once with a throwaway value first
            let mut builder = ComputerBuilder::new()
                .with_cpu("placeholder")
                .with_cpu(case.cpu)
                .with_ram(-1)
                .with_ram(case.ram)
                .with_motherboard("placeholder")
                .with_motherboard(case.motherboard);
            if let Some(gpu) = case.gpu {
                builder = builder.with_gpu("placeholder").with_gpu(gpu);
            }
            if let Some(storage) = case.storage {
                builder = builder.with_storage("placeholder").with_storage(storage);
            }
            if let Some(wifi) = case.wifi {
                builder = builder.with_wifi(!wifi).with_wifi(wifi);
            }

            let pc = builder.build().unwrap();

            assert_eq!(pc.cpu(), case.cpu);
            assert_eq!(pc.ram(), case.ram as u32);
            assert_eq!(pc.motherboard(), case.motherboard);
            assert_eq!(pc.gpu(), case.gpu.unwrap_or(""));
            assert_eq!(pc.storage(), case.storage.unwrap_or(DEFAULT_STORAGE));
            assert_eq!(pc.has_wifi(), case.wifi.unwrap_or(false));
            assert!(!pc.has_ssd());
        }
    }

    #[test]
    fn test_ssd_flag_rewrites_every_hdd_marker() {
        let builder = minimal()
            .with_storage("500GB HDD + 1TB HDD")
            .with_ssd(true);

        assert_eq!(builder.storage(), "500GB SSD + 1TB SSD");
        let pc = builder.build().unwrap();
        assert!(pc.has_ssd());
    }

    #[test]
    fn test_ssd_flag_rewrites_default_storage() {
        let pc = minimal().with_ssd(true).build().unwrap();
        assert_eq!(pc.storage(), "500GB SSD");
    }

    #[test]
    fn test_ssd_flag_without_marker_leaves_storage() {
        let builder = minimal().with_storage("1TB NVMe").with_ssd(true);
        assert_eq!(builder.storage(), "1TB NVMe");
    }

    #[test]
    fn test_ssd_flag_false_never_rewrites() {
        let builder = minimal().with_storage("500GB HDD").with_ssd(false);
        assert_eq!(builder.storage(), "500GB HDD");
    }

    #[test]
    fn test_marker_match_is_case_sensitive() {
        let builder = minimal().with_storage("500GB hdd").with_ssd(true);
        assert_eq!(builder.storage(), "500GB hdd");
    }

    #[test]
    fn test_storage_set_after_flag_is_not_rewritten() {
        let pc = minimal()
            .with_ssd(true)
            .with_storage("2TB HDD")
            .build()
            .unwrap();

        assert_eq!(pc.storage(), "2TB HDD");
        assert!(pc.has_ssd());
    }

    #[test]
    fn test_missing_cpu() {
        let err = ComputerBuilder::new()
            .with_ram(16)
            .with_motherboard("Some Board")
            .build()
            .unwrap_err();

        assert_eq!(err, BuildError::missing(ComputerField::Cpu));
    }

    #[test]
    fn test_blank_cpu() {
        let err = minimal().with_cpu("").build().unwrap_err();
        assert_eq!(err, BuildError::missing(ComputerField::Cpu));

        let err = minimal().with_cpu("   ").build().unwrap_err();
        assert_eq!(err, BuildError::missing(ComputerField::Cpu));
    }

    #[test]
    fn test_non_positive_ram() {
        for ram in [0, -8] {
            let err = minimal().with_ram(ram).build().unwrap_err();
            assert_eq!(err, BuildError::invalid(ComputerField::Ram, "must be positive"));
        }
    }

    #[test]
    fn test_missing_motherboard() {
        let err = ComputerBuilder::new()
            .with_cpu("Intel i5")
            .with_ram(8)
            .build()
            .unwrap_err();

        assert_eq!(err, BuildError::missing(ComputerField::Motherboard));
    }

    #[test]
    fn test_first_failure_wins() {
        // Every rule fails; the CPU rule is checked first.
        let err = ComputerBuilder::new().build().unwrap_err();
        assert_eq!(err.field(), ComputerField::Cpu);

        // CPU valid, RAM and motherboard invalid.
        let err = ComputerBuilder::new().with_cpu("x").build().unwrap_err();
        assert_eq!(err.field(), ComputerField::Ram);
    }
}
