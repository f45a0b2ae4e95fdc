use anyhow::Result;
use clap::Args;
use kiln_builder::{Computer, ComputerBuilder, ComputerDirector, ComputerPreset};

#[derive(Args, Debug, Default)]
pub struct ComputerArgs {
    /// Build a ready-made configuration (gaming, office, server, budget)
    #[arg(long, conflicts_with_all = ["cpu", "gpu", "ram", "motherboard", "storage", "ssd", "wifi"])]
    pub preset: Option<ComputerPreset>,

    #[arg(long)]
    pub cpu: Option<String>,

    #[arg(long)]
    pub gpu: Option<String>,

    /// Memory in GB
    #[arg(long, allow_negative_numbers = true)]
    pub ram: Option<i32>,

    #[arg(long)]
    pub motherboard: Option<String>,

    /// Storage description, e.g. "500GB HDD"
    #[arg(long)]
    pub storage: Option<String>,

    /// Use solid-state storage (rewrites HDD to SSD)
    #[arg(long)]
    pub ssd: bool,

    #[arg(long)]
    pub wifi: bool,
}

impl ComputerArgs {
    /// Builder with every field given on the command line
    ///
    /// Storage is applied before the SSD flag so the rewrite sees it.
    pub fn to_builder(&self) -> ComputerBuilder {
        let mut builder = ComputerBuilder::new();

        if let Some(cpu) = &self.cpu {
            builder = builder.with_cpu(cpu);
        }
        if let Some(gpu) = &self.gpu {
            builder = builder.with_gpu(gpu);
        }
        if let Some(ram) = self.ram {
            builder = builder.with_ram(ram);
        }
        if let Some(motherboard) = &self.motherboard {
            builder = builder.with_motherboard(motherboard);
        }
        if let Some(storage) = &self.storage {
            builder = builder.with_storage(storage);
        }

        builder.with_ssd(self.ssd).with_wifi(self.wifi)
    }
}

pub fn build(args: &ComputerArgs) -> Result<Computer> {
    let computer = match args.preset {
        Some(preset) => {
            tracing::info!(%preset, "Building preset computer");
            ComputerDirector::build(preset)?
        }
        None => args.to_builder().build()?,
    };
    Ok(computer)
}

pub fn run(args: &ComputerArgs, json: bool) -> Result<String> {
    let computer = build(args)?;

    if json {
        Ok(serde_json::to_string_pretty(&computer)?)
    } else {
        Ok(computer.to_string())
    }
}
