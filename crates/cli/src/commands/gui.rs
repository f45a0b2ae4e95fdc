use anyhow::Result;
use clap::Args;
use kiln_core::KilnConfig;
use kiln_family::{detect_platform, resolve_family, Application};

#[derive(Args, Debug, Default)]
pub struct GuiArgs {
    /// Raw OS descriptor, e.g. "Mac OS X". Defaults to KILN_PLATFORM, then the host OS.
    #[arg(long)]
    pub os: Option<String>,
}

/// The OS descriptor to detect from, by precedence
pub fn raw_descriptor(args: &GuiArgs, config: &KilnConfig) -> String {
    args.os
        .clone()
        .or_else(|| config.platform_override.clone())
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

pub fn run(args: &GuiArgs, config: &KilnConfig, json: bool) -> Result<String> {
    let raw = raw_descriptor(args, config);
    let key = detect_platform(&raw);
    tracing::info!(raw = %raw, key, "Resolving widget family");

    let factory = resolve_family(key)?;
    let app = Application::new(factory.as_ref());

    if json {
        let value = serde_json::json!({
            "platform": app.platform(),
            "render": app.render(),
            "click": app.on_click(),
            "toggle": app.on_toggle(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut lines = app.render();
    lines.push(app.on_click());
    lines.push(app.on_toggle());
    Ok(lines.join("\n"))
}
