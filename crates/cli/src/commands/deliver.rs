use anyhow::Result;
use clap::Args;
use kiln_logistics::{create_logistics, plan_delivery, resolve_delivery_key, DEFAULT_DELIVERY};

#[derive(Args, Debug)]
pub struct DeliverArgs {
    /// Delivery type: road, sea or air. Unknown types use road.
    #[arg(default_value = DEFAULT_DELIVERY)]
    pub kind: String,
}

pub fn run(args: &DeliverArgs, json: bool) -> Result<String> {
    let resolved = resolve_delivery_key(&args.kind);
    if resolved != args.kind {
        tracing::info!(requested = %args.kind, resolved, "Unknown delivery type");
    }

    let plan = plan_delivery(create_logistics(&args.kind).as_ref());

    if json {
        Ok(serde_json::to_string_pretty(&plan)?)
    } else {
        Ok(plan.steps.join("\n"))
    }
}
