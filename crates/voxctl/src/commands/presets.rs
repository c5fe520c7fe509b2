//! Presets command - shows the bundled voice shortcuts.

use anyhow::Result;
use console::{style, Style};
use serde_json::json;
use voxctl_client::VOICE_PRESETS;

use super::Context;

/// Run the presets command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.json_output {
        let output: Vec<_> = VOICE_PRESETS
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "voice_id": p.voice_id,
                    "description": p.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    println!("{}", style("Voice presets:").bold());
    println!();
    println!("  {:<10} {:<24} DESCRIPTION", "NAME", "VOICE ID");
    for preset in VOICE_PRESETS {
        println!(
            "  {:<10} {:<24} {}",
            preset.name,
            preset.voice_id,
            dim.apply_to(preset.description)
        );
    }
    println!();
    println!(
        "{}",
        dim.apply_to("Use a preset name or any voice ID with `voxctl create <voice>`.")
    );

    Ok(())
}
