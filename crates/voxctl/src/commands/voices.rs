//! List-voices command.

use anyhow::{Context as _, Result};
use clap::Args;
use console::{style, Style};
use voxctl_client::VoiceListing;

use super::Context;

/// Arguments for the list-voices command.
#[derive(Args, Debug)]
pub struct ListVoicesArgs {}

/// Run the list-voices command.
pub async fn run(_args: ListVoicesArgs, ctx: &Context) -> Result<()> {
    let listing = ctx
        .client()?
        .list_voices()
        .await
        .context("failed to fetch voices")?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print_table(&listing);
    }

    Ok(())
}

fn print_table(listing: &VoiceListing) {
    let dim = Style::new().dim();

    println!();
    println!("{}", style("Available Voices:").bold());
    println!("{}", "═".repeat(55));

    if listing.is_empty() {
        println!("  {}", dim.apply_to("No voices available."));
        return;
    }

    for voice in listing {
        println!("  {:<20} ID: {}", voice.name, voice.voice_id);
        if !voice.labels.is_empty() {
            println!("  {:20} {}", "", dim.apply_to(format!("({})", voice.label_summary())));
        }
        println!();
    }
}
