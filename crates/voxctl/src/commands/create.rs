//! Create command - provisions a new conversational agent.

use anyhow::{Context as _, Result};
use clap::Args;
use console::{style, Style};
use serde::Serialize;
use voxctl_client::{resolve_voice, AgentConfig, AgentId};

use super::Context;

/// Characters of the prompt shown before creating.
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Arguments for the create command.
#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Voice ID or preset name (rachel, adam, bella, antoni)
    pub voice: Option<String>,
}

/// Creation result for JSON output.
#[derive(Debug, Serialize)]
struct CreateOutput<'a> {
    agent_id: &'a AgentId,
    name: &'a str,
    voice_id: &'a str,
}

/// Agent config for this invocation: configured defaults plus the voice argument.
pub fn agent_config(args: &CreateArgs, ctx: &Context) -> AgentConfig {
    let mut config = ctx.config.agent_config();
    if let Some(voice) = &args.voice {
        config.voice_id = resolve_voice(voice);
    }
    config
}

/// Run the create command.
pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let config = agent_config(&args, ctx);
    let client = ctx.client()?;
    if !client.has_credential() {
        return Err(voxctl_client::Error::MissingCredential).context("failed to create agent");
    }

    if !ctx.json_output {
        print_plan(&config, ctx.verbose);
    }

    let agent_id = client
        .create_agent(&config)
        .await
        .context("failed to create agent")?;
    tracing::debug!(%agent_id, "agent created");

    if ctx.json_output {
        let output = CreateOutput {
            agent_id: &agent_id,
            name: &config.name,
            voice_id: &config.voice_id,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_success(&agent_id);
    }

    Ok(())
}

fn print_plan(config: &AgentConfig, verbose: bool) {
    let dim = Style::new().dim();

    println!("{} {}", dim.apply_to("Creating agent:"), config.name);
    println!("{} {}", dim.apply_to("Voice ID:"), config.voice_id);
    if verbose {
        println!("{}", dim.apply_to("Prompt:"));
        println!("{}", config.prompt);
    } else {
        println!("{} {}", dim.apply_to("Prompt:"), preview(&config.prompt));
    }
    println!();
}

fn print_success(agent_id: &AgentId) {
    let dim = Style::new().dim();
    let rule = "═".repeat(55);

    println!("{}", style("Agent created successfully!").green().bold());
    println!();
    println!("{}", rule);
    println!("  Agent ID: {}", style(agent_id).bold());
    println!("{}", rule);
    println!();
    println!("{}", style("Next steps:").bold());
    println!();
    println!("1. Add to your .env file:");
    println!("   ELEVENLABS_AGENT_ID={}", agent_id);
    println!();
    println!("2. Point your telephony webhook at the agent's incoming-call endpoint.");
    println!();
    println!(
        "{}",
        dim.apply_to("Manage the agent at https://elevenlabs.io/app/conversational-ai")
    );
}

/// First characters of `prompt`, flattened onto one line.
fn preview(prompt: &str) -> String {
    let flat = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PROMPT_PREVIEW_CHARS {
        flat
    } else {
        let head: String = flat.chars().take(PROMPT_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
