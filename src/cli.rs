use std::path::PathBuf;

use clap::Parser;

use crate::generator::{OutreachResult, Shape, Tone};

#[derive(Parser, Debug)]
#[command(
    name = "outreach",
    version,
    about = "Generate a personalized outreach email from a company, persona and product brief"
)]
pub struct Cli {
    /// TOML brief with [company], [persona] and [product] tables
    #[arg(short, long)]
    pub brief: PathBuf,

    /// Tone of the email; overrides the tone set in the brief
    #[arg(short, long, value_enum)]
    pub tone: Option<Tone>,

    /// Reply layout requested from the model; overrides OUTREACH_SHAPE
    #[arg(long, value_enum)]
    pub shape: Option<Shape>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn render(result: &OutreachResult, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    Ok(render_text(result))
}

pub fn render_text(result: &OutreachResult) -> String {
    let mut output = String::new();
    output.push_str("--- Generated Outreach Email ---\n\n");
    output.push_str(result.email_text.trim());
    output.push('\n');

    if !result.reasons.is_empty() {
        output.push_str("\n--- Why This Match Works ---\n\n");
        for reason in &result.reasons {
            output.push_str(&format!("- {}\n", reason));
        }
    }

    output
}
