use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use outreach::brief::Brief;
use outreach::cli::{self, Cli};
use outreach::config::AppConfig;
use outreach::generator::OutreachGenerator;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Parse the specified (or default) .env file
    let dotenv_path = env::var("OUTREACH_DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    let dotenv_result = dotenvy::from_path(&dotenv_path);

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match dotenv_result {
        Ok(()) => log::info!("Loaded env from {}", dotenv_path),
        Err(err) => log::debug!("No .env loaded from {}: {}", dotenv_path, err),
    }

    let config = AppConfig::from_env().context("Reading configuration")?;
    let brief = Brief::from_path(&args.brief).context("Reading brief")?;
    let request = brief.to_request(args.tone);

    let mut generator_config = config.generator_config();
    if let Some(shape) = args.shape {
        generator_config.shape = shape;
    }
    let generator = OutreachGenerator::new(generator_config)?;
    let result = generator.generate_outreach(&request).await;

    println!("{}", cli::render(&result, args.json)?);
    Ok(())
}
