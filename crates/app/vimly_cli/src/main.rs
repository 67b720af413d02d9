// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use clap::Parser;
use cli::{Cli, Commands};
use host::{ArgsForm, SleepScheduler, StdoutBridge};
use log::info;
use vimly_core::lead::iso_millis;
use vimly_core::{LeadCaptureHandler, LeadConfig, payload};

mod cli;
mod host;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Submit {
            company,
            task,
            contact,
            brand,
        } => {
            let config = load_config(brand)?;
            submit(config, ArgsForm::new(company, task, contact))?;
        }
        Commands::Inspect { path, brand } => {
            let config = load_config(brand)?;
            inspect(path.as_deref(), &config.brand)?;
        }
    }

    Ok(())
}

fn load_config(brand: Option<String>) -> Result<LeadConfig> {
    let mut config = LeadConfig::from_env()?;
    if let Some(brand) = brand {
        config.brand = brand;
        config.validate()?;
    }
    Ok(config)
}

fn submit(config: LeadConfig, form: ArgsForm) -> Result<()> {
    let scheduler = Rc::new(SleepScheduler::default());
    let handler = LeadCaptureHandler::new(
        config,
        Some(Rc::new(StdoutBridge)),
        Rc::new(form),
        scheduler.clone(),
    );

    handler.initialize();
    let outcome = handler.submit()?;
    info!(
        "Lead captured at {}",
        iso_millis::format(&outcome.record.ts)
    );

    scheduler.run_pending();
    Ok(())
}

fn inspect(path: Option<&Path>, brand: &str) -> Result<()> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let record = payload::inspect(raw.trim(), brand)?;
    println!("type:    {}", record.kind);
    println!("company: {}", record.company);
    println!("task:    {}", record.task);
    println!("contact: {}", record.contact);
    println!("ts:      {}", iso_millis::format(&record.ts));
    println!("brand:   {}", record.brand);
    Ok(())
}
