use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vimly", version, about = "Preview and inspect Vimly lead payloads")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the CLI version.
    Version,

    /// Run the lead form handler and print the payload it would send.
    Submit {
        /// Company name.
        #[arg(long, default_value = "")]
        company: String,

        /// What the lead wants built.
        #[arg(long, default_value = "")]
        task: String,

        /// Phone, @username, or e-mail.
        #[arg(long, default_value = "")]
        contact: String,

        /// Override the configured brand.
        #[arg(long)]
        brand: Option<String>,
    },

    /// Check a captured payload against the lead wire format.
    Inspect {
        /// Payload file; reads stdin when omitted.
        path: Option<PathBuf>,

        /// Expected brand; defaults to the configured brand.
        #[arg(long)]
        brand: Option<String>,
    },
}
