//! CLI for the WIUP device upload emulator.

mod prompt;
pub mod report;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wiup_core::config;
use wiup_core::upload::upload_file_async;

/// Emulate a local Wi-Fi device uploading one image to the server.
#[derive(Debug, Parser)]
#[command(name = "wiup")]
#[command(about = "Emulate a Wi-Fi device uploading an image to the server", long_about = None)]
pub struct Cli {
    /// Local image path; asked for interactively when omitted.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Server base URL (default from config, initially http://106.15.53.24:3000).
    #[arg(long, value_name = "URL")]
    pub server_base_url: Option<String>,

    /// Upload endpoint path (default /upload).
    #[arg(long, value_name = "PATH")]
    pub upload_path: Option<String>,

    /// Upload token, matching the server's UPLOAD_TOKEN.
    #[arg(long)]
    pub token: Option<String>,

    /// Image description; asked for interactively when omitted.
    #[arg(long)]
    pub description: Option<String>,

    /// HTTP timeout in seconds (default 20).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Overlay flags that were given onto the loaded config.
    pub fn apply(&self, cfg: &mut config::WiupConfig) {
        if let Some(url) = &self.server_base_url {
            cfg.server_base_url = url.clone();
        }
        if let Some(path) = &self.upload_path {
            cfg.upload_path = path.clone();
        }
        if let Some(token) = &self.token {
            cfg.token = Some(token.clone());
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
    }
}

/// Parse flags, run one upload and return the process exit code.
pub async fn run_from_args() -> Result<i32> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_init()?;
    cli.apply(&mut cfg);
    tracing::debug!("effective config: {:?}", cfg);

    let path = match cli.file.clone().or_else(prompt::choose_file) {
        Some(path) => path,
        None => {
            println!("No image selected. Without an interactive terminal, pass --file <PATH>.");
            return Ok(report::EXIT_NO_FILE);
        }
    };

    println!("Uploading: {}", path.display());
    println!("Request URL: {}", cfg.target().url());

    let description = match cli.description.filter(|d| !d.is_empty()) {
        Some(d) => d,
        None => prompt::ask_description(),
    };

    let outcome = upload_file_async(&cfg.target(), &path, &description, cfg.timeout()).await;
    Ok(report::print_outcome(&outcome, cfg.timeout()))
}
