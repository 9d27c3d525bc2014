//! PetCare Companion CLI - preference and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Inspect and edit stored preferences
//! petcare-cli prefs get theme
//! petcare-cli prefs set theme dark
//! petcare-cli prefs clear tipClosed
//!
//! # List the shop catalog
//! petcare-cli catalog --category food
//!
//! # Send a newsletter signup through the configured backend
//! petcare-cli subscribe someone@example.com
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "petcare-cli")]
#[command(author, version, about = "PetCare Companion CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or edit stored preferences
    Prefs {
        /// Preference file (defaults to `PETCARE_PREFERENCES_PATH`)
        #[arg(long, env = "PETCARE_PREFERENCES_PATH")]
        path: Option<PathBuf>,

        #[command(subcommand)]
        action: PrefsAction,
    },
    /// List products in the shop catalog
    Catalog {
        /// Only list one category (`food`, `toys`, `grooming`, `health`)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Email address to subscribe
        email: String,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print a preference (`theme`, `tipClosed`, `userPetPhoto`)
    Get { key: String },
    /// Store a preference
    Set { key: String, value: String },
    /// Forget a preference
    Clear { key: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Prefs { path, action } => {
            let prefs = commands::prefs::open(path)?;
            match action {
                PrefsAction::Get { key } => commands::prefs::get(&prefs, &key)?,
                PrefsAction::Set { key, value } => commands::prefs::set(&prefs, &key, &value)?,
                PrefsAction::Clear { key } => commands::prefs::clear(&prefs, &key)?,
            }
        }
        Commands::Catalog { category } => commands::catalog::list(category.as_deref())?,
        Commands::Subscribe { email } => commands::subscribe::run(&email).await?,
    }
    Ok(())
}
