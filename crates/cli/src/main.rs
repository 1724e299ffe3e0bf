//! Marquee CLI - Database migrations and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run admin database migrations
//! marquee migrate
//!
//! # Seed the database with a demo catalog
//! marquee seed
//!
//! # Rename a store through the admin API
//! marquee store update --id 1 --name "Neon Outfitters"
//!
//! # Delete a store (prompts for confirmation)
//! marquee store delete --id 1
//!
//! # Manage billboards
//! marquee billboard create --store 1 --label "Summer sale" \
//!     --image-url https://cdn.example.com/summer.png
//! marquee billboard update --store 1 --id 4 --label "Winter sale" \
//!     --image-url https://cdn.example.com/winter.png
//! marquee billboard delete --store 1 --id 4 --yes
//! ```
//!
//! The catalog commands talk to a running admin service over its JSON API;
//! set `MARQUEE_BASE_URL` when it is not on `http://localhost:4000`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "Marquee CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run admin database migrations
    Migrate,
    /// Seed the database with a demo catalog
    Seed,
    /// Manage stores through the admin API
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Manage billboards through the admin API
    Billboard {
        #[command(subcommand)]
        action: BillboardAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Rename a store
    Update {
        /// Store ID
        #[arg(long)]
        id: i32,

        /// New store name
        #[arg(long)]
        name: String,
    },
    /// Delete a store
    Delete {
        /// Store ID
        #[arg(long)]
        id: i32,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum BillboardAction {
    /// Create a billboard in a store
    Create {
        /// Store ID
        #[arg(long)]
        store: i32,

        /// Billboard label
        #[arg(long)]
        label: String,

        /// Billboard image URL
        #[arg(long)]
        image_url: String,
    },
    /// Update a billboard's label and image
    Update {
        /// Store ID
        #[arg(long)]
        store: i32,

        /// Billboard ID
        #[arg(long)]
        id: i32,

        /// Billboard label
        #[arg(long)]
        label: String,

        /// Billboard image URL
        #[arg(long)]
        image_url: String,
    },
    /// Delete a billboard
    Delete {
        /// Store ID
        #[arg(long)]
        store: i32,

        /// Billboard ID
        #[arg(long)]
        id: i32,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::admin().await?,
        Commands::Seed => commands::seed::demo_catalog().await?,
        Commands::Store { action } => match action {
            StoreAction::Update { id, name } => {
                commands::catalog::update_store(id, name).await?;
            }
            StoreAction::Delete { id, yes } => {
                commands::catalog::delete_store(id, yes).await?;
            }
        },
        Commands::Billboard { action } => match action {
            BillboardAction::Create {
                store,
                label,
                image_url,
            } => {
                commands::catalog::create_billboard(store, label, image_url).await?;
            }
            BillboardAction::Update {
                store,
                id,
                label,
                image_url,
            } => {
                commands::catalog::update_billboard(store, id, label, image_url).await?;
            }
            BillboardAction::Delete { store, id, yes } => {
                commands::catalog::delete_billboard(store, id, yes).await?;
            }
        },
    }
    Ok(())
}
