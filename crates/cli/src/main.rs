//! Marigold CLI - seed data and drive the store domain from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Seed demo users, the starter catalog, and sample orders
//! marigold seed
//!
//! # Sign in and inspect the session
//! marigold login -e super@example.com -p password123
//! marigold whoami
//! marigold logout
//!
//! # Manage roles (requires a signed-in superuser)
//! marigold admin set-role -e user@example.com -r admin
//!
//! # Browse the catalog (remote first, local cache fallback)
//! marigold catalog list
//! marigold catalog search headphones
//!
//! # Inspect orders
//! marigold orders list --mine
//! ```
//!
//! Set `MARIGOLD_DATA_PATH` to persist state across invocations; without it
//! every invocation starts from an empty in-memory store.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "marigold")]
#[command(author, version, about = "Marigold store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed demo users, the starter catalog, and sample orders
    Seed,
    /// Sign in as a registered user
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the current session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Manage user accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Change a user's role (requires a signed-in superuser)
    SetRole {
        /// Target user's email address
        #[arg(short, long)]
        email: String,

        /// New role (`user`, `admin`, `superuser`)
        #[arg(short, long)]
        role: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Search products by name, description, or category
    Search {
        /// Search term
        term: String,
    },
    /// Store the bearer token used for catalog writes
    SetToken {
        /// Token value
        token: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders
    List {
        /// Only the signed-in user's orders
        #[arg(long)]
        mine: bool,
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
        Commands::Seed => commands::seed::all()?,
        Commands::Login { email, password } => commands::session::login(&email, &password)?,
        Commands::Logout => commands::session::logout()?,
        Commands::Whoami => commands::session::whoami()?,
        Commands::Admin { action } => match action {
            AdminAction::SetRole { email, role } => commands::admin::set_role(&email, &role)?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list().await?,
            CatalogAction::Search { term } => commands::catalog::search(&term).await?,
            CatalogAction::SetToken { token } => commands::catalog::set_token(&token)?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { mine } => commands::orders::list(mine)?,
        },
    }
    Ok(())
}
