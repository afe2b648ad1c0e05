//! CLI administration tool for storefront.
//!
//! Bootstraps users, roles and tokens directly against the database,
//! without going through the HTTP API. Useful for creating the first
//! account before any bearer token exists.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing values)
//! cargo run --bin admin -- user create --name "Jane" --email jane@example.com
//!
//! # Create a role and grant it
//! cargo run --bin admin -- role create admin
//! cargo run --bin admin -- role assign jane@example.com admin
//!
//! # Issue a bearer token for a user
//! cargo run --bin admin -- token issue jane@example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*`), `JWT_SECRET`,
//! `TOKEN_EXPIRY`, `BCRYPT_COST`.

use storefront::config::{self, Config, mask_connection_string};
use storefront::domain::entities::User;
use storefront::infrastructure::cache::NullCache;
use storefront::server::{build_state, connect_database};
use storefront::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing storefront.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage roles
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Issue bearer tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum RoleAction {
    /// Create a new role
    Create {
        /// Lowercase role name, e.g. "admin"
        name: String,
    },

    /// Grant a role to a user
    Assign {
        /// User email
        email: String,

        /// Role name
        role: String,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Issue an access token for a user
    Issue {
        /// User email
        email: String,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply pending migrations
    Check {
        /// Skip confirmation prompt before migrating
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    let pool = connect_database(&config).await?;

    let state = build_state(pool.clone(), Arc::new(NullCache::new()), &config);

    match cli.command {
        Commands::User { action } => handle_user_action(action, &state).await?,
        Commands::Role { action } => handle_role_action(action, &state).await?,
        Commands::Token { action } => handle_token_action(action, &state).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

async fn find_user_by_email(state: &AppState, email: &str) -> Result<User> {
    state
        .user_service
        .get_user_by_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("{e}: {email}"))
}

/// Creates a user, prompting for anything not given on the command line.
///
/// The password is always read interactively with confirmation.
async fn handle_user_action(action: UserAction, state: &AppState) -> Result<()> {
    let UserAction::Create { name, email } = action;

    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters");
    }

    let user = state
        .user_service
        .create_user(name, email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {e}"))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!("  Name:  {}", user.name.cyan());
    println!("  Email: {}", user.email.cyan());
    println!();

    Ok(())
}

async fn handle_role_action(action: RoleAction, state: &AppState) -> Result<()> {
    match action {
        RoleAction::Create { name } => {
            let role = state
                .role_service
                .create_role(name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create role: {e}"))?;

            println!(
                "{} {} (id {})",
                "✅ Role created:".green().bold(),
                role.name.cyan(),
                role.id
            );
        }
        RoleAction::Assign { email, role } => {
            let user = find_user_by_email(state, &email).await?;

            if user.has_role(&role) {
                println!(
                    "{}",
                    format!("⚠️  {email} already has role '{role}'").yellow()
                );
                return Ok(());
            }

            let user = state
                .user_service
                .assign_role(user.id, &role)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to assign role: {e}"))?;

            let roles: Vec<&str> = user.roles.iter().map(|r| r.name.as_str()).collect();
            println!("{}", "✅ Role assigned".green().bold());
            println!("  User:  {}", user.email.cyan());
            println!("  Roles: {}", roles.join(", ").bright_white());
        }
    }

    Ok(())
}

/// Issues an access token for an existing user.
///
/// The token is printed once; it is not stored anywhere.
async fn handle_token_action(action: TokenAction, state: &AppState) -> Result<()> {
    let TokenAction::Issue { email } = action;

    println!("{}", "🔑 Issue Access Token".bright_blue().bold());
    println!();

    let user = find_user_by_email(state, &email).await?;
    let issued = state
        .auth_service
        .issue_token(&user)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {e}"))?;

    println!("  User:    {}", user.email.cyan());
    println!("  Expires: in {}s", issued.expires_in);
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        issued.access_token.bright_yellow()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    let DbAction::Check { yes } = action;

    println!("{}", "🔍 Checking database connection...".bright_blue());

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .context("Database query failed")?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!(
        "  URL:     {}",
        mask_connection_string(&config.database_url).bright_black()
    );
    println!("  Server:  {}", version.bright_black());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Apply pending migrations?")
            .default(true)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    println!("{}", "✅ Migrations up to date".green().bold());

    Ok(())
}
