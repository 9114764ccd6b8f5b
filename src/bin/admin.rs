//! CLI administration tool for salat-times.
//!
//! Provides commands for managing location presets and service defaults
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Add a location preset
//! cargo run --bin admin -- location add --slug samarinda --name Samarinda \
//!     --latitude -0.502106 --longitude 117.153709 --utc-offset 8
//!
//! # List all locations
//! cargo run --bin admin -- location list
//!
//! # Remove a location
//! cargo run --bin admin -- location remove samarinda
//!
//! # Show current defaults
//! cargo run --bin admin -- settings show
//!
//! # Change the default calculation method
//! cargo run --bin admin -- settings set-method ISNA
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Location Management**: Add, list, and remove location presets
//! - **Settings**: Inspect and change the service-wide defaults
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs for destructive commands
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use salat_times::application::services::{LocationService, SettingsService};
use salat_times::domain::entities::NewLocation;
use salat_times::domain::method::{AsrSchool, CalculationMethod};
use salat_times::infrastructure::persistence::{PgLocationRepository, PgSettingsRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing salat-times.
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
    /// Manage location presets
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Inspect and change service defaults
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Location management subcommands.
#[derive(Subcommand)]
enum LocationAction {
    /// Add a new location preset
    Add {
        /// URL-safe identifier (lowercase letters, digits, hyphens)
        #[arg(long)]
        slug: String,

        /// Human-readable name
        #[arg(long)]
        name: String,

        /// Latitude in degrees, south negative
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude in degrees, west negative
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// Flat UTC offset in hours
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: f64,

        /// Calculation method override (e.g. MWL, ISNA)
        #[arg(long)]
        method: Option<String>,

        /// Asr school override (Shafii or Hanafi)
        #[arg(long)]
        asr_school: Option<String>,
    },

    /// List all location presets
    List,

    /// Remove a location preset
    Remove {
        /// Slug of the location to remove
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
enum SettingsAction {
    /// Show the current service defaults
    Show,

    /// Set the default calculation method
    SetMethod {
        /// Method name (e.g. MWL, ISNA, Egypt)
        name: String,
    },

    /// Set the default Asr school
    SetAsr {
        /// School name (Shafii or Hanafi)
        name: String,
    },

    /// Set or clear the default location
    SetLocation {
        /// Slug of the location, or omit to clear
        slug: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Location { action } => handle_location_action(action, &pool).await?,
        Commands::Settings { action } => handle_settings_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn location_service(pool: &PgPool) -> LocationService {
    let locations = Arc::new(PgLocationRepository::new(Arc::new(pool.clone())));
    LocationService::new(locations)
}

fn settings_service(pool: &PgPool) -> SettingsService {
    let pool = Arc::new(pool.clone());
    let locations = Arc::new(PgLocationRepository::new(pool.clone()));
    let settings = Arc::new(PgSettingsRepository::new(pool));
    SettingsService::new(settings, locations)
}

/// Dispatches location management commands.
async fn handle_location_action(action: LocationAction, pool: &PgPool) -> Result<()> {
    let service = location_service(pool);

    match action {
        LocationAction::Add {
            slug,
            name,
            latitude,
            longitude,
            utc_offset,
            method,
            asr_school,
        } => {
            let method = match method.as_deref() {
                None => None,
                Some(name) => Some(
                    CalculationMethod::parse(name)
                        .with_context(|| format!("Unknown calculation method '{}'", name))?,
                ),
            };
            let asr_school = match asr_school.as_deref() {
                None => None,
                Some(name) => Some(
                    AsrSchool::parse(name)
                        .with_context(|| format!("Unknown Asr school '{}'", name))?,
                ),
            };

            let location = service
                .create(NewLocation {
                    slug,
                    name,
                    latitude,
                    longitude,
                    utc_offset,
                    method,
                    asr_school,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create location: {}", e))?;

            println!();
            println!("{}", "Location created:".green().bold());
            println!("  Slug:       {}", location.slug.cyan());
            println!("  Name:       {}", location.name);
            println!(
                "  Position:   {:.6}, {:.6} (UTC{:+})",
                location.latitude, location.longitude, location.utc_offset
            );
            if let Some(method) = location.method {
                println!("  Method:     {}", method.name().bright_yellow());
            }
            if let Some(school) = location.asr_school {
                println!("  Asr school: {}", school.name().bright_yellow());
            }
            println!();
        }

        LocationAction::List => {
            let locations = service
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list locations: {}", e))?;

            println!("{}", "Locations".bright_blue().bold());
            println!();

            if locations.is_empty() {
                println!("{}", "  No locations found".yellow());
                println!();
                println!(
                    "  Create one with: {} admin location add",
                    "cargo run --bin".bright_cyan()
                );
                return Ok(());
            }

            println!(
                "  {:<16} {:<24} {:>10} {:>11} {:>7}  {:<8} {:<7}",
                "Slug".bright_white().bold(),
                "Name".bright_white().bold(),
                "Latitude".bright_white().bold(),
                "Longitude".bright_white().bold(),
                "UTC".bright_white().bold(),
                "Method".bright_white().bold(),
                "Asr".bright_white().bold()
            );
            println!("  {}", "─".repeat(92).bright_black());

            for location in &locations {
                println!(
                    "  {:<16} {:<24} {:>10.4} {:>11.4} {:>+7.1}  {:<8} {:<7}",
                    location.slug.cyan(),
                    location.name,
                    location.latitude,
                    location.longitude,
                    location.utc_offset,
                    location.method.map(|m| m.name()).unwrap_or("-"),
                    location.asr_school.map(|s| s.name()).unwrap_or("-")
                );
            }

            println!();
            println!(
                "  Total: {}",
                locations.len().to_string().bright_white().bold()
            );
            println!();
        }

        LocationAction::Remove { slug, yes } => {
            let location = service
                .get(&slug)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("  Slug: {}", location.slug.cyan());
            println!("  Name: {}", location.name);
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Remove this location?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            service
                .delete(&slug)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to remove location: {}", e))?;

            println!();
            println!("{}", "Location removed".green().bold());
            println!();
        }
    }

    Ok(())
}

/// Dispatches settings commands.
async fn handle_settings_action(action: SettingsAction, pool: &PgPool) -> Result<()> {
    let service = settings_service(pool);

    match action {
        SettingsAction::Show => {
            let settings = service
                .overview()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load settings: {}", e))?;

            println!("{}", "Service defaults".bright_blue().bold());
            println!();
            println!(
                "  Method:     {}",
                settings.default_method.name().bright_yellow()
            );
            println!(
                "  Asr school: {}",
                settings.default_asr_school.name().bright_yellow()
            );
            println!(
                "  Location:   {}",
                settings
                    .default_location
                    .as_deref()
                    .unwrap_or("-")
                    .bright_yellow()
            );
            println!();
        }

        SettingsAction::SetMethod { name } => {
            let method = service
                .set_default_method(&name)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!(
                "{} {}",
                "Default method set to".green(),
                method.name().bright_yellow().bold()
            );
        }

        SettingsAction::SetAsr { name } => {
            let school = service
                .set_default_asr_school(&name)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!(
                "{} {}",
                "Default Asr school set to".green(),
                school.name().bright_yellow().bold()
            );
        }

        SettingsAction::SetLocation { slug } => {
            service
                .set_default_location(slug.as_deref())
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            match slug {
                Some(slug) => println!(
                    "{} {}",
                    "Default location set to".green(),
                    slug.bright_yellow().bold()
                ),
                None => println!("{}", "Default location cleared".green()),
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
