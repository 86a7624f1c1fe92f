use anyhow::Context;
use clap::{Parser, Subcommand};
use clickcrafters_cli::admin::{list_admins, promote_to_admin};
use clickcrafters_cli::seeder::{self, SeedConfig};
use clickcrafters_config::DatabaseConfig;
use clickcrafters_db::{PgPool, init_db_pool, run_migrations};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "clickcrafters-cli")]
#[command(about = "ClickCrafters CLI - Administrative tools for ClickCrafters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account, or promote an existing user to admin
    CreateAdmin {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Display name (used only when the user does not exist yet)
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// List admin accounts
    ListAdmins,
    /// Seed the database with fake students, instructors, courses and submissions
    Seed {
        /// Number of students
        #[arg(short = 's', long, default_value = "50")]
        students: usize,

        /// Number of instructors
        #[arg(short = 'i', long, default_value = "6")]
        instructors: usize,

        /// Courses per instructor
        #[arg(short = 'c', long, default_value = "2")]
        courses: usize,

        /// Pending submissions per instructor
        #[arg(short = 'p', long, default_value = "1")]
        pending: usize,
    },
    /// Delete all data except admin accounts
    ClearSeed {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print the row count of every collection
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let db_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&db_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    match cli.command {
        Commands::CreateAdmin { email, name } => handle_create_admin(&pool, email, name).await,
        Commands::ListAdmins => handle_list_admins(&pool).await,
        Commands::Seed {
            students,
            instructors,
            courses,
            pending,
        } => {
            let config = SeedConfig {
                students,
                instructors,
                courses_per_instructor: courses,
                pending_per_instructor: pending,
            };
            handle_seed(&pool, config).await
        }
        Commands::ClearSeed { yes } => handle_clear_seed(&pool, yes).await,
        Commands::Stats => handle_stats(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    email: Option<String>,
    name: Option<String>,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read name")?,
    };

    let id = promote_to_admin(pool, &email, &name)
        .await
        .context("Error creating admin")?;

    println!("\nAdmin ready");
    println!("   Email: {email}");
    println!("   Id: {id}");
    Ok(())
}

async fn handle_list_admins(pool: &PgPool) -> anyhow::Result<()> {
    let admins = list_admins(pool).await.context("Error listing admins")?;

    if admins.is_empty() {
        println!("No admins found. Run `create-admin` first.");
    }
    for email in admins {
        println!("{email}");
    }
    Ok(())
}

async fn handle_seed(pool: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let report = seeder::seed_all(pool, config)
        .await
        .context("Error seeding database")?;

    println!(
        "\nCreated {} students, {} instructors, {} courses, {} pending submissions",
        report.students, report.instructors, report.courses, report.pending_classes
    );
    Ok(())
}

async fn handle_clear_seed(pool: &PgPool, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all courses, payments and non-admin users?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    let deleted = seeder::clear_seed(pool)
        .await
        .context("Error clearing seeded data")?;

    println!("\nDeleted {deleted} rows");
    Ok(())
}

async fn handle_stats(pool: &PgPool) -> anyhow::Result<()> {
    let counts = seeder::collection_counts(pool)
        .await
        .context("Error counting rows")?;

    for (collection, count) in counts {
        println!("{collection:<18} {count}");
    }
    Ok(())
}
