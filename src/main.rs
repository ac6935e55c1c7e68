use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zoo::db::{Database, DEFAULT_DATABASE_FILE};
use zoo::{guide, populate};

#[derive(Parser)]
#[command(name = "zoo")]
#[command(about = "Operational records for a zoo: species, animals, staff, food and feedings")]
struct Cli {
    /// Path of the SQLite database file
    #[arg(long, global = true, env = "ZOO_DATABASE", default_value = DEFAULT_DATABASE_FILE)]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema and seed the lookup tables, replacing any existing database
    Init {
        /// Keep the existing database and only add what is missing
        #[arg(long)]
        keep: bool,
    },
    /// Load the demonstration dataset
    Populate,
    /// Print an overview of the schema and API
    Guide,
    /// Print row counts for every table
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Print every record of one entity
    List {
        #[arg(value_enum)]
        entity: Entity,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Entity {
    Species,
    Animals,
    FoodTypes,
    FoodInventory,
    Roles,
    Staff,
    Feedings,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "zoo=info,zoo_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { keep } => {
            Database::initialize(&cli.db, !keep)
                .with_context(|| format!("failed to initialize {}", cli.db.display()))?;
            println!("Database initialized successfully!");
        }
        Commands::Populate => {
            if let Err(e) = populate::populate(&cli.db) {
                eprintln!("An error occurred: {e:#}");
                std::process::exit(1);
            }
        }
        Commands::Guide => {
            println!("{}", guide::guide());
        }
        Commands::Status { json } => {
            let db = Database::open(&cli.db)?;
            let counts = db.table_counts()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!("Database: {}", db.path().display());
                println!("  Species        {}", counts.species);
                println!("  Animals        {}", counts.animals);
                println!("  FoodTypes      {}", counts.food_types);
                println!("  FoodInventory  {}", counts.food_inventory);
                println!("  Roles          {}", counts.roles);
                println!("  Staff          {}", counts.staff);
                println!("  Feeding        {}", counts.feeding);
                println!("  AnimalCare     {}", counts.animal_care);
            }
        }
        Commands::List { entity, json } => {
            let db = Database::open(&cli.db)?;
            list(&db, entity, json)?;
        }
    }

    Ok(())
}

fn list(db: &Database, entity: Entity, json: bool) -> anyhow::Result<()> {
    match entity {
        Entity::Species => print_records(db.get_all_species()?, json, |s| {
            format!("{:>4}  {}  {}  {}", s.id, s.name, s.habitat, s.diet)
        }),
        Entity::Animals => print_records(db.get_all_animals()?, json, |a| {
            format!(
                "{:>4}  {}  {}  {}  {}  {}",
                a.id,
                a.name,
                a.species_name,
                a.gender.map(|g| g.as_str()).unwrap_or("-"),
                a.birthdate.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                a.health_status
            )
        }),
        Entity::FoodTypes => print_records(db.get_all_food_types()?, json, |f| {
            format!(
                "{:>4}  {}  {}  {}",
                f.id,
                f.name,
                f.unit,
                f.storage_requirements.as_deref().unwrap_or("-")
            )
        }),
        Entity::FoodInventory => print_records(db.get_all_food_inventory()?, json, |i| {
            format!(
                "{:>4}  {}  {}  expires {}  updated {}",
                i.id,
                i.food_type_name,
                i.quantity,
                i.expiration_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                i.last_updated
            )
        }),
        Entity::Roles => print_records(db.get_all_roles()?, json, |r| {
            format!("{:>4}  {}  {}", r.id, r.title, r.department)
        }),
        Entity::Staff => print_records(db.get_all_staff()?, json, |s| {
            format!(
                "{:>4}  {}  {}  {}  hired {}  {}",
                s.id,
                s.full_name(),
                s.role_title,
                s.country,
                s.hire_date,
                s.salary
            )
        }),
        Entity::Feedings => print_records(db.get_all_feedings()?, json, |f| {
            format!(
                "{:>4}  {}  {} {}  by {}  at {}",
                f.id, f.animal_name, f.quantity, f.food_type_name, f.staff_name, f.feeding_date
            )
        }),
    }
}

fn print_records<T: Serialize>(
    records: Vec<T>,
    json: bool,
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("(no records)");
    } else {
        for record in &records {
            println!("{}", line(record));
        }
    }
    Ok(())
}
