//! CLI for the nearest-city lookup

use anyhow::Result;
use clap::{Parser, Subcommand};
use geonear::telemetry::timed;
use geonear::{Catalog, CityStore, Coordinate, Nearest, StoreConfig};

#[derive(Parser)]
#[command(name = "geonear")]
#[command(about = "Nearest-city lookup over a JSON catalog or an embedded store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a JSON city catalog into the persistent store
    Ingest {
        /// Path to the city-list JSON document
        file: String,
        /// Store directory
        #[arg(long, default_value = "city.db")]
        db: String,
    },
    /// Find the nearest city in the persistent store
    Locate {
        /// Query latitude in degrees
        lat: String,
        /// Query longitude in degrees
        lon: String,
        /// Store directory
        #[arg(long, default_value = "city.db")]
        db: String,
    },
    /// Find the nearest city by scanning a JSON catalog in memory
    Scan {
        /// Query latitude in degrees
        lat: String,
        /// Query longitude in degrees
        lon: String,
        /// Path to the city-list JSON document
        #[arg(long)]
        file: String,
    },
}

fn print_nearest(nearest: &Nearest) {
    println!("nearest city: {}", nearest.city.name);
    println!("id: {}", nearest.city.id);
    println!("lat: {}", nearest.city.coord.lat);
    println!("lon: {}", nearest.city.coord.lon);
    println!("proxy distance: {:.6}", nearest.sq_dist);
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest { file, db } => {
            let catalog = timed("load catalog", || Catalog::load_json(&file))?;
            let mut store = CityStore::open(&db, StoreConfig::default())?;
            timed("ingest batch", || store.upsert_batch(catalog.records()))?;
            store.checkpoint()?;
            println!("Ingested {} cities into {}", catalog.len(), db);
        }
        Commands::Locate { lat, lon, db } => {
            let query = Coordinate::parse(&lat, &lon)?;
            let store = CityStore::open(&db, StoreConfig::default())?;
            let nearest = timed("locate", || geonear::nearest_in_store(&store, &query))?;
            print_nearest(&nearest);
        }
        Commands::Scan { lat, lon, file } => {
            let query = Coordinate::parse(&lat, &lon)?;
            let catalog = timed("load catalog", || Catalog::load_json(&file))?;
            let nearest = timed("scan", || catalog.nearest(&query))?;
            print_nearest(&nearest);
        }
    }

    Ok(())
}
