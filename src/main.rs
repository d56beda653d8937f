// src/main.rs
mod utils;
mod pubchem;
mod extractors;
mod storage;

use clap::Parser;
use extractors::facts;
use pubchem::client;
use storage::{BasicInfoReport, HazardReport, StorageManager};
use utils::error::PubChemError;
use utils::AppError;

/// Command Line Interface for the chemical-safety fact extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chemical names to look up (e.g. "ethanol" "benzene")
    #[arg(required = true)]
    names: Vec<String>,

    /// Output directory for extracted fact sheets
    #[arg(short, long, default_value = "./output")]
    output_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Process each chemical
    let mut success_count = 0;
    let mut failure_count = 0;

    for name in &args.names {
        tracing::info!("Processing chemical: {}", name);

        let identity = match client::fetch_identity(name).await {
            Ok(identity) => identity,
            Err(PubChemError::CompoundNotFound(name)) => {
                tracing::warn!("Chemical not found: {}", name);
                failure_count += 1;
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to fetch identity for {}: {}", name, e);
                failure_count += 1;
                continue;
            }
        };
        tracing::info!(
            "Fetched identity: CID {} ({}, {} g/mol)",
            identity.cid,
            identity.molecular_formula,
            identity.molecular_weight
        );

        let record = match client::fetch_detail_tree(identity.cid).await {
            Ok(record) => record,
            Err(PubChemError::DetailNotFound(cid)) => {
                tracing::warn!("No detail record for CID {}", cid);
                failure_count += 1;
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to fetch detail record for {}: {}", name, e);
                failure_count += 1;
                continue;
            }
        };

        let sections = record.sections.as_deref().unwrap_or_default();

        // Basic info: toxicity narratives, physical properties, risk level
        let chemical_facts = facts::build_chemical_facts(sections);
        tracing::info!(
            "Extracted {} toxicity narratives, {} physical properties, risk {:?}",
            chemical_facts.toxicity.len(),
            chemical_facts.physical_properties.len(),
            chemical_facts.risk_level
        );

        let basic_report = BasicInfoReport::new(&identity, &chemical_facts);
        match storage.save_basic_info(&basic_report) {
            Ok(path) => tracing::info!("Saved basic info to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save basic info: {}", e),
        }

        // Hazards: GHS statements, signal word, synonyms (capped in the report)
        match facts::build_hazard_facts(sections) {
            Some(hazard_facts) => {
                let hazard_report = HazardReport::new(&identity, &hazard_facts);
                match storage.save_hazards(&hazard_report) {
                    Ok(path) => tracing::info!("Saved hazard report to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save hazard report: {}", e),
                }
            }
            None => tracing::warn!("No hazard data found for {}", name),
        }

        success_count += 1;
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        success_count,
        failure_count
    );

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to extract facts for all {} chemicals",
            failure_count
        )));
    }

    Ok(())
}
