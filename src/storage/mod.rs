// src/storage/mod.rs
use crate::extractors::facts::{ChemicalFactSheet, HazardFactSheet, RiskLevel};
use crate::pubchem::models::ChemicalIdentity;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// How many synonyms the hazard report presents. Capping is a presentation
/// decision; the underlying fact sheet keeps the full list.
const TOP_SYNONYMS: usize = 10;

/// The "basic info" presentation: chemical identity merged with the
/// extracted fact sheet.
#[derive(Debug, Clone, Serialize)]
pub struct BasicInfoReport {
    pub cid: u32,
    pub name: String,
    pub molecular_formula: String,
    pub molecular_weight: f64,
    pub image_url: String,
    pub toxicity: Vec<String>,
    pub physical_properties: BTreeMap<String, String>,
    pub risk_level: RiskLevel,
}

impl BasicInfoReport {
    pub fn new(identity: &ChemicalIdentity, facts: &ChemicalFactSheet) -> Self {
        Self {
            cid: identity.cid,
            name: identity.name.clone(),
            molecular_formula: identity.molecular_formula.clone(),
            molecular_weight: identity.molecular_weight,
            image_url: identity.image_url.clone(),
            toxicity: facts.toxicity.clone(),
            physical_properties: facts.physical_properties.clone(),
            risk_level: facts.risk_level,
        }
    }
}

/// The "hazards" presentation: identity subset plus GHS facts and the
/// first `TOP_SYNONYMS` synonyms in original order.
#[derive(Debug, Clone, Serialize)]
pub struct HazardReport {
    pub name: String,
    pub molecular_formula: String,
    pub molecular_weight: f64,
    pub image_url: String,
    pub hazards: Vec<String>,
    pub signal_word: Option<String>,
    pub synonyms: Vec<String>,
}

impl HazardReport {
    pub fn new(identity: &ChemicalIdentity, facts: &HazardFactSheet) -> Self {
        Self {
            name: identity.name.clone(),
            molecular_formula: identity.molecular_formula.clone(),
            molecular_weight: identity.molecular_weight,
            image_url: identity.image_url.clone(),
            hazards: facts.ghs_hazards.clone(),
            signal_word: facts.signal_word.clone(),
            synonyms: facts.synonyms.iter().take(TOP_SYNONYMS).cloned().collect(),
        }
    }
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the basic-info report as JSON under `{base}/{NAME}/basic_info.json`
    pub fn save_basic_info(&self, report: &BasicInfoReport) -> Result<PathBuf, StorageError> {
        let path = self.write_report(&report.name, "basic_info.json", report)?;
        tracing::info!("Saved basic info to {}", path.display());
        Ok(path)
    }

    /// Saves the hazard report as JSON under `{base}/{NAME}/hazards.json`
    pub fn save_hazards(&self, report: &HazardReport) -> Result<PathBuf, StorageError> {
        let path = self.write_report(&report.name, "hazards.json", report)?;
        tracing::info!("Saved hazard report to {}", path.display());
        Ok(path)
    }

    fn write_report<T: Serialize>(
        &self,
        chemical_name: &str,
        filename: &str,
        report: &T,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(chemical_name.to_uppercase());

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let mut doc = serde_json::to_value(report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        doc["extracted_at"] = serde_json::json!(chrono::Utc::now().to_rfc3339());

        let file_path = target_dir.join(filename);
        let rendered = serde_json::to_string_pretty(&doc)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, rendered).map_err(StorageError::IoError)?;

        Ok(file_path)
    }
}
