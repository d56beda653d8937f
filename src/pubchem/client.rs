// src/pubchem/client.rs
use crate::pubchem::models::{
    ChemicalIdentity, IdentifierListEnvelope, PropertyTableEnvelope, Record, Root,
};
use crate::utils::error::PubChemError;
use std::time::Duration;

const PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov";
// IMPORTANT: Replace with your actual details or make configurable
const PUBCHEM_USER_AGENT: &str = "chem_extractor/0.1 (contact: ops@example.org)";
// PubChem asks for 5 requests/second max. Be conservative. >200ms delay.
const PUBCHEM_REQUEST_DELAY_MS: u64 = 250;

/// Creates a reqwest client configured for PubChem interaction.
fn build_pubchem_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(PUBCHEM_USER_AGENT)
        // Can add more config like timeouts here
        .build()
}

/// Performs a throttled GET against a PUG endpoint and checks the status.
/// PubChem signals throttling with 503 and unknown identifiers with 404.
async fn get_checked(url: &str) -> Result<reqwest::Response, PubChemError> {
    let client = build_pubchem_client()?; // Propagate client build error if any

    // --- Basic Rate Limiting ---
    // In a real app, use a more sophisticated approach like `governor`
    // especially if making concurrent requests.
    tokio::time::sleep(Duration::from_millis(PUBCHEM_REQUEST_DELAY_MS)).await;
    // --------------------------

    tracing::debug!("GET {}", url);
    let response = client.get(url).send().await?; // Propagates reqwest::Error as PubChemError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            tracing::warn!("Received 503 Service Unavailable - PubChem throttling.");
            return Err(PubChemError::RateLimited);
        }
        return Err(PubChemError::Http(status));
    }

    Ok(response)
}

/// Looks up the CID (PubChem compound key) for a chemical name.
pub async fn get_cid_from_name(name: &str) -> Result<u32, PubChemError> {
    let url = format!("{}/rest/pug/compound/name/{}/cids/JSON", PUBCHEM_BASE_URL, name);

    let envelope: IdentifierListEnvelope = match get_checked(&url).await {
        Ok(response) => response.json().await?,
        // PUG reports unknown names as 404
        Err(PubChemError::Http(status)) if status == reqwest::StatusCode::NOT_FOUND => {
            return Err(PubChemError::CompoundNotFound(name.to_string()));
        }
        Err(e) => return Err(e),
    };

    envelope
        .identifier_list
        .and_then(|list| list.cid.first().copied())
        .ok_or_else(|| PubChemError::CompoundNotFound(name.to_string()))
}

/// Fetches the basic identity (formula, weight, image URL) for a chemical name.
pub async fn fetch_identity(name: &str) -> Result<ChemicalIdentity, PubChemError> {
    let cid = get_cid_from_name(name).await?;
    tracing::info!("Resolved '{}' to CID {}", name, cid);

    let url = format!(
        "{}/rest/pug/compound/cid/{}/property/MolecularFormula,MolecularWeight/JSON",
        PUBCHEM_BASE_URL, cid
    );
    let envelope: PropertyTableEnvelope = get_checked(&url).await?.json().await?;

    let props = envelope
        .property_table
        .properties
        .into_iter()
        .next()
        .ok_or_else(|| PubChemError::Parse(format!("Empty property table for CID {}", cid)))?;

    let molecular_weight = props
        .molecular_weight
        .parse::<f64>()
        .map_err(|_| PubChemError::Parse(format!("Invalid molecular weight for CID {}", cid)))?;

    Ok(ChemicalIdentity {
        cid,
        name: name.to_string(),
        molecular_formula: props.molecular_formula,
        molecular_weight,
        image_url: ChemicalIdentity::image_url_for(cid),
    })
}

/// Fetches the full PUG-View annotation record for a CID.
/// Absence of the record (404 or an empty envelope) signals "no detail data."
pub async fn fetch_detail_tree(cid: u32) -> Result<Record, PubChemError> {
    let url = format!("{}/rest/pug_view/data/compound/{}/JSON", PUBCHEM_BASE_URL, cid);

    let root: Root = match get_checked(&url).await {
        Ok(response) => response.json().await?,
        Err(PubChemError::Http(status)) if status == reqwest::StatusCode::NOT_FOUND => {
            return Err(PubChemError::DetailNotFound(cid));
        }
        Err(e) => return Err(e),
    };

    let record = root.record.ok_or(PubChemError::DetailNotFound(cid))?;
    tracing::debug!(
        "Fetched detail record for CID {} ({} top-level sections)",
        cid,
        record.sections.as_ref().map_or(0, |s| s.len())
    );
    Ok(record)
}
