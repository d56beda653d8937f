// src/pubchem/models.rs
#![allow(dead_code)]
use serde::{Deserialize, Serialize};

/// Envelope of the PUG-View detail endpoint.
/// Example: https://pubchem.ncbi.nlm.nih.gov/rest/pug_view/data/compound/962/JSON
#[derive(Debug, Clone, Deserialize)]
pub struct Root {
    #[serde(rename = "Record")]
    pub record: Option<Record>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "RecordType")]
    pub record_type: Option<String>,
    #[serde(rename = "RecordNumber")]
    pub record_number: Option<u32>,
    #[serde(rename = "RecordTitle")]
    pub record_title: Option<String>,
    #[serde(rename = "Section")]
    pub sections: Option<Vec<Section>>,
}

/// One node of the annotation tree. Sections nest to arbitrary depth;
/// headings are not guaranteed unique anywhere in the tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(rename = "TOCHeading")]
    pub toc_heading: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Section")]
    pub subsections: Option<Vec<Section>>,
    #[serde(rename = "Information")]
    pub information: Option<Vec<Information>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Information {
    #[serde(rename = "ReferenceNumber")]
    pub reference_number: Option<u32>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Value")]
    pub value: Option<Value>,
}

/// Payload of an information item. PUG-View declares every shape optional
/// and non-exclusive; the resolver in `extractors::value` defines the
/// priority order. Boolean/date/binary shapes are carried for completeness
/// but never extracted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Value {
    #[serde(rename = "StringWithMarkup")]
    pub string_with_markup: Option<Vec<StringWithMarkup>>,
    #[serde(rename = "Number")]
    pub number: Option<Vec<f64>>,
    #[serde(rename = "Unit")]
    pub unit: Option<String>,
    #[serde(rename = "Boolean")]
    pub boolean: Option<Vec<bool>>,
    #[serde(rename = "DateISO8601")]
    pub date_iso8601: Option<Vec<String>>,
    #[serde(rename = "Binary")]
    pub binary: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StringWithMarkup {
    #[serde(rename = "String")]
    pub string: String,
    // Markup spans (links, chemical formatting) are not needed for extraction
}

/// Envelope of the CID-by-name lookup.
#[derive(Debug, Deserialize)]
pub struct IdentifierListEnvelope {
    #[serde(rename = "IdentifierList")]
    pub identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Deserialize)]
pub struct IdentifierList {
    #[serde(rename = "CID")]
    pub cid: Vec<u32>,
}

/// Envelope of the molecular-property lookup.
#[derive(Debug, Deserialize)]
pub struct PropertyTableEnvelope {
    #[serde(rename = "PropertyTable")]
    pub property_table: PropertyTable,
}

#[derive(Debug, Deserialize)]
pub struct PropertyTable {
    #[serde(rename = "Properties")]
    pub properties: Vec<CompoundProperties>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundProperties {
    #[serde(rename = "CID")]
    pub cid: u32,
    #[serde(rename = "MolecularFormula")]
    pub molecular_formula: String,
    // PUG delivers the weight as a JSON string; the client parses it
    #[serde(rename = "MolecularWeight")]
    pub molecular_weight: String,
}

/// Basic identity of one chemical, assembled from the CID and property
/// lookups. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemicalIdentity {
    pub cid: u32,
    pub name: String,
    pub molecular_formula: String,
    pub molecular_weight: f64,
    pub image_url: String,
}

impl ChemicalIdentity {
    /// Renders the 2D structure image URL for a CID.
    pub fn image_url_for(cid: u32) -> String {
        format!("https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/{}/PNG", cid)
    }
}
