// src/extractors/facts.rs

// --- Imports ---
use crate::extractors::section::{collect_information, find_section};
use crate::extractors::value::{resolve, resolve_all};
use crate::pubchem::models::Section;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

// --- Heading paths of interest ---
const TOXICITY_PATH: &[&str] = &["Toxicity"];
const PROPERTIES_PATH: &[&str] = &["Chemical and Physical Properties"];
const GHS_PATH: &[&str] = &["Safety and Hazards", "GHS Classification"];
const SYNONYMS_PATH: &[&str] = &["Names and Identifiers", "Synonyms"];

// --- Keyword rule tables (Lazy Static) ---
// Ordered risk rules, evaluated first-match-wins: High outranks Medium
// even when both keyword classes appear in the narratives.
static RISK_RULES: Lazy<Vec<(Regex, RiskLevel)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)lethal|carcinogenic").expect("Failed to compile High risk pattern"),
            RiskLevel::High,
        ),
        (
            Regex::new(r"(?i)harmful").expect("Failed to compile Medium risk pattern"),
            RiskLevel::Medium,
        ),
    ]
});

static SIGNAL_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)warning|danger").expect("Failed to compile signal word pattern")
});

// --- Output types ---

/// Derived hazard classification for one chemical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Unknown,
}

/// Flattened safety facts for one chemical: toxicity narratives in document
/// order, deduplicated physical properties, and the derived risk level.
/// Built per request; never shared or mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChemicalFactSheet {
    pub toxicity: Vec<String>,
    pub physical_properties: BTreeMap<String, String>,
    pub risk_level: RiskLevel,
}

/// GHS hazard facts for one chemical. `signal_word` is the LAST hazard
/// string containing "Warning" or "Danger"; synonyms keep document order
/// and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HazardFactSheet {
    pub ghs_hazards: Vec<String>,
    pub signal_word: Option<String>,
    pub synonyms: Vec<String>,
}

// --- Aggregation ---

/// Builds the chemical fact sheet from the top-level sections of a detail
/// record. Missing or malformed sub-structure is skipped, never an error;
/// the sheet always comes back, possibly sparsely populated.
pub fn build_chemical_facts(sections: &[Section]) -> ChemicalFactSheet {
    let mut toxicity = Vec::new();
    let mut physical_properties = BTreeMap::new();

    // Toxicity narratives sit one nesting level deeper than the other
    // extractions: the items live in the subsections of "Toxicity".
    if let Some(tox) = find_section(sections, TOXICITY_PATH) {
        for sub in tox.subsections.as_deref().unwrap_or_default() {
            for info in collect_information(sub) {
                if let Some(value) = info.value.as_ref() {
                    toxicity.extend(resolve_all(value));
                }
            }
        }
        tracing::debug!("Collected {} toxicity narratives", toxicity.len());
    }

    if let Some(props) = find_section(sections, PROPERTIES_PATH) {
        for sub in props.subsections.as_deref().unwrap_or_default() {
            for info in collect_information(sub) {
                let name = match info.name.as_deref().map(str::trim) {
                    Some(name) if !name.is_empty() => name,
                    _ => continue,
                };
                let rendered = match info.value.as_ref().and_then(resolve) {
                    Some(rendered) => rendered,
                    None => continue,
                };
                // First value wins; later duplicates for the same key are dropped
                if !physical_properties.contains_key(name) {
                    physical_properties.insert(name.to_string(), rendered);
                }
            }
        }
        tracing::debug!("Collected {} physical properties", physical_properties.len());
    }

    let risk_level = classify_risk(&toxicity);
    tracing::info!("Derived risk level: {:?}", risk_level);

    ChemicalFactSheet {
        toxicity,
        physical_properties,
        risk_level,
    }
}

/// Builds the hazard fact sheet from the top-level sections of a detail
/// record. Returns `None` when neither "Safety and Hazards" nor
/// "Names and Identifiers" exists anywhere in the tree, so callers can
/// distinguish "no hazard data" from "found but empty."
pub fn build_hazard_facts(sections: &[Section]) -> Option<HazardFactSheet> {
    let has_safety = find_section(sections, &GHS_PATH[..1]).is_some();
    let has_identifiers = find_section(sections, &SYNONYMS_PATH[..1]).is_some();
    if !has_safety && !has_identifiers {
        tracing::debug!("No hazard-bearing sections present");
        return None;
    }

    let mut facts = HazardFactSheet::default();

    if let Some(ghs) = find_section(sections, GHS_PATH) {
        for info in collect_information(ghs) {
            let Some(value) = info.value.as_ref() else { continue };
            for text in resolve_all(value) {
                if SIGNAL_WORD_RE.is_match(&text) {
                    // Last match wins, overwriting earlier assignments
                    facts.signal_word = Some(text.clone());
                }
                facts.ghs_hazards.push(text);
            }
        }
        tracing::debug!("Collected {} GHS hazard statements", facts.ghs_hazards.len());
    }

    if let Some(synonyms) = find_section(sections, SYNONYMS_PATH) {
        for info in collect_information(synonyms) {
            let Some(value) = info.value.as_ref() else { continue };
            facts.synonyms.extend(resolve_all(value));
        }
        tracing::debug!("Collected {} synonyms", facts.synonyms.len());
    }

    Some(facts)
}

/// Ordered-rule classifier over the toxicity narratives. Empty narratives
/// mean Unknown; otherwise the first rule any narrative matches decides,
/// and Low is the fallthrough.
fn classify_risk(narratives: &[String]) -> RiskLevel {
    if narratives.is_empty() {
        return RiskLevel::Unknown;
    }
    for (pattern, level) in RISK_RULES.iter() {
        if narratives.iter().any(|n| pattern.is_match(n)) {
            return *level;
        }
    }
    RiskLevel::Low
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn sections(json: serde_json::Value) -> Vec<Section> {
        serde_json::from_value(json).expect("test sections should deserialize")
    }

    fn toxicity_tree(texts: &[&str]) -> Vec<Section> {
        let items: Vec<serde_json::Value> = texts
            .iter()
            .map(|t| serde_json::json!({ "Value": { "StringWithMarkup": [{ "String": t }] } }))
            .collect();
        sections(serde_json::json!([
            {
                "TOCHeading": "Toxicity",
                "Section": [{ "TOCHeading": "Toxicological Information", "Information": items }]
            }
        ]))
    }

    #[test]
    fn test_missing_toxicity_section_means_unknown_risk() {
        let tree = sections(serde_json::json!([{ "TOCHeading": "Names and Identifiers" }]));
        let facts = build_chemical_facts(&tree);
        assert!(facts.toxicity.is_empty());
        assert_eq!(facts.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_lethal_narrative_is_high_risk() {
        let tree = toxicity_tree(&["May be fatal if swallowed (lethal)"]);
        let facts = build_chemical_facts(&tree);
        assert_eq!(facts.toxicity, vec!["May be fatal if swallowed (lethal)"]);
        assert_eq!(facts.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_high_outranks_medium_when_both_present() {
        let tree = toxicity_tree(&["Harmful if inhaled", "LETHAL in high doses"]);
        assert_eq!(build_chemical_facts(&tree).risk_level, RiskLevel::High);
    }

    #[test]
    fn test_carcinogenic_is_high_and_harmful_is_medium() {
        let high = toxicity_tree(&["Suspected Carcinogenic agent"]);
        assert_eq!(build_chemical_facts(&high).risk_level, RiskLevel::High);
        let medium = toxicity_tree(&["Harmful to aquatic life"]);
        assert_eq!(build_chemical_facts(&medium).risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_benign_narratives_are_low_risk() {
        let tree = toxicity_tree(&["No adverse effects observed"]);
        assert_eq!(build_chemical_facts(&tree).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_physical_properties_first_value_wins() {
        let tree = sections(serde_json::json!([
            {
                "TOCHeading": "Chemical and Physical Properties",
                "Section": [
                    {
                        "TOCHeading": "Experimental Properties",
                        "Information": [
                            { "Name": "Density", "Value": { "Number": [1.2], "Unit": "g/cm3" } },
                            { "Name": "Density", "Value": { "StringWithMarkup": [{ "String": "1.5 g/cm3" }] } },
                            { "Name": "Odor", "Value": { "StringWithMarkup": [{ "String": "Pungent" }] } },
                            { "Name": "  ", "Value": { "StringWithMarkup": [{ "String": "dropped" }] } }
                        ]
                    }
                ]
            }
        ]));
        let facts = build_chemical_facts(&tree);
        assert_eq!(facts.physical_properties.len(), 2);
        assert_eq!(facts.physical_properties["Density"], "1.2 g/cm3");
        assert_eq!(facts.physical_properties["Odor"], "Pungent");
        assert_eq!(facts.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_signal_word_last_match_wins() {
        let tree = sections(serde_json::json!([
            {
                "TOCHeading": "Safety and Hazards",
                "Section": [
                    {
                        "TOCHeading": "GHS Classification",
                        "Information": [
                            { "Value": { "StringWithMarkup": [
                                { "String": "Warning: irritant" },
                                { "String": "Danger: corrosive" }
                            ] } }
                        ]
                    }
                ]
            }
        ]));
        let facts = build_hazard_facts(&tree).expect("hazard data should be found");
        assert_eq!(facts.ghs_hazards, vec!["Warning: irritant", "Danger: corrosive"]);
        assert_eq!(facts.signal_word.as_deref(), Some("Danger: corrosive"));
    }

    #[test]
    fn test_synonyms_keep_order_and_duplicates() {
        let tree = sections(serde_json::json!([
            {
                "TOCHeading": "Names and Identifiers",
                "Section": [
                    {
                        "TOCHeading": "Synonyms",
                        "Information": [
                            { "Value": { "StringWithMarkup": [
                                { "String": "ethanol" },
                                { "String": "ethyl alcohol" },
                                { "String": "ethanol" }
                            ] } }
                        ]
                    }
                ]
            }
        ]));
        let facts = build_hazard_facts(&tree).expect("hazard data should be found");
        assert_eq!(facts.synonyms, vec!["ethanol", "ethyl alcohol", "ethanol"]);
        assert!(facts.ghs_hazards.is_empty());
        assert!(facts.signal_word.is_none());
    }

    #[test]
    fn test_no_hazard_bearing_sections_is_not_found() {
        let tree = sections(serde_json::json!([{ "TOCHeading": "Toxicity" }]));
        assert!(build_hazard_facts(&tree).is_none());
        assert!(build_hazard_facts(&[]).is_none());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let tree = sections(serde_json::json!([
            {
                "TOCHeading": "Toxicity",
                "Section": [{
                    "TOCHeading": "Toxicological Information",
                    "Information": [
                        { "Value": { "StringWithMarkup": [{ "String": "Harmful if swallowed" }] } }
                    ]
                }]
            },
            {
                "TOCHeading": "Safety and Hazards",
                "Section": [{
                    "TOCHeading": "GHS Classification",
                    "Information": [
                        { "Value": { "StringWithMarkup": [{ "String": "Warning: flammable" }] } }
                    ]
                }]
            }
        ]));
        assert_eq!(build_chemical_facts(&tree), build_chemical_facts(&tree));
        assert_eq!(build_hazard_facts(&tree), build_hazard_facts(&tree));
    }

    #[test]
    fn test_information_without_value_is_skipped() {
        let tree = sections(serde_json::json!([
            {
                "TOCHeading": "Toxicity",
                "Section": [{
                    "TOCHeading": "Toxicological Information",
                    "Information": [ { "Name": "Orphaned item" } ]
                }]
            }
        ]));
        let facts = build_chemical_facts(&tree);
        assert!(facts.toxicity.is_empty());
        assert_eq!(facts.risk_level, RiskLevel::Unknown);
    }
}
