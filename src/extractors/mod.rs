// src/extractors/mod.rs
pub mod facts;
pub mod section;
pub mod value;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use facts::{
    build_chemical_facts, build_hazard_facts, ChemicalFactSheet, HazardFactSheet, RiskLevel,
};
