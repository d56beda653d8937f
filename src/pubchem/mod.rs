// src/pubchem/mod.rs
pub mod client;
pub mod models;
