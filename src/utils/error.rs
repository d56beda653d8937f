// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PubChemError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 400 Bad Request, 500 Internal Server Error

    #[error("PubChem rate limit likely exceeded")]
    RateLimited, // PUG returns 503 when throttling kicks in

    #[error("Chemical not found: {0}")]
    CompoundNotFound(String),

    #[error("No detail record available for CID {0}")]
    DetailNotFound(u32),

    #[error("Failed to parse PubChem response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("PubChem interaction failed: {0}")]
    PubChem(#[from] PubChemError), // Automatically convert client errors

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
