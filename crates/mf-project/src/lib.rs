//! mf-project: network file format, validation and compilation.

pub mod compile;
pub mod samples;
pub mod schema;
pub mod validate;

pub use compile::{CompiledNetwork, compile};
pub use schema::*;
pub use validate::{ValidationError, validate_network};

use std::path::Path;
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] mf_graph::GraphError),

    #[error("Unsupported file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkFile> {
    debug!(path = %path.display(), "loading YAML network file");
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_yaml::from_str(&content)?;
    validate_network(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_network(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkFile> {
    debug!(path = %path.display(), "loading JSON network file");
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&content)?;
    validate_network(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_network(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a network file, picking the format from the extension.
pub fn load(path: &Path) -> ProjectResult<NetworkFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
