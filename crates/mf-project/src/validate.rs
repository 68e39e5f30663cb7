//! Network file validation logic.

use crate::schema::{LATEST_VERSION, NetworkFile};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Network must contain at least one node")]
    EmptyNetwork,

    #[error("Node out of range: {field} = {node} (network has {node_count} nodes)")]
    NodeOutOfRange {
        field: String,
        node: u32,
        node_count: usize,
    },

    #[error("Invalid value: edges[{index}].capacity = {capacity} (must be non-negative)")]
    NegativeCapacity { index: usize, capacity: i64 },

    #[error("Source and sink are both node {node}")]
    SourceIsSink { node: u32 },
}

pub fn validate_network(file: &NetworkFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }
    if file.node_count == 0 {
        return Err(ValidationError::EmptyNetwork);
    }

    let check = |field: String, node: u32| {
        if (node as usize) < file.node_count {
            Ok(())
        } else {
            Err(ValidationError::NodeOutOfRange {
                field,
                node,
                node_count: file.node_count,
            })
        }
    };

    check("source".to_string(), file.source)?;
    check("sink".to_string(), file.sink)?;
    if file.source == file.sink {
        return Err(ValidationError::SourceIsSink { node: file.source });
    }

    for (index, edge) in file.edges.iter().enumerate() {
        check(format!("edges[{index}].from"), edge.from)?;
        check(format!("edges[{index}].to"), edge.to)?;
        if edge.capacity < 0 {
            return Err(ValidationError::NegativeCapacity {
                index,
                capacity: edge.capacity,
            });
        }
    }

    Ok(())
}
