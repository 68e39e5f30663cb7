//! Turn a validated network file into a solvable residual network.

use mf_core::NodeId;
use mf_graph::{NetworkBuilder, ResidualNetwork};

use crate::ProjectResult;
use crate::schema::NetworkFile;
use crate::validate::validate_network;

/// Residual network plus resolved terminals.
#[derive(Debug, Clone)]
pub struct CompiledNetwork {
    pub network: ResidualNetwork,
    pub source: NodeId,
    pub sink: NodeId,
}

pub fn compile(file: &NetworkFile) -> ProjectResult<CompiledNetwork> {
    validate_network(file)?;

    let builder = NetworkBuilder::from_edges(
        file.node_count,
        file.edges.iter().map(|e| (e.from, e.to, e.capacity)),
    );
    let network = builder.build()?;
    let source = network.node(file.source)?;
    let sink = network.node(file.sink)?;

    Ok(CompiledNetwork {
        network,
        source,
        sink,
    })
}
