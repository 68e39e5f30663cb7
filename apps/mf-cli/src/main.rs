use clap::{Parser, Subcommand};
use mf_graph::{EdgeRef, ResidualNetwork};
use mf_project::{CompiledNetwork, NetworkFile, ProjectError, compile, samples};
use mf_solver::{FlowSolution, SolveConfig, SolverError, min_cut, solve};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Maximum flow CLI - augmenting-path solver for capacitated networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax and structure
    Validate {
        /// Path to the network file (.yaml, .yml or .json)
        network_path: PathBuf,
    },
    /// Compute the maximum flow of a network file
    Solve {
        /// Path to the network file (.yaml, .yml or .json)
        network_path: PathBuf,
        /// Print every augmenting path with its bottleneck
        #[arg(long)]
        trace: bool,
        /// Print the flow carried by each edge
        #[arg(long)]
        flows: bool,
        /// Check flow invariants after solving
        #[arg(long)]
        verify: bool,
        /// Give up after this many augmenting paths
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// Print a minimum cut of a network file
    Cut {
        /// Path to the network file (.yaml, .yml or .json)
        network_path: PathBuf,
    },
    /// Solve a built-in sample network
    Demo {
        /// Sample name (classic or sample)
        #[arg(default_value = "classic")]
        name: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Network file error: {0}")]
    Project(#[from] ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Unknown sample '{name}' (available: {available})")]
    UnknownSample { name: String, available: String },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Solve {
            network_path,
            trace,
            flows,
            verify,
            max_iterations,
        } => {
            let config = SolveConfig {
                max_iterations,
                record_trace: trace,
                verify,
            };
            cmd_solve(&network_path, &config, flows)
        }
        Commands::Cut { network_path } => cmd_cut(&network_path),
        Commands::Demo { name } => cmd_demo(&name),
    }
}

fn cmd_validate(network_path: &Path) -> CliResult<()> {
    println!("Validating network: {}", network_path.display());
    let file = mf_project::load(network_path)?;
    compile(&file)?;
    println!(
        "✓ Network '{}' is valid ({} nodes, {} edges)",
        file.name,
        file.node_count,
        file.edges.len()
    );
    Ok(())
}

fn cmd_solve(network_path: &Path, config: &SolveConfig, show_flows: bool) -> CliResult<()> {
    let file = mf_project::load(network_path)?;
    let mut compiled = compile(&file)?;
    let solution = run(&file, &mut compiled, config)?;

    if config.record_trace {
        print_trace(&solution);
    }
    if show_flows {
        print_flows(&solution);
    }
    println!("Max Flow: {}", solution.value);
    Ok(())
}

fn cmd_cut(network_path: &Path) -> CliResult<()> {
    let file = mf_project::load(network_path)?;
    let mut compiled = compile(&file)?;
    let solution = run(&file, &mut compiled, &SolveConfig::default())?;
    let cut = min_cut(&compiled.network, compiled.source)?;

    let side: Vec<String> = cut.source_side.iter().map(|n| n.to_string()).collect();
    println!("Source side: {{{}}}", side.join(", "));
    println!("Cut edges:");
    for &edge in &cut.cut_edges {
        print_edge(&compiled.network, edge);
    }
    println!("Cut capacity: {}", cut.capacity);
    println!("Max Flow: {}", solution.value);
    Ok(())
}

fn cmd_demo(name: &str) -> CliResult<()> {
    let file = samples::by_name(name).ok_or_else(|| CliError::UnknownSample {
        name: name.to_string(),
        available: samples::NAMES.join(", "),
    })?;
    let mut compiled = compile(&file)?;
    let solution = run(&file, &mut compiled, &SolveConfig::default())?;
    println!("Max Flow: {}", solution.value);
    Ok(())
}

fn run(
    file: &NetworkFile,
    compiled: &mut CompiledNetwork,
    config: &SolveConfig,
) -> CliResult<FlowSolution> {
    info!(
        network = %file.name,
        nodes = file.node_count,
        edges = file.edges.len(),
        "solving"
    );
    let solution = solve(
        &mut compiled.network,
        compiled.source,
        compiled.sink,
        config,
    )?;
    Ok(solution)
}

fn print_trace(solution: &FlowSolution) {
    println!("Augmenting paths:");
    for (i, aug) in solution.trace.iter().enumerate() {
        let path: Vec<String> = aug.path.iter().map(|n| n.to_string()).collect();
        println!(
            "  {:>3}: {}  (+{})",
            i + 1,
            path.join(" -> "),
            aug.bottleneck
        );
    }
}

fn print_flows(solution: &FlowSolution) {
    println!("Edge flows:");
    for e in &solution.edge_flows {
        println!("  {} -> {}: {}/{}", e.from, e.to, e.flow, e.capacity);
    }
}

fn print_edge(network: &ResidualNetwork, edge: EdgeRef) {
    if let Some(e) = network.edge(edge) {
        println!("  {} -> {} (capacity {})", edge.node, e.to(), e.capacity());
    }
}
