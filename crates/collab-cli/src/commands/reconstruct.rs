use std::error::Error;

use clap::Args;
use collab_data::GraphMode;
use collab_graph::canonical_hash;
use collab_recon::ReconstructionReport;
use serde::Serialize;

use super::{print_json, SourceArgs};

#[derive(Args, Debug)]
pub struct ReconstructArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Emit the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ReconstructOutput<'a> {
    graph_hash: String,
    report: &'a ReconstructionReport,
}

pub fn run(args: &ReconstructArgs) -> Result<(), Box<dyn Error>> {
    let built = args.source.build(GraphMode::Reconstructed)?;
    let report = built
        .reconstruction
        .as_ref()
        .ok_or("reconstructed build returned no report")?;
    let graph_hash = canonical_hash(&built.graph);
    if args.json {
        return print_json(&ReconstructOutput { graph_hash, report });
    }

    println!("nodes: {}", report.nodes);
    println!(
        "edges: {} -> {} (after pruning) -> {}",
        report.edges_before, report.edges_after_pruning, report.edges_after
    );
    println!(
        "bridges: {} evaluated, {} removed, {} restored ({:?} rule)",
        report.pruning.candidates,
        report.pruning.removed,
        report.pruning.restored,
        report.options.reweight
    );
    match &report.capping {
        Some(capping) => {
            println!("kmax: {:.6}", capping.kmax);
            println!(
                "capped: {} nodes; removed same={} one-difference={} multi-difference={} fallback={}",
                capping.capped_nodes,
                capping.removed.same,
                capping.removed.one_difference,
                capping.removed.multi_difference,
                capping.removed.fallback
            );
            println!("residual violations: {}", capping.residual_violations);
        }
        None => println!("capping: skipped (empty graph)"),
    }
    println!("graph hash: {graph_hash}");
    Ok(())
}
