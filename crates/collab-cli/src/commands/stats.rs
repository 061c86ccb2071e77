use std::error::Error;

use clap::{Args, ValueEnum};
use collab_stats::{compute_statistics, CentralitySelection};

use super::{print_json, GraphArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    MaxKey,
    ArgMax,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// How the "node with highest centrality" rows pick their node.
    #[arg(long, value_enum, default_value_t = SelectionArg::MaxKey)]
    pub selection: SelectionArg,
    /// Emit JSON instead of an aligned table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let built = args.graph.build()?;
    let selection = match args.selection {
        SelectionArg::MaxKey => CentralitySelection::MaxKey,
        SelectionArg::ArgMax => CentralitySelection::ArgMax,
    };
    let stats = compute_statistics(&built.graph, selection)?;
    let table = stats.table();
    if args.json {
        return print_json(&table);
    }
    let width = table.iter().map(|row| row.property.len()).max().unwrap_or(0);
    println!("{:<width$}  Results", "Properties");
    for row in &table {
        println!("{:<width$}  {}", row.property, row.result);
    }
    Ok(())
}
