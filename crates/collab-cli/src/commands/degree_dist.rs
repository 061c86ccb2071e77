use std::error::Error;

use clap::Args;
use collab_stats::{compute_degree_distribution, fit_trend, DegreePoint, TrendFit};
use serde::Serialize;

use super::{print_json, GraphArgs};

#[derive(Args, Debug)]
pub struct DegreeDistArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Emit JSON instead of columns.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DistributionOutput {
    points: Vec<DegreePoint>,
    trend: Option<TrendFit>,
}

pub fn run(args: &DegreeDistArgs) -> Result<(), Box<dyn Error>> {
    let built = args.graph.build()?;
    let points = compute_degree_distribution(&built.graph);
    let trend = fit_trend(&points);
    if args.json {
        return print_json(&DistributionOutput { points, trend });
    }
    println!("{:>8} {:>8} {:>12} {:>12}", "degree", "count", "log_degree", "log_count");
    for point in &points {
        println!(
            "{:>8} {:>8} {:>12.6} {:>12.6}",
            point.degree, point.count, point.log_degree, point.log_count
        );
    }
    match trend {
        Some(fit) => println!(
            "trend: log_count = {:.6} * log_degree + {:.6} (r^2 = {:.6})",
            fit.slope, fit.intercept, fit.r_squared
        ),
        None => println!("trend: not enough distinct degrees"),
    }
    Ok(())
}
