use serde::{Deserialize, Serialize};

use crate::distribution::DegreePoint;

/// Ordinary least-squares line through the log-log degree points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// Slope of `log_count` against `log_degree`.
    pub slope: f64,
    /// Intercept at `log_degree = 0`.
    pub intercept: f64,
    /// Coefficient of determination; `1` when every point lies on the line.
    pub r_squared: f64,
}

/// Fits `log_count = slope * log_degree + intercept`.
///
/// Returns `None` for fewer than two points or when every point shares the
/// same `log_degree`.
pub fn fit_trend(points: &[DegreePoint]) -> Option<TrendFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.log_degree).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.log_count).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for point in points {
        let dx = point.log_degree - mean_x;
        let dy = point.log_count - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let residual: f64 = points
        .iter()
        .map(|p| {
            let err = p.log_count - (slope * p.log_degree + intercept);
            err * err
        })
        .sum();
    let r_squared = if syy == 0.0 { 1.0 } else { 1.0 - residual / syy };
    Some(TrendFit {
        slope,
        intercept,
        r_squared,
    })
}
