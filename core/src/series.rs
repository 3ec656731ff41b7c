//! Synthetic time series and sparkline geometry.
//!
//! There is no data source behind the site's charts. The growth chart and
//! project sparklines are generated here so that every render shows the same
//! curve.

use serde::Serialize;

/// Sparkline used for projects that carry no series of their own.
pub const DEFAULT_SPARKLINE: [f64; 12] = [
    40.0, 48.0, 52.0, 58.0, 62.0, 70.0, 75.0, 78.0, 82.0, 88.0, 90.0, 95.0,
];

/// Days shown on the network analytics chart.
pub const GROWTH_DAYS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day: usize,
    pub value: f64,
    pub label: String,
}

/// Simulated growth index: an upward trend with a sine wobble, one decimal.
pub fn growth_series(days: usize) -> Vec<SeriesPoint> {
    let span = days.saturating_sub(1).max(1) as f64;
    (0..days)
        .map(|i| {
            let t = i as f64 / span;
            let base = 70.0 + (i as f64 * 0.4).sin() * 12.0 + t * 25.0;
            SeriesPoint {
                day: i + 1,
                value: (base * 10.0).round() / 10.0,
                label: format!("Day {}", i + 1),
            }
        })
        .collect()
}

/// Box a sparkline is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklineBox {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for SparklineBox {
    fn default() -> Self {
        Self {
            width: 80.0,
            height: 24.0,
            padding: 2.0,
        }
    }
}

/// SVG coordinates for `data`, y growing downward. `None` for fewer than two
/// samples. A flat series is drawn along the bottom edge.
pub fn sparkline_points(data: &[f64], frame: SparklineBox) -> Option<Vec<(f64, f64)>> {
    if data.len() < 2 {
        return None;
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let w = frame.width - frame.padding * 2.0;
    let h = frame.height - frame.padding * 2.0;
    let step_x = w / (data.len() - 1) as f64;

    Some(
        data.iter()
            .enumerate()
            .map(|(i, v)| {
                let x = frame.padding + i as f64 * step_x;
                let y = frame.padding + h - ((v - min) / range) * h;
                (x, y)
            })
            .collect(),
    )
}

/// `points` attribute for an SVG `<polyline>`.
pub fn to_polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", trim_float(*x), trim_float(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn trim_float(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
