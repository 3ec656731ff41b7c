//! Headline metric definitions.
//!
//! The site has no live data source; these are the simulated figures the
//! animated counters count up to.

use serde::{Deserialize, Serialize};

use crate::formatting::format_counter;

/// One animated numeric readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDef {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub growth: Option<String>,
    pub duration_ms: u32,
}

impl StatDef {
    fn new(label: &str, value: f64, decimals: u8, duration_ms: u32) -> Self {
        Self {
            label: label.to_string(),
            value,
            prefix: String::new(),
            suffix: String::new(),
            decimals,
            growth: None,
            duration_ms,
        }
    }

    fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    fn growth(mut self, growth: &str) -> Self {
        self.growth = Some(growth.to_string());
        self
    }

    /// Render a counter value with this stat's prefix, precision and suffix.
    pub fn display(&self, count: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_counter(count, self.decimals as usize),
            self.suffix
        )
    }
}

/// Hero stat cards.
pub fn builtin_stats() -> Vec<StatDef> {
    vec![
        StatDef::new("Total Transactions", 1_200_000.0, 0, 2200)
            .suffix("+")
            .growth("↑ 12.4%"),
        StatDef::new("Active Consumer Apps", 45.0, 0, 2200)
            .suffix("+")
            .growth("↑ 8.1%"),
        StatDef::new("Avg. Transaction Fee", 0.01, 2, 2200)
            .prefix("<$")
            .growth("↓ 3.2%"),
        StatDef::new("TPS", 12.5, 1, 2200).growth("↑ 5.2%"),
    ]
}

/// Live ticker strip.
pub fn ticker_stats() -> Vec<StatDef> {
    vec![
        StatDef::new("Total Volume (TVL)", 14.2, 1, 2200)
            .prefix("$")
            .suffix("M")
            .growth("+2.1%"),
        StatDef::new("Active Users (24h)", 12_402.0, 0, 2200),
        StatDef::new("Payment TPS", 18.5, 1, 2200),
    ]
}

/// Pills above the network analytics chart.
pub fn analytics_pills() -> Vec<StatDef> {
    vec![
        StatDef::new("TVL", 12.4, 1, 1800).prefix("$").suffix("M"),
        StatDef::new("Daily Active Users", 8.5, 1, 1800).suffix("K"),
        StatDef::new("Growth Index", 94.0, 0, 1800),
    ]
}
