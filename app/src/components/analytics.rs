//! Network analytics panel: simulated 30-day growth and summary pills.

use dioxus::prelude::*;
use morph_core::series::{GROWTH_DAYS, growth_series};
use morph_types::{analytics_pills, ticker_stats};

use super::counter::CounterReadout;
use super::sparkline::Sparkline;

#[component]
pub fn Analytics() -> Element {
    let series = use_hook(|| growth_series(GROWTH_DAYS));
    let pills = use_hook(analytics_pills);
    let ticker = use_hook(ticker_stats);

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let first = series.first().map(|p| p.label.clone()).unwrap_or_default();
    let last = series.last().map(|p| p.label.clone()).unwrap_or_default();

    rsx! {
        section { class: "analytics",
            h2 { "Network Growth" }
            div { class: "ticker",
                for (i, stat) in ticker.into_iter().enumerate() {
                    CounterReadout {
                        key: "{i}",
                        id: format!("ticker-{i}"),
                        stat,
                        class: "ticker-item".to_string(),
                    }
                }
            }
            div { class: "growth-chart",
                Sparkline {
                    data: values,
                    width: 600.0,
                    height: 160.0,
                    padding: 8.0,
                    class: "growth-line".to_string(),
                }
                div { class: "chart-axis",
                    span { "{first}" }
                    span { "{last}" }
                }
            }
            div { class: "pill-row",
                for (i, stat) in pills.into_iter().enumerate() {
                    CounterReadout {
                        key: "{i}",
                        id: format!("pill-{i}"),
                        stat,
                        class: "pill".to_string(),
                    }
                }
            }
        }
    }
}
