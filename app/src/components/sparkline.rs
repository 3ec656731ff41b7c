use dioxus::prelude::*;
use morph_core::series::{SparklineBox, sparkline_points, to_polyline};

/// Inline SVG trend line. Renders nothing for fewer than two samples.
#[component]
pub fn Sparkline(
    data: Vec<f64>,
    #[props(default = 80.0)] width: f64,
    #[props(default = 24.0)] height: f64,
    #[props(default = 2.0)] padding: f64,
    #[props(default = "sparkline".to_string())] class: String,
) -> Element {
    let frame = SparklineBox {
        width,
        height,
        padding,
    };
    let Some(points) = sparkline_points(&data, frame) else {
        return rsx! {};
    };
    let points = to_polyline(&points);

    rsx! {
        svg {
            class: "{class}",
            width: "{width}",
            height: "{height}",
            view_box: "0 0 {width} {height}",
            polyline {
                points: "{points}",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
