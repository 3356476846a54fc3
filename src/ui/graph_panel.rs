use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::state::graph_state::GraphState;

/// Significant digits shown on tick labels.
const TICK_PRECISION: usize = 6;

/// Format a raw timestamp tick as seconds in `%g` style: six significant
/// digits, trailing zeros dropped, exponent form outside `1e-4..1e6`
/// (`1.5e9` -> `"1.5"`, `1234567e9` -> `"1.23457e+06"`).
pub fn format_seconds(raw: f64, time_divisor: f64) -> String {
    format_general(raw / time_divisor)
}

fn format_general(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    // Rounding to the shown precision can bump the exponent (9.999999 -> 10).
    let sci = format!("{:.*e}", TICK_PRECISION - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= TICK_PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (TICK_PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Draw one chart panel of the given height. Panels sharing a sync group
/// zoom and pan together along x.
pub fn show_graph_panel(graph: &GraphState, ui: &mut egui::Ui, time_divisor: f64, height: f32) {
    let mut plot = Plot::new(graph.id.as_str())
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .show_grid(true)
        .x_axis_label(graph.x_axis_label.as_str())
        .y_axis_label(graph.y_axis_label.as_str())
        .x_axis_formatter(move |mark, _range| format_seconds(mark.value, time_divisor));

    if let Some(group) = &graph.sync_group_id {
        let link_id = egui::Id::new(group);
        plot = plot
            .link_axis(link_id, [true, false])
            .link_cursor(link_id, [true, false]);
    }

    plot.show(ui, |plot_ui| {
        for s in &graph.series {
            let points: PlotPoints = s.points.iter().copied().collect();
            plot_ui.line(
                Line::new(points)
                    .name(&s.label)
                    .color(s.color32())
                    .width(s.line_width),
            );
        }
    });
}
