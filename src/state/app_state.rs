use crate::state::data_series::{color_for_index, DataSeries};
use crate::state::graph_state::GraphState;
use crate::state::trace_set::TraceSet;

pub const TIME_SYNC_GROUP: &str = "time_axis";

/// The stacked panels shown in the window.
#[derive(Debug, Clone)]
pub struct AppState {
    pub graphs: Vec<GraphState>,
    /// Raw timestamp units per displayed second.
    pub time_divisor: f64,
}

impl AppState {
    /// Position panel on top (actual, then reference), gains below.
    pub fn from_traces(traces: &TraceSet, time_divisor: f64) -> Self {
        let mut position = GraphState::new("position_plot", "y [m]");
        position.add_series(DataSeries::from_series(&traces.actual, color_for_index(0)));
        position.add_series(DataSeries::from_series(&traces.target, color_for_index(1)));

        let mut gains = GraphState::new("gain_plot", "gain");
        gains.add_series(DataSeries::from_series(&traces.kp, color_for_index(2)));
        gains.add_series(DataSeries::from_series(&traces.kd, color_for_index(3)));

        let mut state = Self {
            graphs: vec![position, gains],
            time_divisor,
        };
        state.sync_all();
        state
    }

    /// Put every panel into one x-axis link group.
    pub fn sync_all(&mut self) {
        for g in &mut self.graphs {
            g.sync_group_id = Some(TIME_SYNC_GROUP.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::series::Series;
    use crate::state::trace_set::{ACTUAL_LABEL, KD_LABEL, KP_LABEL, TARGET_LABEL};

    fn traces() -> TraceSet {
        let mut target = Series::new(TARGET_LABEL);
        target.push(0, 3.5);
        target.push(1_000_000_000, 4.0);
        let mut actual = Series::new(ACTUAL_LABEL);
        actual.push(0, 7.2);
        actual.push(1_000_000_000, 7.5);
        TraceSet {
            target,
            actual,
            kp: Series::new(KP_LABEL),
            kd: Series::new(KD_LABEL),
        }
    }

    fn labels(g: &GraphState) -> Vec<&str> {
        g.series.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn two_panels_in_plot_order() {
        let state = AppState::from_traces(&traces(), 1e9);
        assert_eq!(state.graphs.len(), 2);
        assert_eq!(labels(&state.graphs[0]), vec![ACTUAL_LABEL, TARGET_LABEL]);
        assert_eq!(labels(&state.graphs[1]), vec![KP_LABEL, KD_LABEL]);
        assert_eq!(state.graphs[0].y_axis_label, "y [m]");
        assert_eq!(state.graphs[1].y_axis_label, "gain");
    }

    #[test]
    fn panels_share_one_time_axis() {
        let state = AppState::from_traces(&traces(), 1e9);
        let groups: Vec<_> = state.graphs.iter().map(|g| g.sync_group_id.clone()).collect();
        assert!(groups.iter().all(|g| g.as_deref() == Some(TIME_SYNC_GROUP)));
    }

    #[test]
    fn empty_series_still_build_panels() {
        let empty = TraceSet {
            target: Series::new(TARGET_LABEL),
            actual: Series::new(ACTUAL_LABEL),
            kp: Series::new(KP_LABEL),
            kd: Series::new(KD_LABEL),
        };
        let state = AppState::from_traces(&empty, 1e9);
        assert_eq!(state.graphs.len(), 2);
        assert!(state.graphs.iter().all(|g| g.point_count() == 0));
        assert_eq!(state.graphs[1].series.len(), 2);
    }

    #[test]
    fn each_line_gets_its_own_color() {
        let state = AppState::from_traces(&traces(), 1e9);
        let mut colors: Vec<[u8; 4]> = state
            .graphs
            .iter()
            .flat_map(|g| g.series.iter().map(|s| s.color))
            .collect();
        colors.dedup();
        assert_eq!(colors.len(), 4);
        assert_eq!(state.graphs[0].point_count(), 4);
    }
}
