use crate::state::data_series::DataSeries;

/// One chart panel: a y-axis quantity and the lines drawn against time.
#[derive(Debug, Clone)]
pub struct GraphState {
    /// Stable plot id for egui memory.
    pub id: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub series: Vec<DataSeries>,
    /// Panels with the same group id share a linked x-axis and cursor.
    pub sync_group_id: Option<String>,
}

impl GraphState {
    pub fn new(id: &str, y_axis_label: &str) -> Self {
        Self {
            id: id.to_string(),
            x_axis_label: "time [s]".to_string(),
            y_axis_label: y_axis_label.to_string(),
            series: Vec::new(),
            sync_group_id: None,
        }
    }

    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(DataSeries::point_count).sum()
    }
}
