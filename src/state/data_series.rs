use crate::data::series::Series;

/// Line colors, in the order the chart panels assign them.
pub const COLOR_PALETTE: [[u8; 4]; 4] = [
    [220, 40, 40, 255],  // Red
    [40, 90, 220, 255],  // Blue
    [40, 170, 60, 255],  // Green
    [220, 200, 30, 255], // Yellow
];

pub fn color_for_index(index: usize) -> [u8; 4] {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}

/// A series prepared for drawing: points are built once, not every frame.
#[derive(Debug, Clone)]
pub struct DataSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub color: [u8; 4],
    /// Line width for this series (pixels).
    pub line_width: f32,
}

impl DataSeries {
    pub fn from_series(series: &Series, color: [u8; 4]) -> Self {
        Self {
            label: series.label.clone(),
            points: series.plot_points(),
            color,
            line_width: 1.5,
        }
    }

    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], self.color[3])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
