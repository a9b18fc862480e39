pub mod bar_chart;
pub mod line_chart;
pub mod palette;
pub mod path;
pub mod pie_chart;
pub mod types;

pub use bar_chart::{BarGeometry, project_bar_geometry};
pub use line_chart::{
    GRIDLINE_RATIOS, Gridline, LineGeometry, LineVertex, project_line_geometry,
};
pub use palette::Palette;
pub use path::{PathCommand, PathDescriptor};
pub use pie_chart::{
    LABEL_VISIBILITY_THRESHOLD_PCT, LabelAnchor, PieSlice, project_pie_geometry,
};
pub use types::{CanvasSpec, ChartPoint, PieLayout, PointId, ValueRange};
