use serde::{Deserialize, Serialize};

use crate::core::{CanvasSpec, Palette, PieLayout};
use crate::error::{StudioError, StudioResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub canvas: CanvasSpec,
    #[serde(default)]
    pub pie: PieLayout,
    #[serde(default)]
    pub palette: Palette,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line-chart canvas dimensions.
    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasSpec) -> Self {
        self.canvas = canvas;
        self
    }

    /// Sets the pie-chart layout.
    #[must_use]
    pub fn with_pie_layout(mut self, pie: PieLayout) -> Self {
        self.pie = pie;
        self
    }

    /// Sets the series color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> StudioResult<()> {
        self.canvas.validate()?;
        self.pie.validate()?;
        if self.palette.is_empty() {
            return Err(StudioError::InvalidData(
                "palette must contain at least one color token".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> StudioResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StudioError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> StudioResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StudioError::InvalidData(format!("failed to parse config: {e}")))
    }
}
