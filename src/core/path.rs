use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

/// One backend-agnostic path drawing command.
///
/// Mirrors the subset of vector-path operations the chart geometry needs.
/// Angles and flags follow the SVG elliptical-arc convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        radius_x: f64,
        radius_y: f64,
        x_axis_rotation_deg: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Ordered command sequence describing one drawable path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PathDescriptor {
    commands: Vec<PathCommand>,
}

impl PathDescriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, x: f64, y: f64) {
        self.commands.push(PathCommand::Arc {
            radius_x: radius,
            radius_y: radius,
            x_axis_rotation_deg: 0.0,
            large_arc,
            sweep,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn validate(&self) -> StudioResult<()> {
        for command in &self.commands {
            let finite = match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    x.is_finite() && y.is_finite()
                }
                PathCommand::Arc {
                    radius_x,
                    radius_y,
                    x_axis_rotation_deg,
                    x,
                    y,
                    ..
                } => {
                    radius_x.is_finite()
                        && radius_y.is_finite()
                        && x_axis_rotation_deg.is_finite()
                        && x.is_finite()
                        && y.is_finite()
                }
                PathCommand::Close => true,
            };
            if !finite {
                return Err(StudioError::InvalidData(
                    "path command coordinates must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Formats the path as an SVG `d` attribute string.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match *command {
                PathCommand::MoveTo { x, y } => {
                    out.push_str(&format!("M {x} {y}"));
                }
                PathCommand::LineTo { x, y } => {
                    out.push_str(&format!("L {x} {y}"));
                }
                PathCommand::Arc {
                    radius_x,
                    radius_y,
                    x_axis_rotation_deg,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => {
                    out.push_str(&format!(
                        "A {radius_x} {radius_y} {x_axis_rotation_deg} {} {} {x} {y}",
                        u8::from(large_arc),
                        u8::from(sweep)
                    ));
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}
