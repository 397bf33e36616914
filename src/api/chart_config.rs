use serde::{Deserialize, Serialize};

use crate::core::primitives::validate_time_format;
use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartLayout;

/// How `set_data` treats the order of incoming samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataOrdering {
    /// Samples are used as given; out-of-order pairs are only logged.
    #[default]
    AsProvided,
    /// Samples are stably sorted by time before use.
    SortAscending,
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_x_tick_format")]
    pub x_tick_format: String,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_tooltip_date_format")]
    pub tooltip_date_format: String,
    #[serde(default = "default_focus_radius_px")]
    pub focus_radius_px: f64,
    #[serde(default = "default_line_stroke_width_px")]
    pub line_stroke_width_px: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_focus_color")]
    pub focus_color: Color,
    #[serde(default = "default_tooltip_background_color")]
    pub tooltip_background_color: Color,
    #[serde(default)]
    pub data_ordering: DataOrdering,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margins: Margins::default(),
            x_tick_count: default_tick_count(),
            x_tick_format: default_x_tick_format(),
            y_tick_count: default_tick_count(),
            tooltip_date_format: default_tooltip_date_format(),
            focus_radius_px: default_focus_radius_px(),
            line_stroke_width_px: default_line_stroke_width_px(),
            font_size_px: default_font_size_px(),
            line_color: default_line_color(),
            axis_color: default_axis_color(),
            focus_color: default_focus_color(),
            tooltip_background_color: default_tooltip_background_color(),
            data_ordering: DataOrdering::default(),
        }
    }
}

impl LineChartConfig {
    /// Creates a config for a container of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_x_ticks(mut self, count: usize, format: impl Into<String>) -> Self {
        self.x_tick_count = count;
        self.x_tick_format = format.into();
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, count: usize) -> Self {
        self.y_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_tooltip_date_format(mut self, format: impl Into<String>) -> Self {
        self.tooltip_date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_focus_radius_px(mut self, radius: f64) -> Self {
        self.focus_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, stroke_width_px: f64, color: Color) -> Self {
        self.line_stroke_width_px = stroke_width_px;
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_data_ordering(mut self, ordering: DataOrdering) -> Self {
        self.data_ordering = ordering;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        self.margins.validate()?;
        ChartLayout::new(self.viewport(), self.margins)?;
        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick counts must be > 0".to_owned(),
            ));
        }
        validate_time_format(&self.x_tick_format)?;
        validate_time_format(&self.tooltip_date_format)?;
        for (name, value) in [
            ("focus radius", self.focus_radius_px),
            ("line stroke width", self.line_stroke_width_px),
            ("font size", self.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for color in [
            self.line_color,
            self.axis_color,
            self.focus_color,
            self.tooltip_background_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_width() -> u32 {
    700
}

fn default_height() -> u32 {
    400
}

fn default_tick_count() -> usize {
    10
}

fn default_x_tick_format() -> String {
    "%m/%d/%y".to_owned()
}

fn default_tooltip_date_format() -> String {
    "%Y-%m-%d".to_owned()
}

fn default_focus_radius_px() -> f64 {
    5.0
}

fn default_line_stroke_width_px() -> f64 {
    1.5
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_line_color() -> Color {
    Color::STEEL_BLUE
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_focus_color() -> Color {
    Color::STEEL_BLUE
}

fn default_tooltip_background_color() -> Color {
    Color::rgba(1.0, 1.0, 1.0, 0.9)
}
