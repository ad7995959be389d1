//! Style descriptors handed to the renderer together with the geometry.

use serde::{Deserialize, Serialize};

use crate::Color;

/// Renders a contour as a line of fixed width.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Color of the line.
    pub color: Color,
    /// Width of the line in pixels.
    pub width: f64,
}

impl LineStyle {
    /// Creates a new instance.
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(Color::CYAN, 3.0)
    }
}

/// Shape hint for point markers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    /// Screen-space filled circle with an outline.
    #[default]
    Disc,
    /// Camera-facing image quad (e.g. a photo).
    Billboard,
}

/// Style of a point marker.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Fill color.
    pub color: Color,
    /// Size of the marker in pixels.
    pub size: f64,
    /// Outline color.
    pub edge_color: Color,
    /// Shape of the marker.
    pub symbol: MarkerSymbol,
}

impl MarkerStyle {
    /// Disc marker of the given color and size with a white outline.
    pub fn disc(color: Color, size: f64) -> Self {
        Self {
            color,
            size,
            edge_color: Color::WHITE,
            symbol: MarkerSymbol::Disc,
        }
    }

    /// Billboard marker of the given color and size with a white outline.
    pub fn billboard(color: Color, size: f64) -> Self {
        Self {
            symbol: MarkerSymbol::Billboard,
            ..Self::disc(color, size)
        }
    }
}

/// Style of an extruded polygon wireframe.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    /// Ring on the base sphere.
    pub base: LineStyle,
    /// Ring on the raised sphere.
    pub top: LineStyle,
    /// Edges connecting base and top vertices.
    pub edges: LineStyle,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            base: LineStyle::new(Color::DARK_BLUE, 3.0),
            top: LineStyle::new(Color::BLUE, 4.0),
            edges: LineStyle::new(Color::CYAN, 3.0),
        }
    }
}
