use serde::{Deserialize, Serialize};

use crate::core::{ArcSegmentGeometry, BarGeometry, PathGeometry, Point};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidStyle(format!(
                "color `{input}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |offset: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[offset..offset + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidStyle(format!("color `{input}` is not hex")))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if byte(self.alpha) == u8::MAX {
            rgb
        } else {
            format!("{rgb}{:02X}", byte(self.alpha))
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Horizontal text alignment relative to the label anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Stroked smoothed line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    /// Channel the line was built from, e.g. `this_week`.
    pub channel: String,
    pub geometry: PathGeometry,
    pub stroke_width: f64,
    pub color: Color,
}

/// Stroked donut arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub geometry: ArcSegmentGeometry,
    pub color: Color,
}

/// Filled rectangle with optional rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub geometry: BarGeometry,
    pub corner_radius: f64,
    pub color: Color,
}

/// Text anchored at a pixel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub text: String,
    pub anchor: Point,
    pub align: TextAlign,
    pub font_size_px: f64,
    pub color: Color,
}

/// One drawable item of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Path(PathPrimitive),
    Arc(ArcPrimitive),
    Rect(RectPrimitive),
    Label(LabelPrimitive),
}

impl Primitive {
    /// Returns `true` for primitives that encode data values rather than
    /// annotations.
    #[must_use]
    pub fn is_data(&self) -> bool {
        !matches!(self, Self::Label(_))
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Path(path) => {
                if path
                    .geometry
                    .segments
                    .iter()
                    .any(|segment| !segment.anchor().is_finite())
                    || path.geometry.control_points().iter().any(|p| !p.is_finite())
                {
                    return Err(ChartError::InvalidData(
                        "path coordinates must be finite".to_owned(),
                    ));
                }
                validate_stroke(path.stroke_width, "path")?;
                path.color.validate()
            }
            Self::Arc(arc) => {
                let geometry = arc.geometry;
                if !geometry.center.is_finite()
                    || !geometry.start.is_finite()
                    || !geometry.end.is_finite()
                    || !geometry.radius.is_finite()
                    || geometry.radius <= 0.0
                {
                    return Err(ChartError::InvalidData(
                        "arc center/endpoints must be finite and radius > 0".to_owned(),
                    ));
                }
                validate_stroke(geometry.stroke_width, "arc")?;
                arc.color.validate()
            }
            Self::Rect(rect) => {
                let geometry = rect.geometry;
                if [geometry.x, geometry.y, geometry.width, geometry.height]
                    .iter()
                    .any(|value| !value.is_finite())
                    || geometry.width < 0.0
                    || geometry.height < 0.0
                {
                    return Err(ChartError::InvalidData(
                        "rect must be finite with non-negative size".to_owned(),
                    ));
                }
                if !rect.corner_radius.is_finite() || rect.corner_radius < 0.0 {
                    return Err(ChartError::InvalidData(
                        "rect corner radius must be finite and >= 0".to_owned(),
                    ));
                }
                rect.color.validate()
            }
            Self::Label(label) => {
                if label.text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "label text must not be empty".to_owned(),
                    ));
                }
                if !label.anchor.is_finite() {
                    return Err(ChartError::InvalidData(
                        "label anchor must be finite".to_owned(),
                    ));
                }
                if !label.font_size_px.is_finite() || label.font_size_px <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "font size must be finite and > 0".to_owned(),
                    ));
                }
                label.color.validate()
            }
        }
    }
}

fn validate_stroke(stroke_width: f64, owner: &str) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{owner} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_with_and_without_alpha() {
        let opaque = Color::from_hex("#FF8000").expect("opaque");
        assert_eq!(opaque.red, 1.0);
        assert_eq!(opaque.blue, 0.0);
        assert_eq!(opaque.alpha, 1.0);
        assert_eq!(opaque.to_hex(), "#FF8000");

        let translucent = Color::from_hex("00000080").expect("translucent");
        assert_eq!(translucent.to_hex(), "#00000080");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }
}
