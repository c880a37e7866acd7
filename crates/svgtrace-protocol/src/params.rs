//! Vectorization parameters and their form encoding.
//!
//! [`TraceParams`] is the single source of truth for the six tunable
//! parameters. Controls render from it, write back into it through
//! [`TraceParams::apply_field`], and the update request is built from
//! [`TraceParams::form_fields`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Form field that marks a request as a parameter update rather than an
/// upload.
pub const UPDATE_FIELD: (&str, &str) = ("update", "true");

/// Errors produced when a raw control value cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    /// The value could not be parsed as the field's type.
    #[error("invalid value {value:?} for {field}")]
    InvalidValue {
        /// Form name of the field.
        field: &'static str,
        /// The raw value as read from the control.
        value: String,
    },

    /// Adaptive thresholding needs an odd neighborhood size.
    #[error("threshold block size must be odd, got {0}")]
    EvenBlockSize(u32),

    /// Colors must be `#RRGGBB`.
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

/// A `#RRGGBB` color as produced by an `<input type="color">`.
///
/// The original text is preserved so that the value sent to the server
/// is exactly what the picker reported (browsers report lowercase, the
/// defaults are uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#RRGGBB` color, accepting either letter case.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidColor`] if `text` is not a `#`
    /// followed by exactly six hex digits.
    pub fn parse(text: &str) -> Result<Self, ParamError> {
        let valid = text
            .strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if valid {
            Ok(Self(text.to_owned()))
        } else {
            Err(ParamError::InvalidColor(text.to_owned()))
        }
    }

    /// White, the default stroke color.
    #[must_use]
    pub fn white() -> Self {
        Self("#FFFFFF".to_owned())
    }

    /// Black, the default background color.
    #[must_use]
    pub fn black() -> Self {
        Self("#000000".to_owned())
    }

    /// The color text as it will be submitted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for one tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    /// Minimum traced-contour length in pixels.
    MinContourLen,
    /// SVG stroke width.
    StrokeWidth,
    /// Adaptive threshold neighborhood size (odd).
    ThresholdBlockSize,
    /// Constant subtracted from the adaptive threshold's weighted mean.
    ThresholdC,
    /// SVG stroke color.
    StrokeColor,
    /// SVG background color.
    BackgroundColor,
}

/// Range and formatting for a numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    /// Smallest selectable value.
    pub min: f64,
    /// Largest selectable value.
    pub max: f64,
    /// Slider increment.
    pub step: f64,
}

impl ParamField {
    /// All fields in submission order.
    pub const ALL: [Self; 6] = [
        Self::MinContourLen,
        Self::StrokeWidth,
        Self::ThresholdBlockSize,
        Self::ThresholdC,
        Self::StrokeColor,
        Self::BackgroundColor,
    ];

    /// Numeric fields, rendered as sliders.
    pub const SLIDERS: [Self; 4] = [
        Self::MinContourLen,
        Self::StrokeWidth,
        Self::ThresholdBlockSize,
        Self::ThresholdC,
    ];

    /// Color fields, rendered as color pickers.
    pub const COLORS: [Self; 2] = [Self::StrokeColor, Self::BackgroundColor];

    /// Name of the field in the update request, also used as the
    /// control's element id.
    #[must_use]
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::MinContourLen => "minContourLen",
            Self::StrokeWidth => "strokeWidth",
            Self::ThresholdBlockSize => "thresholdBlockSize",
            Self::ThresholdC => "thresholdC",
            Self::StrokeColor => "strokeColor",
            Self::BackgroundColor => "backgroundColor",
        }
    }

    /// Human-readable control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinContourLen => "Min Contour Length",
            Self::StrokeWidth => "Stroke Width",
            Self::ThresholdBlockSize => "Threshold Block Size",
            Self::ThresholdC => "Threshold Constant",
            Self::StrokeColor => "Stroke Color",
            Self::BackgroundColor => "Background Color",
        }
    }

    /// Short help text shown under the control.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MinContourLen => "Contours with fewer points than this are dropped.",
            Self::StrokeWidth => "Width of the traced outlines.",
            Self::ThresholdBlockSize => "Neighborhood size for adaptive binarization.",
            Self::ThresholdC => "Subtracted from the neighborhood mean before thresholding.",
            Self::StrokeColor => "Color of the traced outlines.",
            Self::BackgroundColor => "Fill behind the outlines.",
        }
    }

    /// Slider range for numeric fields, `None` for colors.
    #[must_use]
    pub const fn slider(self) -> Option<SliderSpec> {
        match self {
            Self::MinContourLen => Some(SliderSpec {
                min: 0.0,
                max: 200.0,
                step: 1.0,
            }),
            Self::StrokeWidth => Some(SliderSpec {
                min: 0.1,
                max: 10.0,
                step: 0.1,
            }),
            Self::ThresholdBlockSize => Some(SliderSpec {
                min: 3.0,
                max: 99.0,
                step: 2.0,
            }),
            Self::ThresholdC => Some(SliderSpec {
                min: -20.0,
                max: 20.0,
                step: 1.0,
            }),
            Self::StrokeColor | Self::BackgroundColor => None,
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full set of vectorization parameters sent with an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceParams {
    /// Minimum traced-contour length in pixels.
    pub min_contour_len: u32,
    /// SVG stroke width.
    pub stroke_width: f64,
    /// Adaptive threshold neighborhood size. Always odd.
    pub threshold_block_size: u32,
    /// Adaptive threshold constant.
    pub threshold_c: i32,
    /// SVG stroke color.
    pub stroke_color: HexColor,
    /// SVG background color.
    pub background_color: HexColor,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            min_contour_len: 10,
            stroke_width: 1.0,
            threshold_block_size: 11,
            threshold_c: 2,
            stroke_color: HexColor::white(),
            background_color: HexColor::black(),
        }
    }
}

impl TraceParams {
    /// The value of `field` as submitted in the update form.
    #[must_use]
    pub fn form_value(&self, field: ParamField) -> String {
        match field {
            ParamField::MinContourLen => self.min_contour_len.to_string(),
            ParamField::StrokeWidth => self.stroke_width.to_string(),
            ParamField::ThresholdBlockSize => self.threshold_block_size.to_string(),
            ParamField::ThresholdC => self.threshold_c.to_string(),
            ParamField::StrokeColor => self.stroke_color.to_string(),
            ParamField::BackgroundColor => self.background_color.to_string(),
        }
    }

    /// Text for the value label next to a control.
    ///
    /// Stroke width always shows one decimal so the default reads
    /// `1.0` rather than `1`.
    #[must_use]
    pub fn display_value(&self, field: ParamField) -> String {
        match field {
            ParamField::StrokeWidth => format!("{:.1}", self.stroke_width),
            other => self.form_value(other),
        }
    }

    /// Slider position for a numeric field.
    ///
    /// Returns `None` for color fields.
    #[must_use]
    pub fn slider_value(&self, field: ParamField) -> Option<f64> {
        match field {
            ParamField::MinContourLen => Some(f64::from(self.min_contour_len)),
            ParamField::StrokeWidth => Some(self.stroke_width),
            ParamField::ThresholdBlockSize => Some(f64::from(self.threshold_block_size)),
            ParamField::ThresholdC => Some(f64::from(self.threshold_c)),
            ParamField::StrokeColor | ParamField::BackgroundColor => None,
        }
    }

    /// The complete update form: the `update` marker followed by every
    /// parameter in [`ParamField::ALL`] order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        std::iter::once((UPDATE_FIELD.0, UPDATE_FIELD.1.to_owned()))
            .chain(
                ParamField::ALL
                    .into_iter()
                    .map(|f| (f.form_name(), self.form_value(f))),
            )
            .collect()
    }

    /// Set one field from the raw string value of its control.
    ///
    /// Range inputs report integers as `"10"` and floats as `"1.5"`;
    /// color inputs report `"#rrggbb"`. On error the parameters are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if `raw` does not parse as the field's
    /// type, if the block size is even, or if a color is malformed.
    pub fn apply_field(&mut self, field: ParamField, raw: &str) -> Result<(), ParamError> {
        let raw = raw.trim();
        let invalid = || ParamError::InvalidValue {
            field: field.form_name(),
            value: raw.to_owned(),
        };
        match field {
            ParamField::MinContourLen => {
                self.min_contour_len = raw.parse().map_err(|_| invalid())?;
            }
            ParamField::StrokeWidth => {
                let v: f64 = raw.parse().map_err(|_| invalid())?;
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid());
                }
                self.stroke_width = v;
            }
            ParamField::ThresholdBlockSize => {
                let v: u32 = raw.parse().map_err(|_| invalid())?;
                if v % 2 == 0 {
                    return Err(ParamError::EvenBlockSize(v));
                }
                self.threshold_block_size = v;
            }
            ParamField::ThresholdC => {
                self.threshold_c = raw.parse().map_err(|_| invalid())?;
            }
            ParamField::StrokeColor => self.stroke_color = HexColor::parse(raw)?,
            ParamField::BackgroundColor => self.background_color = HexColor::parse(raw)?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_defaults() {
        let p = TraceParams::default();
        assert_eq!(p.min_contour_len, 10);
        assert!((p.stroke_width - 1.0).abs() < f64::EPSILON);
        assert_eq!(p.threshold_block_size, 11);
        assert_eq!(p.threshold_c, 2);
        assert_eq!(p.stroke_color.as_str(), "#FFFFFF");
        assert_eq!(p.background_color.as_str(), "#000000");
    }

    #[test]
    fn default_labels() {
        let p = TraceParams::default();
        assert_eq!(p.display_value(ParamField::MinContourLen), "10");
        assert_eq!(p.display_value(ParamField::StrokeWidth), "1.0");
        assert_eq!(p.display_value(ParamField::ThresholdBlockSize), "11");
        assert_eq!(p.display_value(ParamField::ThresholdC), "2");
    }

    #[test]
    fn form_fields_start_with_update_marker() {
        let fields = TraceParams::default().form_fields();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], ("update", "true".to_owned()));
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "update",
                "minContourLen",
                "strokeWidth",
                "thresholdBlockSize",
                "thresholdC",
                "strokeColor",
                "backgroundColor",
            ]
        );
    }

    #[test]
    fn form_fields_carry_current_values() {
        let mut p = TraceParams::default();
        p.apply_field(ParamField::StrokeWidth, "2.5").unwrap();
        p.apply_field(ParamField::ThresholdC, "-4").unwrap();
        p.apply_field(ParamField::StrokeColor, "#ff8800").unwrap();
        let fields = p.form_fields();
        assert!(fields.contains(&("strokeWidth", "2.5".to_owned())));
        assert!(fields.contains(&("thresholdC", "-4".to_owned())));
        assert!(fields.contains(&("strokeColor", "#ff8800".to_owned())));
        assert!(fields.contains(&("backgroundColor", "#000000".to_owned())));
    }

    #[test]
    fn apply_field_rejects_garbage_and_keeps_value() {
        let mut p = TraceParams::default();
        let err = p.apply_field(ParamField::MinContourLen, "abc").unwrap_err();
        assert_eq!(
            err,
            ParamError::InvalidValue {
                field: "minContourLen",
                value: "abc".to_owned()
            }
        );
        assert_eq!(p.min_contour_len, 10);
    }

    #[test]
    fn apply_field_rejects_even_block_size() {
        let mut p = TraceParams::default();
        assert_eq!(
            p.apply_field(ParamField::ThresholdBlockSize, "12"),
            Err(ParamError::EvenBlockSize(12))
        );
        p.apply_field(ParamField::ThresholdBlockSize, "13").unwrap();
        assert_eq!(p.threshold_block_size, 13);
    }

    #[test]
    fn apply_field_rejects_negative_stroke_width() {
        let mut p = TraceParams::default();
        assert!(p.apply_field(ParamField::StrokeWidth, "-1").is_err());
        assert!(p.apply_field(ParamField::StrokeWidth, "NaN").is_err());
    }

    #[test]
    fn hex_color_parsing() {
        assert!(HexColor::parse("#A1b2C3").is_ok());
        assert!(HexColor::parse("A1B2C3").is_err());
        assert!(HexColor::parse("#FFF").is_err());
        assert!(HexColor::parse("#GGGGGG").is_err());
        assert_eq!(HexColor::parse("#abcdef").unwrap().as_str(), "#abcdef");
    }

    #[test]
    fn hex_color_serde_validates() {
        let c: HexColor = serde_json::from_str("\"#123456\"").unwrap();
        assert_eq!(c.as_str(), "#123456");
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }

    #[test]
    fn sliders_cover_defaults() {
        let p = TraceParams::default();
        for field in ParamField::SLIDERS {
            let spec = field.slider().unwrap();
            let v = p.slider_value(field).unwrap();
            assert!(spec.min <= v && v <= spec.max, "{field} default outside range");
        }
        for field in ParamField::COLORS {
            assert!(field.slider().is_none());
            assert!(p.slider_value(field).is_none());
        }
    }
}
