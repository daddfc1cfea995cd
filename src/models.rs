// ABOUTME: Data model for the scale conversion API - measurements, scales, and dimensions
// ABOUTME: Defines the JSON envelope exchanged with clients and the decimal rounding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Measurements, scales, dimensions, and the request/response envelope.
//!
//! Every value object here is immutable once constructed. Dimension values
//! are rounded to [`OUTPUT_SCALE`] fractional digits (half-up) at
//! construction time, which is the only rounding the echoed input set ever
//! receives.

use crate::errors::AppError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional digits in data returned by the application.
pub const OUTPUT_SCALE: u32 = 2;

/// Number of fractional digits carried by intermediate operations (division).
pub const INTERMEDIATE_SCALE: u32 = 6;

const MILLIMETERS_PER_CENTIMETER: Decimal = dec!(10);
const MILLIMETERS_PER_INCH: Decimal = dec!(25.40);
const MILLIMETERS_PER_FOOT: Decimal = dec!(304.80);

/// Divide at [`INTERMEDIATE_SCALE`], rounding half-up. Keeps non-terminating
/// quotients (e.g. mm to inches) at a fixed precision.
pub(crate) fn divide(dividend: Decimal, divisor: Decimal) -> Decimal {
    (dividend / divisor)
        .round_dp_with_strategy(INTERMEDIATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// The closed set of measurement units accepted for input and output
/// dimensions. Each unit carries a fixed, exact conversion factor to
/// millimeters; the conversion paths in the service depend on this set, so a
/// new unit cannot be added here without extending those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Inches
    Inch,
    /// Feet
    Foot,
}

impl Measurement {
    /// Resolve a measurement by name, ignoring case. Unrecognized names fail
    /// with an invalid-measurement error.
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.to_ascii_uppercase().as_str() {
            "MM" => Ok(Self::Mm),
            "CM" => Ok(Self::Cm),
            "INCH" => Ok(Self::Inch),
            "FOOT" => Ok(Self::Foot),
            _ => Err(AppError::invalid_measurement(name)),
        }
    }

    /// Canonical wire name of this measurement.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mm => "MM",
            Self::Cm => "CM",
            Self::Inch => "INCH",
            Self::Foot => "FOOT",
        }
    }

    /// Short display abbreviation ("mm", "cm", "in", "ft").
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }

    /// Exact number of millimeters per one of this unit.
    pub const fn millimeter_factor(self) -> Decimal {
        match self {
            Self::Mm => Decimal::ONE,
            Self::Cm => MILLIMETERS_PER_CENTIMETER,
            Self::Inch => MILLIMETERS_PER_INCH,
            Self::Foot => MILLIMETERS_PER_FOOT,
        }
    }

    /// Convert a value in this unit to millimeters. An exact multiply; no
    /// rounding beyond the decimal's natural precision.
    ///
    /// # Errors
    ///
    /// Fails when the product exceeds the decimal range; a parseable value
    /// can still be too large to convert.
    pub fn to_millimeters(self, value: Decimal) -> Result<Decimal, AppError> {
        value
            .checked_mul(self.millimeter_factor())
            .ok_or_else(|| AppError::validation(format!("{value} {self} is too large to scale.")))
    }

    /// Convert a millimeter value to this unit, dividing at
    /// [`INTERMEDIATE_SCALE`] half-up.
    pub fn from_millimeters(self, millis: Decimal) -> Decimal {
        match self {
            Self::Mm => millis,
            unit => divide(millis, unit.millimeter_factor()),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(de::Error::custom)
    }
}

/// The named scales recognized by the application. The factor is the number
/// of full-size units represented by one model unit (HO is 1:87.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// O scale, 1:48
    O,
    /// S scale, 1:64
    S,
    /// OO scale, 1:76
    Oo,
    /// HO scale, 1:87.1
    Ho,
    /// TT scale, 1:120
    Tt,
    /// N scale, 1:160
    N,
    /// Z scale, 1:220
    Z,
}

impl Scale {
    /// Resolve a scale by name, ignoring case. Unrecognized names fail with
    /// an invalid-scale error.
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.to_ascii_uppercase().as_str() {
            "O" => Ok(Self::O),
            "S" => Ok(Self::S),
            "OO" => Ok(Self::Oo),
            "HO" => Ok(Self::Ho),
            "TT" => Ok(Self::Tt),
            "N" => Ok(Self::N),
            "Z" => Ok(Self::Z),
            _ => Err(AppError::invalid_scale(name)),
        }
    }

    /// Canonical wire name of this scale.
    pub const fn name(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::S => "S",
            Self::Oo => "OO",
            Self::Ho => "HO",
            Self::Tt => "TT",
            Self::N => "N",
            Self::Z => "Z",
        }
    }

    /// Full-size units per model unit. Strictly positive.
    pub const fn factor(self) -> Decimal {
        match self {
            Self::O => dec!(48),
            Self::S => dec!(64),
            Self::Oo => dec!(76),
            Self::Ho => dec!(87.1),
            Self::Tt => dec!(120),
            Self::N => dec!(160),
            Self::Z => dec!(220),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(de::Error::custom)
    }
}

/// A magnitude paired with its measurement unit. Each axis of a
/// [`Dimensions`] set may use a different unit.
///
/// The value is rounded to [`OUTPUT_SCALE`] fractional digits (half-up) at
/// construction, so two dimensions compare equal whenever their rounded
/// values and units match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    value: Decimal,
    measurement: Measurement,
}

impl Dimension {
    /// Construct a dimension, rounding the value to [`OUTPUT_SCALE`]
    /// fractional digits half-up.
    pub fn new(value: Decimal, measurement: Measurement) -> Self {
        Self {
            value: value
                .round_dp_with_strategy(OUTPUT_SCALE, RoundingStrategy::MidpointAwayFromZero),
            measurement,
        }
    }

    /// The rounded magnitude.
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The unit of the magnitude.
    pub const fn measurement(&self) -> Measurement {
        self.measurement
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.measurement)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Values are rendered as decimal strings with exactly two fractional
        // digits, e.g. {"value": "14.00", "measurement": "CM"}.
        let mut state = serializer.serialize_struct("Dimension", 2)?;
        state.serialize_field("value", &format!("{:.2}", self.value))?;
        state.serialize_field("measurement", &self.measurement)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            value: Option<RawValue>,
            #[serde(default)]
            measurement: Option<Measurement>,
        }

        /// Accepts the magnitude as either a JSON string or a JSON number.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawValue {
            Text(String),
            Number(serde_json::Number),
        }

        let raw = Raw::deserialize(deserializer)?;
        let value = raw
            .value
            .ok_or_else(|| de::Error::custom("Size must not be null."))?;
        let measurement = raw
            .measurement
            .ok_or_else(|| de::Error::custom("Measurement must not be null."))?;

        let text = match value {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
        };
        let value = text
            .trim()
            .parse::<Decimal>()
            .map_err(|_| de::Error::custom(format!("{text} is not a valid decimal value.")))?;

        Ok(Self::new(value, measurement))
    }
}

/// An optional triple of length, width, and height. A set with all three
/// axes absent counts as "not present" for the request contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length axis, if supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Dimension>,
    /// Width axis, if supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height axis, if supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

impl Dimensions {
    /// Construct a dimension set from its three axes.
    pub const fn new(
        length: Option<Dimension>,
        width: Option<Dimension>,
        height: Option<Dimension>,
    ) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// A set is present when at least one axis is supplied.
    pub const fn has_value(&self) -> bool {
        self.length.is_some() || self.width.is_some() || self.height.is_some()
    }
}

/// The envelope that shuttles data between the client and the service. A
/// client POSTs either the model or the full-size dimensions filled in; the
/// conversion service supplies the other set and returns the completed
/// envelope.
///
/// `scale` and `output_measurement` are required by the engine but optional
/// here so that a missing field reaches validation (and a 400 response)
/// rather than failing JSON binding with a less specific message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalerData {
    /// The named scale to apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    /// The unit in which computed dimensions are expressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_measurement: Option<Measurement>,
    /// Dimensions of the scaled-down model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_dimensions: Option<Dimensions>,
    /// Dimensions of the full-size prototype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullsize_dimensions: Option<Dimensions>,
}

impl fmt::Display for ScalerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ScalerData:")?;
        match self.scale {
            Some(scale) => writeln!(f, "   Scale={scale}")?,
            None => writeln!(f, "   Scale=none")?,
        }
        match self.output_measurement {
            Some(unit) => writeln!(f, "   Output={unit}")?,
            None => writeln!(f, "   Output=none")?,
        }
        writeln!(f, "   Model {:?}", self.model_dimensions)?;
        write!(f, "   Full Size {:?}", self.fullsize_dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_lookup_is_case_insensitive() {
        assert_eq!(Measurement::from_name("mm").unwrap(), Measurement::Mm);
        assert_eq!(Measurement::from_name("Inch").unwrap(), Measurement::Inch);
        assert_eq!(Measurement::from_name("FOOT").unwrap(), Measurement::Foot);
        assert_eq!(Measurement::from_name("cM").unwrap(), Measurement::Cm);
    }

    #[test]
    fn unknown_measurement_is_rejected() {
        assert!(Measurement::from_name("YARD").is_err());
        assert!(Measurement::from_name("").is_err());
    }

    #[test]
    fn scale_lookup_is_case_insensitive() {
        assert_eq!(Scale::from_name("hO").unwrap(), Scale::Ho);
        assert_eq!(Scale::from_name("oo").unwrap(), Scale::Oo);
        assert_eq!(Scale::from_name("z").unwrap(), Scale::Z);
    }

    #[test]
    fn unknown_scale_is_rejected() {
        assert!(Scale::from_name("bogus").is_err());
        assert!(Scale::from_name("H0").is_err());
    }

    #[test]
    fn scale_factors_match_the_published_ratios() {
        assert_eq!(Scale::O.factor(), dec!(48));
        assert_eq!(Scale::S.factor(), dec!(64));
        assert_eq!(Scale::Oo.factor(), dec!(76));
        assert_eq!(Scale::Ho.factor(), dec!(87.1));
        assert_eq!(Scale::Tt.factor(), dec!(120));
        assert_eq!(Scale::N.factor(), dec!(160));
        assert_eq!(Scale::Z.factor(), dec!(220));
    }

    #[test]
    fn dimension_rounds_half_up_on_construction() {
        let dim = Dimension::new(dec!(4.285), Measurement::Cm);
        assert_eq!(dim.value(), dec!(4.29));

        let dim = Dimension::new(dec!(4.284), Measurement::Cm);
        assert_eq!(dim.value(), dec!(4.28));
    }

    #[test]
    fn dimensions_are_equal_after_rounding() {
        let left = Dimension::new(dec!(12.504), Measurement::Inch);
        let right = Dimension::new(dec!(12.5), Measurement::Inch);
        assert_eq!(left, right);
    }

    #[test]
    fn to_millimeters_rejects_magnitudes_that_overflow() {
        let error = Measurement::Foot.to_millimeters(Decimal::MAX).unwrap_err();
        assert_eq!(error.http_status(), 400);

        assert_eq!(
            Measurement::Mm.to_millimeters(Decimal::MAX).unwrap(),
            Decimal::MAX
        );
    }

    #[test]
    fn from_millimeters_divides_at_intermediate_scale() {
        // 100 mm / 25.40 = 3.937007874... carried at six digits half-up
        let inches = Measurement::Inch.from_millimeters(dec!(100));
        assert_eq!(inches, dec!(3.937008));
    }

    #[test]
    fn dimension_serializes_with_two_fractional_digits() {
        let dim = Dimension::new(dec!(14), Measurement::Cm);
        let json = serde_json::to_value(dim).unwrap();
        assert_eq!(json["value"], "14.00");
        assert_eq!(json["measurement"], "CM");
    }

    #[test]
    fn dimension_accepts_string_or_number_values() {
        let from_string: Dimension =
            serde_json::from_str(r#"{"value": "12.50", "measurement": "FOOT"}"#).unwrap();
        let from_number: Dimension =
            serde_json::from_str(r#"{"value": 12.5, "measurement": "foot"}"#).unwrap();
        assert_eq!(from_string, from_number);
    }

    #[test]
    fn dimension_requires_value_and_measurement() {
        let missing_value = serde_json::from_str::<Dimension>(r#"{"measurement": "MM"}"#);
        assert!(missing_value.is_err());

        let missing_measurement = serde_json::from_str::<Dimension>(r#"{"value": "1.0"}"#);
        assert!(missing_measurement.is_err());

        let null_value =
            serde_json::from_str::<Dimension>(r#"{"value": null, "measurement": "MM"}"#);
        assert!(null_value.is_err());
    }

    #[test]
    fn absent_axes_are_omitted_from_json() {
        let dims = Dimensions::new(Some(Dimension::new(dec!(5), Measurement::Foot)), None, None);
        let json = serde_json::to_value(dims).unwrap();
        assert!(json.get("length").is_some());
        assert!(json.get("width").is_none());
        assert!(json.get("height").is_none());
    }

    #[test]
    fn empty_dimension_set_is_not_present() {
        assert!(!Dimensions::default().has_value());
        let one_axis = Dimensions::new(None, Some(Dimension::new(dec!(1), Measurement::Mm)), None);
        assert!(one_axis.has_value());
    }
}
