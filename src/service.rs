// ABOUTME: The conversion engine - validates requests and computes the missing dimension set
// ABOUTME: Converts input units to millimeters, applies or inverts the scale factor, converts out
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversion engine.
//!
//! Takes input dimensions and generates scaled output dimensions. Since each
//! axis may carry a different measurement unit, input values are converted to
//! millimeters before scaling and converted to the requested output
//! measurement afterwards. The whole computation is pure and stateless; any
//! number of requests may run it concurrently.

use crate::errors::{AppError, AppResult};
use crate::models::{self, Dimension, Dimensions, Measurement, Scale, ScalerData};
use rust_decimal::Decimal;

/// How the millimeter value is combined with the scale factor.
#[derive(Debug, Clone, Copy)]
enum ScaleOp {
    /// Model to full-size: multiply by the factor. Exact, no intermediate
    /// rounding.
    Multiply,
    /// Full-size to model: divide by the factor at the intermediate scale,
    /// half-up.
    Divide,
}

impl ScaleOp {
    /// Division cannot overflow here (the factor is a constant >= 48), but
    /// multiplying an unbounded client value by the factor can.
    fn apply(self, value: Decimal, factor: Decimal) -> AppResult<Decimal> {
        match self {
            Self::Multiply => value.checked_mul(factor).ok_or_else(|| {
                AppError::validation(format!("{value} mm is too large to scale by {factor}."))
            }),
            Self::Divide => Ok(models::divide(value, factor)),
        }
    }
}

/// Stateless conversion service. Construct one per request or share freely;
/// it holds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalerService;

impl ScalerService {
    /// Create the service.
    pub const fn new() -> Self {
        Self
    }

    /// Validate the envelope and fill in the missing dimension set.
    ///
    /// If full-size dimensions are supplied, model dimensions are computed by
    /// dividing each axis by the scale factor; if model dimensions are
    /// supplied, full-size dimensions are computed by multiplying. The
    /// supplied set is echoed exactly as given (its original units, no
    /// re-rounding); only the computed set is expressed in the output
    /// measurement.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the scale or output measurement is
    /// absent, when the envelope does not contain exactly one dimension set,
    /// or when a supplied magnitude is too large to scale.
    pub fn supply_missing_fields(&self, data: ScalerData) -> AppResult<ScalerData> {
        let (scale, output_measurement) = Self::validate(&data)?;

        let (model_dimensions, fullsize_dimensions) = match (
            data.fullsize_dimensions.filter(|d| d.has_value()),
            data.model_dimensions.filter(|d| d.has_value()),
        ) {
            (Some(fullsize), None) => {
                let model = Self::scale_dimensions(
                    output_measurement,
                    scale.factor(),
                    &fullsize,
                    ScaleOp::Divide,
                )?;
                (model, fullsize)
            }
            (None, Some(model)) => {
                let fullsize = Self::scale_dimensions(
                    output_measurement,
                    scale.factor(),
                    &model,
                    ScaleOp::Multiply,
                )?;
                (model, fullsize)
            }
            // validate() already rejected the other two combinations
            _ => {
                return Err(AppError::internal(
                    "dimension set presence changed after validation",
                ))
            }
        };

        Ok(ScalerData {
            scale: Some(scale),
            output_measurement: Some(output_measurement),
            model_dimensions: Some(model_dimensions),
            fullsize_dimensions: Some(fullsize_dimensions),
        })
    }

    /// Validate the envelope. There must be a scale, an output measurement,
    /// and one and only one dimension set.
    fn validate(data: &ScalerData) -> AppResult<(Scale, Measurement)> {
        let scale = data
            .scale
            .ok_or_else(|| AppError::validation("Scale must not be null."))?;
        let output_measurement = data
            .output_measurement
            .ok_or_else(|| AppError::validation("Output measurement must not be null."))?;

        let has_fullsize = data.fullsize_dimensions.is_some_and(|d| d.has_value());
        let has_model = data.model_dimensions.is_some_and(|d| d.has_value());

        if has_fullsize && has_model {
            return Err(AppError::validation(
                "Value to calculate has both full size and model dimensions.",
            ));
        }

        if !has_fullsize && !has_model {
            return Err(AppError::validation(
                "Must supply either full size or model dimensions.",
            ));
        }

        Ok((scale, output_measurement))
    }

    /// Scale each supplied axis independently; an absent axis stays absent.
    fn scale_dimensions(
        output_measurement: Measurement,
        factor: Decimal,
        input: &Dimensions,
        op: ScaleOp,
    ) -> AppResult<Dimensions> {
        Ok(Dimensions::new(
            input
                .length
                .map(|d| Self::scale_dimension(factor, output_measurement, d, op))
                .transpose()?,
            input
                .width
                .map(|d| Self::scale_dimension(factor, output_measurement, d, op))
                .transpose()?,
            input
                .height
                .map(|d| Self::scale_dimension(factor, output_measurement, d, op))
                .transpose()?,
        ))
    }

    /// Scale a single axis: input unit to millimeters, apply the operation,
    /// millimeters to the output measurement. Final rounding to two digits
    /// happens in the [`Dimension`] constructor.
    fn scale_dimension(
        factor: Decimal,
        output_measurement: Measurement,
        dimension: Dimension,
        op: ScaleOp,
    ) -> AppResult<Dimension> {
        let input_millis = dimension.measurement().to_millimeters(dimension.value())?;
        let scaled_millis = op.apply(input_millis, factor)?;

        Ok(Dimension::new(
            output_measurement.from_millimeters(scaled_millis),
            output_measurement,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dim(value: Decimal, measurement: Measurement) -> Option<Dimension> {
        Some(Dimension::new(value, measurement))
    }

    #[test]
    fn fullsize_input_produces_model_dimensions_by_division() {
        let data = ScalerData {
            scale: Some(Scale::Ho),
            output_measurement: Some(Measurement::Cm),
            model_dimensions: None,
            fullsize_dimensions: Some(Dimensions::new(
                dim(dec!(40.00), Measurement::Foot),
                None,
                None,
            )),
        };

        let result = ScalerService::new().supply_missing_fields(data).unwrap();
        let model = result.model_dimensions.unwrap();

        // 40 ft = 12192 mm; / 87.1 = 139.977038 mm; / 10 = 13.997704 cm
        assert_eq!(model.length, dim(dec!(14.00), Measurement::Cm));
    }

    #[test]
    fn model_input_produces_fullsize_dimensions_by_multiplication() {
        let data = ScalerData {
            scale: Some(Scale::Ho),
            output_measurement: Some(Measurement::Foot),
            model_dimensions: Some(Dimensions::new(
                dim(dec!(18.75), Measurement::Cm),
                None,
                None,
            )),
            fullsize_dimensions: None,
        };

        let result = ScalerService::new().supply_missing_fields(data).unwrap();
        let fullsize = result.fullsize_dimensions.unwrap();

        // 18.75 cm = 187.5 mm; * 87.1 = 16331.25 mm; / 304.80 = 53.580217 ft
        assert_eq!(fullsize.length, dim(dec!(53.58), Measurement::Foot));
    }

    #[test]
    fn supplied_set_is_echoed_without_conversion() {
        let fullsize = Dimensions::new(dim(dec!(147.00), Measurement::Inch), None, None);
        let data = ScalerData {
            scale: Some(Scale::Ho),
            output_measurement: Some(Measurement::Cm),
            model_dimensions: None,
            fullsize_dimensions: Some(fullsize),
        };

        let result = ScalerService::new().supply_missing_fields(data).unwrap();

        // Echoed set keeps inches even though the output measurement is cm.
        assert_eq!(result.fullsize_dimensions, Some(fullsize));
    }
}
