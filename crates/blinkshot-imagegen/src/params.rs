use serde_json::Value;

use crate::{
    error::{ImageGenError, Result},
    types::ImageRequest,
};

/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1-schnell";

const DEFAULT_STEPS: i64 = 3;
const DEFAULT_WIDTH: i64 = 1024;
const DEFAULT_HEIGHT: i64 = 768;

const MIN_STEPS: i64 = 1;
const MAX_STEPS: i64 = 8;

/// FLUX accepts dimensions between 512 and 1344, in multiples of 64
const MIN_DIMENSION: i64 = 512;
const MAX_DIMENSION: i64 = 1344;
const DIMENSION_MULTIPLE: i64 = 64;

/// Validated and normalized generation parameters
///
/// Invariants: `steps` is within [1, 8]; `width` and `height` are
/// multiples of 64 within [512, 1344]; `prompt` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    pub prompt: String,
    pub model: String,
    pub steps: i64,
    pub width: i64,
    pub height: i64,
    pub seed: Option<i64>,
}

impl GenerationParams {
    /// Validate and normalize an incoming request
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when the prompt is missing, not a
    /// string, or empty
    pub fn from_request(request: &ImageRequest, default_model: &str) -> Result<Self> {
        let prompt = request
            .prompt
            .as_ref()
            .and_then(Value::as_str)
            .filter(|prompt| !prompt.is_empty())
            .ok_or_else(|| {
                ImageGenError::InvalidRequest("Prompt is required and must be a string".to_owned())
            })?;

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| default_model.to_owned());

        Ok(Self {
            prompt: prompt.to_owned(),
            model,
            steps: coerce_integer(request.steps.as_ref(), DEFAULT_STEPS).clamp(MIN_STEPS, MAX_STEPS),
            width: normalize_dimension(coerce_integer(request.width.as_ref(), DEFAULT_WIDTH)),
            height: normalize_dimension(coerce_integer(request.height.as_ref(), DEFAULT_HEIGHT)),
            seed: request.seed,
        })
    }
}

/// Coerce a JSON value to an integer, substituting `default` when the
/// value is missing or not numeric
///
/// A JSON number is truncated toward zero; a JSON string is parsed as
/// an integer after trimming. Everything else takes the default.
#[allow(clippy::cast_possible_truncation)]
fn coerce_integer(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64))
            .unwrap_or(default),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Clamp a dimension to [512, 1344], then round to the nearest multiple
/// of 64, ties rounding half away from zero
///
/// Both range bounds are themselves multiples of 64, so the result
/// never escapes the range.
fn normalize_dimension(value: i64) -> i64 {
    let clamped = value.clamp(MIN_DIMENSION, MAX_DIMENSION);
    (clamped + DIMENSION_MULTIPLE / 2) / DIMENSION_MULTIPLE * DIMENSION_MULTIPLE
}
