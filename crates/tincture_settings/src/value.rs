//! Conversion of raw settings values into color inputs.

use tincture_color::{ColorError, ColorInput, ColorResult};
use toml::Value;

/// Reads a settings value as a color.
///
/// - integer: packed `0xRRGGBBAA`, low 32 bits (negative signed words work)
/// - array of four numbers: channels, byte-scale or normalized
///
/// # Errors
///
/// - [`ColorError::InvalidInput`] for a numeric array whose length is not 4
/// - [`ColorError::Unsupported`] for any other value
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn color_input_from_value(value: &Value) -> ColorResult<ColorInput> {
    match value {
        Value::Integer(word) => Ok(ColorInput::Packed(*word as u32)),
        Value::Array(items) => {
            let channels = items
                .iter()
                .map(|item| match item {
                    Value::Integer(channel) => Ok(*channel as f64),
                    Value::Float(channel) => Ok(*channel),
                    other => Err(ColorError::Unsupported {
                        found: format!("array of {}", other.type_str()),
                    }),
                })
                .collect::<ColorResult<Vec<f64>>>()?;
            ColorInput::try_from(channels.as_slice())
        }
        other => Err(ColorError::Unsupported {
            found: other.type_str().to_string(),
        }),
    }
}
