//! Converts JSON data units to MessagePack.
//!
//! Numbers are always encoded as 64-bit floats. Input that is not JSON is reported
//! and passed through unconverted.

use mutator::{Transform, TransformError, TransformResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct Json2Msgpack;

impl Json2Msgpack {
    fn convert(input: &[u8]) -> Result<Option<Vec<u8>>, TransformError> {
        let json: serde_json::Value = serde_json::from_slice(input)?;
        let msgpack = convert_value(&json)?;
        let mut output = Vec::with_capacity(input.len());
        rmpv::encode::write_value(&mut output, &msgpack).map_err(TransformError::internal)?;
        Ok(Some(output))
    }
}

impl Transform for Json2Msgpack {
    fn transform(&self, input: &[u8]) -> TransformResult {
        Self::convert(input).into()
    }
}

fn convert_value(value: &serde_json::Value) -> Result<rmpv::Value, TransformError> {
    Ok(match value {
        serde_json::Value::Null => rmpv::Value::Nil,
        serde_json::Value::Bool(b) => rmpv::Value::Boolean(*b),
        serde_json::Value::Number(n) => rmpv::Value::F64(n.as_f64().ok_or_else(|| {
            TransformError::Internal(format!("number {n} is not representable as f64"))
        })?),
        serde_json::Value::String(s) => rmpv::Value::from(s.as_str()),
        serde_json::Value::Array(a) => {
            rmpv::Value::Array(a.iter().map(convert_value).collect::<Result<_, _>>()?)
        }
        serde_json::Value::Object(o) => rmpv::Value::Map(
            o.iter()
                .map(|(k, v)| -> Result<_, TransformError> {
                    Ok((rmpv::Value::from(k.as_str()), convert_value(v)?))
                })
                .collect::<Result<_, _>>()?,
        ),
    })
}

mutator::mutator!(Json2Msgpack);
