//! Tags HTTP records with an emoji for their status class.
//!
//! Invoke with a JSON object carrying the status as a string, such as `{"code": "404"}`;
//! the output gains `"status_emoji": "🙁"`. The status is read from the leading
//! digits of the string, so `"404 Not Found"` and `"+200"` are recognized too.
//! Records without a recognizable status are passed through untouched.

use mutator::{Transform, TransformError, TransformResult};
use serde_json::Value;

#[derive(Debug, Default, Clone, Copy)]
pub struct StatusEmoji;

fn emoji_for(code: u16) -> Option<&'static str> {
    match code {
        100..=199 => Some("💬️"),
        200..=299 => Some("🙂"),
        300..=399 => Some("👉"),
        400..=499 => Some("🙁"),
        500..=599 => Some("🤒"),
        _ => None,
    }
}

/// Parse the leading integer of `text`: optional whitespace, an optional sign, then
/// digits up to the first non-digit.
fn leading_status(text: &str) -> Option<u16> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value = unsigned[..end].parse::<u16>().ok()?;
    (!negative || value == 0).then_some(value)
}

impl StatusEmoji {
    fn tag(input: &[u8]) -> Result<Option<Vec<u8>>, TransformError> {
        let mut record: Value = serde_json::from_slice(input)?;
        let Some(object) = record.as_object_mut() else {
            return Ok(None);
        };
        let emoji = object
            .get("code")
            .and_then(Value::as_str)
            .and_then(leading_status)
            .and_then(emoji_for);
        let Some(emoji) = emoji else {
            return Ok(None);
        };
        object.insert("status_emoji".to_string(), emoji.into());
        Ok(Some(serde_json::to_vec(&record)?))
    }
}

impl Transform for StatusEmoji {
    fn transform(&self, input: &[u8]) -> TransformResult {
        Self::tag(input).into()
    }
}

mutator::mutator!(StatusEmoji);
