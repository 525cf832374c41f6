//! Expands nginx access log lines into structured fields.
//!
//! Invoke with a JSON object whose `message` is a line in nginx's combined log format.
//! Each part of the line that matched is added to the object as a top-level string
//! field; `time` becomes a Unix timestamp when it parses. Records without a parsable
//! `message` are passed through untouched.

use std::sync::LazyLock;

use chrono::DateTime;
use mutator::{Transform, TransformError, TransformResult};
use regex::Regex;
use serde_json::Value;

static ACCESS_LOG: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<remote>[^ ]*) (?P<host>[^ ]*) (?P<user>[^ ]*) \[(?P<time>[^\]]*)\] "(?P<method>\S+)(?: +(?P<path>[^"]*?)(?: +\S*)?)?" (?P<code>[^ ]*) (?P<size>[^ ]*)(?: "(?P<referer>[^"]*)" "(?P<agent>[^"]*)"(?:\s+(?P<http_x_forwarded_for>[^ ]+))?)?$"#,
    )
});

const TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

#[derive(Debug, Default, Clone, Copy)]
pub struct NginxParser;

impl NginxParser {
    fn expand(input: &[u8]) -> Result<Option<Vec<u8>>, TransformError> {
        let access_log = ACCESS_LOG.as_ref().map_err(TransformError::internal)?;
        let mut record: Value = serde_json::from_slice(input)?;
        let Some(object) = record.as_object_mut() else {
            return Ok(None);
        };
        let Some(message) = object.get("message").and_then(Value::as_str) else {
            return Ok(None);
        };
        let Some(captures) = access_log.captures(message) else {
            log::debug!("message is not an access log line");
            return Ok(None);
        };

        let fields: Vec<(String, Value)> = access_log
            .capture_names()
            .flatten()
            .filter_map(|name| {
                let value = captures.name(name)?.as_str();
                Some((name.to_string(), field_value(name, value)))
            })
            .collect();
        if fields.is_empty() {
            return Ok(None);
        }
        for (name, value) in fields {
            object.insert(name, value);
        }
        Ok(Some(serde_json::to_vec(&record)?))
    }
}

fn field_value(name: &str, value: &str) -> Value {
    if name == "time" {
        match DateTime::parse_from_str(value, TIME_FORMAT) {
            Ok(time) => return time.timestamp().to_string().into(),
            Err(e) => log::debug!("keeping unparsable time {value:?}: {e}"),
        }
    }
    value.into()
}

impl Transform for NginxParser {
    fn transform(&self, input: &[u8]) -> TransformResult {
        Self::expand(input).into()
    }
}

mutator::mutator!(NginxParser, log_level = log::LevelFilter::Info);
