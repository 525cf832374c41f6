use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::value::RawValue;

use crate::{SubstitutionTable, Transform, TransformError, TransformResult};

/// Rewrites one string field of a JSON document with a [`SubstitutionTable`].
///
/// Only the named field's value is touched: the new string is spliced over the old
/// one and every other byte of the document is emitted as it came in, so numbers,
/// whitespace and repeated keys elsewhere survive. When the table matches nothing
/// the result is `Unchanged`.
#[derive(Debug, Clone)]
pub struct FieldSubstitution {
    path: Vec<String>,
    table: SubstitutionTable,
}

impl FieldSubstitution {
    /// Substitute within the top-level `field`.
    pub fn new(field: impl Into<String>, table: SubstitutionTable) -> Self {
        Self {
            path: vec![field.into()],
            table,
        }
    }

    /// Substitute within a nested field, given as the keys leading to it.
    pub fn with_path<K: Into<String>>(mut self, path: impl IntoIterator<Item = K>) -> Self {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    fn field_name(&self, depth: usize) -> String {
        if depth == 0 {
            "document".to_string()
        } else {
            self.path[..depth].join(".")
        }
    }

    /// The raw text of the target value, borrowed from `document`.
    fn locate<'d>(&self, document: &'d str) -> Result<&'d RawValue, TransformError> {
        let mut current: &'d RawValue = serde_json::from_str(document)?;
        for (depth, key) in self.path.iter().enumerate() {
            if !current.get().starts_with('{') {
                return Err(TransformError::FieldType {
                    field: self.field_name(depth),
                    expected: "an object",
                });
            }
            let mut members: HashMap<String, &'d RawValue> = serde_json::from_str(current.get())?;
            current = members
                .remove(key)
                .ok_or_else(|| TransformError::MissingField(self.field_name(depth + 1)))?;
        }
        Ok(current)
    }

    fn substitute(&self, input: &[u8]) -> Result<Option<Vec<u8>>, TransformError> {
        let document = std::str::from_utf8(input)?;
        let target = self.locate(document)?.get();
        if !target.starts_with('"') {
            return Err(TransformError::FieldType {
                field: self.field_name(self.path.len()),
                expected: "a string",
            });
        }
        let text: String = serde_json::from_str(target)?;
        let replaced = match self.table.apply(&text) {
            Cow::Borrowed(_) => return Ok(None),
            Cow::Owned(replaced) => replaced,
        };
        log::debug!("substituted `{}`: {text:?} -> {replaced:?}", self.path.join("."));

        // `target` is a subslice of `document`
        let start = target.as_ptr() as usize - document.as_ptr() as usize;
        let end = start + target.len();
        let encoded = serde_json::to_string(&replaced)?;
        let mut output = Vec::with_capacity(input.len() - target.len() + encoded.len());
        output.extend_from_slice(&input[..start]);
        output.extend_from_slice(encoded.as_bytes());
        output.extend_from_slice(&input[end..]);
        Ok(Some(output))
    }
}

impl Transform for FieldSubstitution {
    fn transform(&self, input: &[u8]) -> TransformResult {
        self.substitute(input).into()
    }
}
