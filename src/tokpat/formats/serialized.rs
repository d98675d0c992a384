//! Structured reports
//!
//! Both formats write the same document: the token sequence and every recorded span, in scan
//! order, zero-length spans included.
//!
//! ```text
//! { "tokens": ["raining", "dogs"], "matches": [{ "start": 0, "end": 1 }, ...] }
//! ```

use super::registry::{FormatError, Formatter};
use crate::tokpat::context::Context;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, ctx: &Context) -> Result<String, FormatError> {
        serde_json::to_string_pretty(ctx).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tokens and every recorded span as JSON"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, ctx: &Context) -> Result<String, FormatError> {
        serde_yaml::to_string(ctx).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tokens and every recorded span as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokpat::expr::{lit, many};
    use crate::tokpat::pattern::Pattern;
    use crate::tokpat::tokens::TokenSeq;
    use serde_json::json;

    fn sample() -> Context {
        Pattern::new(many(lit("a"))).find_all(TokenSeq::new(["a", "b"]))
    }

    #[test]
    fn test_json_keeps_zero_length_spans() {
        let out = JsonFormatter.serialize(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "tokens": ["a", "b"],
                "matches": [
                    {"start": 0, "end": 0},
                    {"start": 0, "end": 1},
                    {"start": 1, "end": 1}
                ]
            })
        );
    }

    #[test]
    fn test_yaml_round_trips_through_value() {
        let out = YamlFormatter.serialize(&sample()).unwrap();
        let value: serde_json::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["tokens"], json!(["a", "b"]));
        assert_eq!(value["matches"].as_array().unwrap().len(), 3);
    }
}
