//! Custom serde helpers for upstream wire formats.

/// Deserializes a decimal field sent either as a JSON string (`"8281.17307"`)
/// or as a bare JSON number into its textual form.
///
/// Nomics documents decimals as strings. Bare numbers keep their original
/// digits (serde_json's `arbitrary_precision`), so the conversion layer
/// parses them exactly and never through `f64`.
pub mod decimal_text {
    use serde::de::{self, Deserialize, Deserializer, Unexpected};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            Value::Null => Err(de::Error::invalid_type(Unexpected::Unit, &EXPECTED)),
            Value::Bool(b) => Err(de::Error::invalid_type(Unexpected::Bool(b), &EXPECTED)),
            Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &EXPECTED)),
            Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &EXPECTED)),
        }
    }

    const EXPECTED: &str = "a decimal as a string or number";
}
