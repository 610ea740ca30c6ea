use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_LENGTH_HINT: f64 = 1.0;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    /// Verbosity scale. Accepts a JSON number or a numeric string.
    #[serde(default = "default_length_hint", deserialize_with = "deserialize_length_hint")]
    pub length_hint: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssistantResponse {
    pub text: String,
    pub model_used: String,
}

fn default_length_hint() -> f64 {
    DEFAULT_LENGTH_HINT
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn deserialize_length_hint<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("length_hint must be a number, got {:?}", s))
        }),
    }
}

/// Requested completion budget for a given length hint.
///
/// Short answers (hint at or below 0.5) get half the base budget, long
/// answers (hint at or above 1.5) get double. Everything else, NaN included,
/// gets the base.
pub fn max_tokens_for(length_hint: f64) -> u32 {
    const BASE_TOKENS: u32 = 500;

    if length_hint <= 0.5 {
        BASE_TOKENS / 2
    } else if length_hint >= 1.5 {
        BASE_TOKENS * 2
    } else {
        BASE_TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_budget_bands() {
        assert_eq!(max_tokens_for(0.3), 250);
        assert_eq!(max_tokens_for(0.5), 250);
        assert_eq!(max_tokens_for(1.0), 500);
        assert_eq!(max_tokens_for(1.2), 500);
        assert_eq!(max_tokens_for(1.5), 1000);
        assert_eq!(max_tokens_for(2.0), 1000);
        assert_eq!(max_tokens_for(-3.0), 250);
        assert_eq!(max_tokens_for(f64::NAN), 500);
    }

    #[test]
    fn test_length_hint_defaults_to_one() {
        let req: AssistantRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(req.length_hint, 1.0);
        assert_eq!(req.prompt.as_deref(), Some("hi"));
    }

    #[test]
    fn test_length_hint_accepts_numeric_string() {
        let req: AssistantRequest =
            serde_json::from_str(r#"{"prompt": "hi", "length_hint": " 0.3 "}"#).unwrap();
        assert_eq!(req.length_hint, 0.3);

        let req: AssistantRequest =
            serde_json::from_str(r#"{"prompt": "hi", "length_hint": 2}"#).unwrap();
        assert_eq!(req.length_hint, 2.0);
    }

    #[test]
    fn test_length_hint_rejects_garbage() {
        let result = serde_json::from_str::<AssistantRequest>(r#"{"length_hint": "long"}"#);
        assert!(result.is_err());
    }
}
