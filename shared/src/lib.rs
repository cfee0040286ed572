use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prediction payload exactly as the classifier service returned it.
///
/// The service is expected to answer with
/// `{"predicted_digit": <label>, "probs": [..]}` but nothing is validated:
/// the raw JSON is kept verbatim and the accessors below read it leniently,
/// so an unexpected shape shows up as a missing label or missing bars
/// rather than a client error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct PredictionResponse(Value);

impl PredictionResponse {
    /// Display label for the predicted class. Numeric and string labels are
    /// both accepted.
    pub fn predicted_label(&self) -> Option<String> {
        match &self.0["predicted_digit"] {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Per-class probabilities, if the payload carries an all-numeric array.
    pub fn probabilities(&self) -> Option<Vec<f64>> {
        self.0["probs"].as_array()?.iter().map(Value::as_f64).collect()
    }

    /// Index of the strongest class in the probability array.
    pub fn top_class(&self) -> Option<usize> {
        self.probabilities()?
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// The untouched payload.
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for PredictionResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_label_is_stringified() {
        let response = PredictionResponse::from(json!({"predicted_digit": 7}));
        assert_eq!(response.predicted_label(), Some("7".to_string()));
    }

    #[test]
    fn string_label_is_kept() {
        let response = PredictionResponse::from(json!({"predicted_digit": "seven"}));
        assert_eq!(response.predicted_label(), Some("seven".to_string()));
    }

    #[test]
    fn missing_fields_yield_nothing() {
        let response = PredictionResponse::from(json!({}));
        assert_eq!(response.predicted_label(), None);
        assert_eq!(response.probabilities(), None);
        assert_eq!(response.top_class(), None);
    }

    #[test]
    fn non_object_payload_is_tolerated() {
        let response = PredictionResponse::from(json!([1, 2, 3]));
        assert_eq!(response.predicted_label(), None);
        assert_eq!(response.probabilities(), None);
    }

    #[test]
    fn malformed_probabilities_yield_nothing() {
        let response = PredictionResponse::from(json!({"probs": ["high", "low"]}));
        assert_eq!(response.probabilities(), None);
    }

    #[test]
    fn ten_class_payload_parses_and_ranks() {
        let body = r#"{"predicted_digit": 7, "probs":
            [0.01, 0.02, 0.01, 0.01, 0.01, 0.01, 0.01, 0.9, 0.01, 0.01]}"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let probs = response.probabilities().unwrap();
        assert_eq!(probs.len(), 10);
        assert_eq!(response.top_class(), Some(7));
        assert_eq!(response.predicted_label(), Some("7".to_string()));
    }

    #[test]
    fn round_trips_verbatim() {
        let payload = json!({"predicted_digit": 3, "probs": [0.5, 0.5], "extra": "kept"});
        let response = PredictionResponse::from(payload.clone());
        assert_eq!(serde_json::to_value(&response).unwrap(), payload);
    }
}
