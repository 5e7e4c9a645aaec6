use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message shown when a failed prediction carries no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to get prediction. Please try again.";

/// Response of `GET /api/countries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}

/// Successful response of `POST /api/predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    /// Predicted life expectancy in years
    pub prediction: f64,
}

/// Error body returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human readable error description
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Extracts the `detail` string from an error response body.
///
/// Bodies that are not JSON, lack `detail`, or carry a non-string / blank `detail`
/// (validation errors send an array there) yield `None`.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        None
    } else {
        Some(detail.to_string())
    }
}

/// Message for the error panel: the server's detail when present, otherwise the fallback.
pub fn failure_message(detail: Option<&str>) -> String {
    detail
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}

/// Formats a prediction for the result panel, e.g. `72.345` -> `"72.35 years"`.
///
/// Rounds half away from zero on the shortest decimal form of `value`
/// (what `Display` prints), so `1.005` becomes `1.01`.
pub fn format_prediction(value: f64) -> String {
    if !value.is_finite() {
        return format!("{} years", value);
    }
    format!("{} years", round_two_decimals(value))
}

fn round_two_decimals(value: f64) -> String {
    let text = value.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    // Digits of value * 100, truncated
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |part: &[u8]| part.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if value < 0.0 && digits.iter().any(|d| *d != 0) {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, render(&digits[..split]), render(&digits[split..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prediction_rounds_to_two_decimals() {
        assert_eq!(format_prediction(72.345), "72.35 years");
        assert_eq!(format_prediction(68.125), "68.13 years");
        assert_eq!(format_prediction(80.0), "80.00 years");
        assert_eq!(format_prediction(59.991), "59.99 years");
    }

    #[test]
    fn test_format_prediction_rounds_halves_the_user_sees() {
        assert_eq!(format_prediction(1.005), "1.01 years");
        assert_eq!(format_prediction(0.285), "0.29 years");
        assert_eq!(format_prediction(99.995), "100.00 years");
        assert_eq!(format_prediction(0.004), "0.00 years");
        assert_eq!(format_prediction(-2.345), "-2.35 years");
    }

    #[test]
    fn test_detail_from_body() {
        assert_eq!(
            detail_from_body(r#"{"detail": "bad input"}"#),
            Some("bad input".to_string())
        );
        assert_eq!(detail_from_body(r#"{"error": "nope"}"#), None);
        assert_eq!(detail_from_body(r#"{"detail": ""}"#), None);
        assert_eq!(
            detail_from_body(r#"{"detail": [{"loc": ["body", "year"], "msg": "field required"}]}"#),
            None
        );
        assert_eq!(detail_from_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(detail_from_body(""), None);
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure_message(Some("bad input")), "bad input");
        assert_eq!(failure_message(None), FALLBACK_ERROR_MESSAGE);
        assert_eq!(failure_message(Some("   ")), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_countries_response_shape() {
        let response: CountriesResponse =
            serde_json::from_str(r#"{"countries": ["Albania", "Brazil"]}"#).unwrap();
        assert_eq!(response.countries, vec!["Albania", "Brazil"]);
    }

    #[test]
    fn test_prediction_response_shape() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"prediction": 72.345}"#).unwrap();
        assert_eq!(response.prediction, 72.345);
    }
}
