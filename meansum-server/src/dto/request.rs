use meansum::NumberList;
use serde::Deserialize;

/// Request to aggregate a list of numbers
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculateRequest {
    #[serde(default)]
    pub numbers: NumberList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_numbers_defaults_to_empty() {
        let req: CalculateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.numbers.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let res = serde_json::from_str::<CalculateRequest>(r#"{"numbers": [1], "extra": true}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_non_numeric_element_rejected() {
        let res = serde_json::from_str::<CalculateRequest>(r#"{"numbers": [1, "two"]}"#);
        assert!(res.is_err());
    }
}
