use super::ApiClient;
use crate::errors::FrontendResult;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CounterResponse {
    pub count: u64,
    /// Set by the backend for round-number milestones.
    #[serde(default, rename = "isKiriban")]
    pub is_kiriban: bool,
    /// Cumulative and same-day visits, shown on the portfolio page only.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub today: u64,
}

impl ApiClient {
    /// Increments the visit counter and returns the new value. POST, since
    /// every page view mutates the count.
    pub async fn hit_counter(&self) -> FrontendResult<CounterResponse> {
        self.post_empty("/counter/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kiriban_flag_defaults_to_false() {
        let res: CounterResponse =
            serde_json::from_str(r#"{"count": 4410}"#).expect("valid counter json");
        assert_eq!(res.count, 4410);
        assert!(!res.is_kiriban);

        let res: CounterResponse =
            serde_json::from_str(r#"{"count": 5000, "isKiriban": true}"#)
                .expect("valid counter json");
        assert!(res.is_kiriban);
    }

    #[test]
    fn portfolio_fields_are_decoded_when_present() {
        let res: CounterResponse =
            serde_json::from_str(r#"{"count": 4410, "total": 4410, "today": 23}"#)
                .expect("valid counter json");
        assert_eq!(res.total, 4410);
        assert_eq!(res.today, 23);

        let res: CounterResponse =
            serde_json::from_str(r#"{"count": 1}"#).expect("valid counter json");
        assert_eq!(res.total, 0);
        assert_eq!(res.today, 0);
    }
}
