use std::collections::HashMap;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::debug;

// contribution feed
//
// one entry per calendar day for the trailing year, as served by the public
// github-contributions json api.  level is the service's own 0-4 bucketing of count
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Contribution {
    pub date: String,
    pub count: u32,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContributionsResp {
    // keyed by year, plus "lastYear" when the trailing window is requested
    pub total: HashMap<String, u32>,
    pub contributions: Vec<Contribution>,
}

impl ContributionsResp {
    pub fn last_year_total(&self) -> u32 {
        match self.total.get("lastYear") {
            Some(total) => *total,
            None => self.contributions.iter().map(|c| c.count).sum(),
        }
    }
}

pub async fn fetch_contributions(url: &str) -> anyhow::Result<ContributionsResp> {
    debug!({ url = %url }, "fetching contributions");

    let resp = Request::get(url).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_payload() {
        let doc = r#"{
            "total": {"lastYear": 7, "2024": 5},
            "contributions": [
                {"date": "2024-06-01", "count": 2, "level": 1},
                {"date": "2024-06-02", "count": 5, "level": 3}
            ]
        }"#;

        let resp: ContributionsResp = serde_json::from_str(doc).unwrap();
        assert_eq!(resp.contributions.len(), 2);
        assert_eq!(resp.contributions[1].level, 3);
        assert_eq!(resp.last_year_total(), 7);
    }

    #[test]
    fn total_falls_back_to_summing_days() {
        let resp = ContributionsResp {
            total: HashMap::new(),
            contributions: vec![
                Contribution {
                    date: "2024-06-01".into(),
                    count: 2,
                    level: 1,
                },
                Contribution {
                    date: "2024-06-02".into(),
                    count: 3,
                    level: 2,
                },
            ],
        };
        assert_eq!(resp.last_year_total(), 5);
    }
}
