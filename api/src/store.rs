use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use tracing::debug;

// record store
//
// the site only ever writes single records into named collections, and never reads them
// back.  everything that talks to the remote store goes through this trait so that the
// form controllers can be exercised against a fake store
//
// the futures are not Send since gloo-net requests are bound to the browser event loop
#[async_trait(?Send)]
pub trait RecordStore {
    async fn insert(&self, collection: &str, record: Value) -> anyhow::Result<()>;
}

// postgrest-style rest client
//
// inserts are POSTed as a one-element json array to {url}/rest/v1/{collection}, with the
// public api key passed both as the apikey header and as a bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestStore {
    url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        RestStore {
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), collection)
    }
}

#[async_trait(?Send)]
impl RecordStore for RestStore {
    async fn insert(&self, collection: &str, record: Value) -> anyhow::Result<()> {
        if !self.is_configured() {
            return Err(anyhow::Error::msg("record store url is not configured"));
        }

        let url = self.collection_url(collection);
        debug!({ url = %url }, "inserting record");

        let resp = Request::post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&[record])?
            .send()
            .await?;

        if resp.ok() {
            Ok(())
        } else {
            Err(anyhow::Error::msg(format!(
                "insert into {collection} failed with {}: {}",
                resp.status(),
                resp.text().await?
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_ignores_trailing_slash() {
        let store = RestStore::new("https://example.supabase.co/", "key");
        assert_eq!(
            store.collection_url("messages"),
            "https://example.supabase.co/rest/v1/messages"
        );
    }

    #[test]
    fn blank_url_is_not_configured() {
        assert!(!RestStore::new("  ", "key").is_configured());
        assert!(RestStore::new("https://example.supabase.co", "").is_configured());
    }

    #[tokio::test]
    async fn unconfigured_store_rejects_inserts() {
        let store = RestStore::new("", "");
        let err = store.insert("messages", Value::Null).await.unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }
}
