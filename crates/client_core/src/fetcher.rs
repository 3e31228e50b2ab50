//! Remote lookup of births for a month/day.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::BirthdayList,
    error::FetchError,
    protocol::{births_path, OnThisDayResponse},
};
use tracing::debug;
use url::Url;

use crate::{config::Settings, selection::MonthDay};

/// Source of births for a given day. The HTTP feed in production, anything in
/// tests.
#[async_trait]
pub trait BirthdaySource: Send + Sync {
    async fn births_on(&self, key: &MonthDay) -> Result<BirthdayList, FetchError>;
}

pub struct HttpBirthdaySource {
    http: Client,
    base_url: Url,
}

impl HttpBirthdaySource {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: settings.base_url()?,
        })
    }

    pub fn endpoint(&self, key: &MonthDay) -> Result<Url, FetchError> {
        self.base_url
            .join(&births_path(&key.month, &key.day))
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}

#[async_trait]
impl BirthdaySource for HttpBirthdaySource {
    async fn births_on(&self, key: &MonthDay) -> Result<BirthdayList, FetchError> {
        let url = self.endpoint(key)?;
        debug!(%url, "requesting births");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        decode_births(&body)
    }
}

fn decode_births(body: &[u8]) -> Result<BirthdayList, FetchError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|err| FetchError::Decode(err.to_string()))?;
    if value.get("births").is_none() {
        return Err(FetchError::MissingBirths);
    }
    let parsed: OnThisDayResponse =
        serde_json::from_value(value).map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(parsed.births)
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
