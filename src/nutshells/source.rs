use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use tracing::debug;

use crate::nutshells::{
    dto::{decode_page, Person},
    error::FetchError,
};

/// Reads one page of people. Pages are 1-based; an empty page means there are no more.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Person>, FetchError>;
}

/// `GET <base_url>/people/<page>` over HTTP. Anything but a 200 is a failure.
#[derive(Clone)]
pub struct HttpPeopleSource {
    client: Client,
    base_url: String,
}

impl HttpPeopleSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/people/{}", self.base_url, page)
    }
}

#[async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Person>, FetchError> {
        let url = self.page_url(page);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;
        let people = decode_page(&body).map_err(|source| FetchError::Decode { page, source })?;

        debug!(%url, count = people.len(), "people page fetched");
        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_drops_trailing_slash() {
        let source = HttpPeopleSource::new("http://example.test/", Duration::from_secs(1))
            .expect("client builds");
        assert_eq!(source.page_url(3), "http://example.test/people/3");
    }
}
