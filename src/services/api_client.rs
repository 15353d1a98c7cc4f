use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::AppError;

// Thin wrapper over ureq: base URL composition plus uniform error
// translation. Callers own their catch/fallback policy; no retries and no
// timeouts are configured here.
pub struct ApiClient {
    base: Url,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::General(format!("invalid backend url {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(AppError::General(format!(
                "invalid backend url {base_url}: cannot hold a path"
            )));
        }
        Ok(Self {
            base,
            agent: ureq::agent(),
        })
    }

    // Segments are percent-encoded on push, so a virtual path such as
    // "root/docs" travels as a single "root%2Fdocs" segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|()| {
                AppError::General(format!("backend url {} cannot hold a path", self.base))
            })?;
            parts.pop_if_empty();
            parts.extend(segments);
        }
        Ok(url)
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, AppError> {
        let response = self.agent.request_url("GET", url).call()?;
        parse_json(response)
    }

    pub fn post_json(&self, url: &Url, body: &impl Serialize) -> Result<(), AppError> {
        self.agent.request_url("POST", url).send_json(body)?;
        Ok(())
    }

    pub fn put_json(&self, url: &Url, body: &impl Serialize) -> Result<(), AppError> {
        self.agent.request_url("PUT", url).send_json(body)?;
        Ok(())
    }

    pub fn delete(&self, url: &Url) -> Result<(), AppError> {
        self.agent.request_url("DELETE", url).call()?;
        Ok(())
    }
}

fn parse_json<T: DeserializeOwned>(response: ureq::Response) -> Result<T, AppError> {
    let body = response
        .into_string()
        .map_err(|e| AppError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}
