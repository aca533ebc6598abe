//! HTTP transport seam between the client and the device.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use http::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Everything the session and client need out of one CGI response.
#[derive(Debug, Clone)]
pub struct CgiResponse {
    pub status: StatusCode,
    /// Raw `WWW-Authenticate` value, when the device sent one
    pub www_authenticate: Option<String>,
    pub body: Bytes,
}

/// Single-method transport the authentication session drives its GETs
/// through. Implement it to put the client behind a proxy or behind a
/// scripted fake in tests.
#[async_trait]
pub trait CgiTransport: Send + Sync {
    /// Issue a GET for `path_and_query`, optionally carrying an
    /// `Authorization` header value.
    async fn get(&self, path_and_query: &str, authorization: Option<&str>) -> Result<CgiResponse>;
}

/// Plain-HTTP transport over a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Build a transport for a device reachable at `host`, either a bare
    /// hostname/address or `host:port`.
    pub fn new(host: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(&format!("http://{host}/"))
            .map_err(|err| Error::Config(format!("invalid device host {host:?}: {err}")))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl CgiTransport for HttpTransport {
    async fn get(&self, path_and_query: &str, authorization: Option<&str>) -> Result<CgiResponse> {
        let url = self.base.join(path_and_query).map_err(|err| {
            Error::Config(format!("invalid request path {path_and_query:?}: {err}"))
        })?;

        let mut request = self.client.get(url);
        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        let response = request.send().await?;
        let status = response.status();
        let www_authenticate = response
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;
        debug!("{} answered {} ({} body bytes)", path_and_query, status, body.len());

        Ok(CgiResponse {
            status,
            www_authenticate,
            body,
        })
    }
}
