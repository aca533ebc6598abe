//! Device client: the request loop that ties the session to the transport.

use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::auth::digest::Credentials;
use crate::auth::session::AuthSession;
use crate::error::{Error, Result};
use crate::transport::{CgiResponse, CgiTransport, HttpTransport};

/// Default per-request timeout for the bundled HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the CGI API of one device.
///
/// Cheap to share behind an [`Arc`]; all methods take `&self` and requests
/// from any number of tasks reuse the one digest session.
pub struct SunApiClient {
    transport: Arc<dyn CgiTransport>,
    session: AuthSession,
}

impl SunApiClient {
    /// Connect to `host` (hostname/address, optionally `:port`) over plain
    /// HTTP with [`DEFAULT_TIMEOUT`].
    pub fn new(host: &str, credentials: Credentials) -> Result<Self> {
        Self::with_timeout(host, credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(host: &str, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(host, timeout)?);
        Ok(Self::with_transport(transport, credentials))
    }

    /// Run the client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn CgiTransport>, credentials: Credentials) -> Self {
        let session = AuthSession::new(transport.clone(), credentials);
        Self { transport, session }
    }

    /// The digest session backing this client.
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// GET a protected endpoint, authenticating as needed. A 401 on the
    /// authenticated request gets exactly one retry under a replacement
    /// header before the error surfaces.
    pub async fn get_authenticated(&self, path_and_query: &str) -> Result<CgiResponse> {
        let mut authorization = self.session.authorization_for("GET", path_and_query).await?;
        let mut retried = false;

        loop {
            let response = self
                .transport
                .get(path_and_query, Some(&authorization))
                .await?;
            if response.status == StatusCode::UNAUTHORIZED {
                let www_authenticate = response.www_authenticate.as_deref().ok_or_else(|| {
                    Error::MalformedChallenge("401 without a WWW-Authenticate header".into())
                })?;
                authorization = self
                    .session
                    .handle_unauthorized("GET", path_and_query, www_authenticate, retried)
                    .await?;
                retried = true;
                continue;
            }
            return check_status(response, path_and_query);
        }
    }

    /// GET an endpoint that answers without authentication.
    pub async fn get_plain(&self, path_and_query: &str) -> Result<CgiResponse> {
        let response = self.transport.get(path_and_query, None).await?;
        check_status(response, path_and_query)
    }

    /// GET a protected endpoint and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let response = self.get_authenticated(path_and_query).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// GET an unprotected endpoint and decode its JSON body.
    pub async fn get_json_plain<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let response = self.get_plain(path_and_query).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}

fn check_status(response: CgiResponse, path_and_query: &str) -> Result<CgiResponse> {
    if response.status.is_success() {
        Ok(response)
    } else {
        Err(Error::UnexpectedStatus {
            status: response.status,
            path: path_and_query.to_string(),
        })
    }
}
