//! Session state for one device account.
//!
//! All state lives behind a single async mutex that stays held across the
//! probe round-trip, so concurrent requests serialize on the handshake and
//! every later caller reuses its challenge instead of probing again. The
//! same lock hands out `nc` values, which keeps them strictly increasing
//! under a nonce no matter how many tasks share the session.

use std::sync::Arc;

use http::StatusCode;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::challenge::WwwAuthenticateHeader;
use crate::auth::digest::{AuthorizationHeader, Credentials, DigestContext};
use crate::auth::nonce::NonceCounter;
use crate::error::{Error, Result};
use crate::transport::CgiTransport;

/// Endpoint probed to draw a challenge out of the device. Any protected
/// endpoint works; device info is the cheapest one every firmware has.
pub(crate) const PROBE_PATH: &str = "/stw-cgi/system.cgi?msubmenu=deviceinfo&action=view";

/// Challenge the session currently answers with, plus the counter that
/// serializes `nc` values for it.
struct AuthState {
    challenge: WwwAuthenticateHeader,
    counter: NonceCounter,
}

impl AuthState {
    /// Take over a freshly parsed challenge, refusing any the response
    /// computation could not answer later.
    fn adopt(challenge: WwwAuthenticateHeader) -> Result<Self> {
        challenge.supported_qop()?;
        Ok(Self {
            challenge,
            counter: NonceCounter::new(),
        })
    }

    fn mint(&mut self, credentials: &Credentials, method: &str, uri: &str) -> Result<String> {
        let nonce_count = self.counter.advance();
        let context = DigestContext {
            method,
            uri,
            nonce_count,
            client_nonce: self.counter.client_nonce(),
        };
        Ok(AuthorizationHeader::compute(credentials, &self.challenge, &context)?.to_string())
    }
}

enum SessionState {
    /// No challenge seen yet; the next acquisition runs the probe handshake.
    Unauthenticated,
    /// Holding a challenge and minting headers under it.
    Authenticated(AuthState),
    /// The device rejected a response computed from a fresh challenge.
    /// Only new credentials leave this state.
    Rejected,
}

struct Inner {
    credentials: Credentials,
    state: SessionState,
}

/// Digest session shared by every request the client makes.
pub struct AuthSession {
    transport: Arc<dyn CgiTransport>,
    inner: Mutex<Inner>,
}

impl AuthSession {
    pub fn new(transport: Arc<dyn CgiTransport>, credentials: Credentials) -> Self {
        Self {
            transport,
            inner: Mutex::new(Inner {
                credentials,
                state: SessionState::Unauthenticated,
            }),
        }
    }

    /// Produce the `Authorization` value for one request, running the probe
    /// handshake first if no challenge is held yet.
    ///
    /// # Errors
    /// [`Error::AuthenticationFailed`] once the session is rejected;
    /// [`Error::HandshakeFailed`] when the probe cannot draw a challenge.
    pub async fn authorization_for(&self, method: &str, uri: &str) -> Result<String> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        match &mut inner.state {
            SessionState::Rejected => return Err(Error::AuthenticationFailed),
            SessionState::Authenticated(auth) => return auth.mint(&inner.credentials, method, uri),
            SessionState::Unauthenticated => {}
        }

        // Probe while holding the lock. Anyone else asking for a header
        // parks on the mutex and finds the adopted challenge when we drop it.
        let challenge = self.fetch_challenge().await?;
        let mut auth = AuthState::adopt(challenge)?;
        let header = auth.mint(&inner.credentials, method, uri)?;
        inner.state = SessionState::Authenticated(auth);
        Ok(header)
    }

    /// React to a 401 on a request that carried a minted header, and mint
    /// the replacement header for the one retry the caller gets.
    ///
    /// `retried` says the rejected request already was that retry; in that
    /// case no header is minted and the request fails for good. A non-stale
    /// second rejection also poisons the session, since by then the response
    /// was computed from a challenge the device itself just issued, which
    /// leaves the credentials as the only suspect.
    pub async fn handle_unauthorized(
        &self,
        method: &str,
        uri: &str,
        www_authenticate: &str,
        retried: bool,
    ) -> Result<String> {
        let challenge = WwwAuthenticateHeader::parse(www_authenticate)?;
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        if retried {
            if challenge.stale {
                // Stale again means the credentials are fine and the device
                // is churning nonces. Keep the new challenge for the next
                // caller, but this request has used up its retry.
                warn!("nonce reported stale twice in a row");
                inner.state = match AuthState::adopt(challenge) {
                    Ok(auth) => SessionState::Authenticated(auth),
                    Err(_) => SessionState::Unauthenticated,
                };
            } else {
                warn!("credentials rejected after a fresh handshake");
                inner.state = SessionState::Rejected;
            }
            return Err(Error::AuthenticationFailed);
        }

        match &mut inner.state {
            SessionState::Rejected => return Err(Error::AuthenticationFailed),
            SessionState::Authenticated(auth)
                if !challenge.stale && auth.challenge.nonce == challenge.nonce =>
            {
                // The 401 bears the nonce we already hold, so the rejected
                // request raced the handshake that adopted it. Continue the
                // existing counter rather than replaying nc=1.
                debug!("401 raced an ongoing handshake, continuing under the held nonce");
                return auth.mint(&inner.credentials, method, uri);
            }
            _ => {}
        }

        if challenge.stale {
            debug!("nonce went stale, adopting the replacement challenge");
        } else {
            debug!("re-authenticating against a fresh challenge");
        }
        let mut auth = AuthState::adopt(challenge)?;
        let header = auth.mint(&inner.credentials, method, uri)?;
        inner.state = SessionState::Authenticated(auth);
        Ok(header)
    }

    /// Swap the account and start over. This is the only way out of the
    /// rejected state.
    pub async fn replace_credentials(&self, credentials: Credentials) {
        let mut guard = self.inner.lock().await;
        guard.credentials = credentials;
        guard.state = SessionState::Unauthenticated;
    }

    async fn fetch_challenge(&self) -> Result<WwwAuthenticateHeader> {
        debug!("probing {} for a digest challenge", PROBE_PATH);
        let response = self
            .transport
            .get(PROBE_PATH, None)
            .await
            .map_err(|err| Error::HandshakeFailed(format!("probe request failed: {err}")))?;

        if response.status != StatusCode::UNAUTHORIZED {
            return Err(Error::HandshakeFailed(format!(
                "expected a 401 challenge from the probe, device answered {}",
                response.status
            )));
        }
        let header = response
            .www_authenticate
            .ok_or_else(|| Error::MalformedChallenge("401 without a WWW-Authenticate header".into()))?;
        WwwAuthenticateHeader::parse(&header)
    }
}
