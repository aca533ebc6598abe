//! Digest response computation (RFC 2617, MD5 with qop).

use std::fmt::{self, Display, Formatter};

use md5::{Digest, Md5};

use crate::auth::challenge::{quote_value, WwwAuthenticateHeader};
use crate::error::Result;

/// Account used to authenticate against the device.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Per-request inputs to the response computation.
///
/// `uri` must be the exact path-and-query put on the request line; hashing
/// anything else (say, the absolute URL) produces a response the device
/// rejects.
#[derive(Debug, Clone, Copy)]
pub struct DigestContext<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    pub nonce_count: u32,
    pub client_nonce: &'a str,
}

/// Computed `Authorization` header, ready to render onto the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationHeader {
    pub username: String,
    pub realm: String,
    pub nonce: String,
    pub uri: String,
    /// 32 lowercase hex digits
    pub response: String,
    /// The qop option actually chosen, always `auth` in practice
    pub qop: String,
    /// Request counter under the current nonce, rendered as `{:08x}`
    pub nc: u32,
    pub cnonce: String,
}

impl AuthorizationHeader {
    /// Compute the digest response for one request.
    ///
    /// # Errors
    /// [`Error::UnsupportedAlgorithm`] or [`Error::UnsupportedChallenge`]
    /// when the challenge asks for something other than MD5 with qop `auth`.
    ///
    /// [`Error::UnsupportedAlgorithm`]: crate::Error::UnsupportedAlgorithm
    /// [`Error::UnsupportedChallenge`]: crate::Error::UnsupportedChallenge
    pub fn compute(
        credentials: &Credentials,
        challenge: &WwwAuthenticateHeader,
        context: &DigestContext<'_>,
    ) -> Result<Self> {
        let qop = challenge.supported_qop()?;

        let ha1 = md5_hex(&format!(
            "{username}:{realm}:{password}",
            username = credentials.username,
            realm = challenge.realm,
            password = credentials.password
        ));
        let ha2 = md5_hex(&format!(
            "{method}:{uri}",
            method = context.method,
            uri = context.uri
        ));
        let response = md5_hex(&format!(
            "{ha1}:{nonce}:{nc:08x}:{cnonce}:{qop}:{ha2}",
            nonce = challenge.nonce,
            nc = context.nonce_count,
            cnonce = context.client_nonce
        ));

        Ok(Self {
            username: credentials.username.clone(),
            realm: challenge.realm.clone(),
            nonce: challenge.nonce.clone(),
            uri: context.uri.to_string(),
            response,
            qop: qop.to_string(),
            nc: context.nonce_count,
            cnonce: context.client_nonce.to_string(),
        })
    }
}

impl Display for AuthorizationHeader {
    /// Render the header value the way the device firmware expects it:
    /// `qop` and `nc` unquoted, no `opaque` and no `algorithm` echoed.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Digest username=\"{username}\", realm=\"{realm}\", nonce=\"{nonce}\", \
             uri=\"{uri}\", response=\"{response}\", qop={qop}, nc={nc:08x}, cnonce=\"{cnonce}\"",
            username = quote_value(&self.username),
            realm = quote_value(&self.realm),
            nonce = quote_value(&self.nonce),
            uri = quote_value(&self.uri),
            response = self.response,
            qop = self.qop,
            nc = self.nc,
            cnonce = quote_value(&self.cnonce),
        )
    }
}

fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
