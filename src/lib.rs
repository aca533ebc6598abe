//! Client for the SUNAPI CGI interface of Hanwha Vision (formerly Samsung
//! Techwin) network cameras and recorders.
//!
//! The devices protect every endpoint with HTTP Digest Authentication
//! (RFC 2617, MD5 with `qop=auth`). [`SunApiClient`] handles the whole
//! lifecycle: it draws a challenge out of the device with a probe request
//! and computes a fresh `Authorization` header per request under a
//! serialized nonce counter. A stale nonce gets one transparent retry;
//! once the credentials themselves are rejected the session fails fast
//! instead of hammering the device into an account lockout.
//!
//! # Examples
//!
//! The digest core is usable on its own, for instance to answer a
//! challenge captured from a device by hand:
//!
//! ```
//! use sunapi_client::{AuthorizationHeader, Credentials, DigestContext, WwwAuthenticateHeader};
//!
//! // Value of the WWW-Authenticate header in the device's 401 response
//! let challenge = WwwAuthenticateHeader::parse(
//!     r#"Digest realm="iPolis", nonce="0005d0fbY611975899b44c27d22b5c751677d9b068563f8e", qop="auth""#,
//! )
//! .unwrap();
//!
//! // The uri is the exact path-and-query of the request being authorized;
//! // the client nonce is random in real use.
//! let header = AuthorizationHeader::compute(
//!     &Credentials::new("admin", "4321password"),
//!     &challenge,
//!     &DigestContext {
//!         method: "GET",
//!         uri: "/stw-cgi/system.cgi?msubmenu=deviceinfo&action=view",
//!         nonce_count: 1,
//!         client_nonce: "f799da9c44dca24c",
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     header.to_string(),
//!     r#"Digest username="admin", realm="iPolis", nonce="0005d0fbY611975899b44c27d22b5c751677d9b068563f8e", uri="/stw-cgi/system.cgi?msubmenu=deviceinfo&action=view", response="cfd5c6d56eb12e650fcbe0f1f0bbd94b", qop=auth, nc=00000001, cnonce="f799da9c44dca24c""#
//! );
//! ```
//!
//! Against a live device the client does all of that by itself:
//!
//! ```no_run
//! use sunapi_client::{Credentials, SunApiClient};
//!
//! # async fn demo() -> sunapi_client::Result<()> {
//! let client = SunApiClient::new("192.168.0.64", Credentials::new("admin", "4321password"))?;
//!
//! let info = client.device_info().await?;
//! println!("talking to a {}", info.model.as_deref().unwrap_or("camera"));
//!
//! let live = client.live_people_count(0).await?;
//! for channel in &live.channels {
//!     for line in &channel.lines {
//!         println!("{:?}: {:?} in, {:?} out", line.name, line.in_count, line.out_count);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod auth;
mod client;
mod error;
mod transport;

pub use crate::auth::challenge::WwwAuthenticateHeader;
pub use crate::auth::digest::{AuthorizationHeader, Credentials, DigestContext};
pub use crate::auth::session::AuthSession;
pub use crate::client::{SunApiClient, DEFAULT_TIMEOUT};
pub use crate::error::{Error, Result};
pub use crate::transport::{CgiResponse, CgiTransport, HttpTransport};

/// Parse a `WWW-Authenticate` header value.
/// Convenience for [`WwwAuthenticateHeader::parse()`].
pub fn parse(www_authenticate: &str) -> Result<WwwAuthenticateHeader> {
    WwwAuthenticateHeader::parse(www_authenticate)
}

#[test]
fn parse_accepts_folded_headers() {
    let src = r#"
    Digest
       realm="iPolis",
       qop="auth",
       nonce="0005d0fbY611975899b44c27d22b5c751677d9b068563f8e"
    "#;

    let challenge = parse(src).unwrap();
    assert_eq!(challenge.realm, "iPolis");
    assert_eq!(challenge.qop, "auth");
    assert!(!challenge.stale);
}
