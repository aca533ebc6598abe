use std::result;

/// Errors produced by the authentication core and the endpoint wrappers.
///
/// The digest variants are deliberately fine-grained: callers can tell a
/// camera that speaks an unsupported dialect (`UnsupportedChallenge`,
/// `UnsupportedAlgorithm`) apart from one that rejected the supplied
/// credentials (`AuthenticationFailed`) or was simply unreachable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `WWW-Authenticate` value could not be parsed, or a required
    /// challenge field (`realm`, `nonce`) is missing.
    #[error("malformed digest challenge: {0}")]
    MalformedChallenge(String),

    /// The challenge demands a digest variant this client does not implement,
    /// such as the legacy qop-less computation or `auth-int` protection.
    #[error("unsupported digest challenge: {0}")]
    UnsupportedChallenge(String),

    /// The challenge names a hash algorithm other than MD5.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The probe request that should have produced the initial challenge
    /// failed at the network level or returned something other than 401.
    #[error("digest handshake failed: {0}")]
    HandshakeFailed(String),

    /// The device kept answering 401 after a re-handshake. The session is
    /// rejected until new credentials are supplied.
    #[error("device rejected the supplied credentials")]
    AuthenticationFailed,

    /// Network failure on an already-authenticated request.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The device answered with a status the wrapper cannot interpret.
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus {
        status: http::StatusCode,
        path: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode device response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration, e.g. an unparsable device host.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = result::Result<T, Error>;
