//! Typed wrappers over the device's CGI endpoint surface.
//!
//! Every endpoint is a GET against a `*.cgi` script selected by `msubmenu`
//! and `action` query parameters; even state-changing operations put their
//! values in the query string. The modules here build those paths and
//! decode the JSON the device answers with.

pub mod ai;
pub mod init;
pub mod network;
pub mod people_count;
pub mod system;

use serde::Deserialize;
use url::form_urlencoded;

/// Path for an endpoint that takes nothing beyond the selector pair.
pub(crate) fn cgi(script: &str, msubmenu: &str, action: &str) -> String {
    format!("/stw-cgi/{script}.cgi?msubmenu={msubmenu}&action={action}")
}

/// Path with extra query parameters, form-urlencoded the way the device
/// firmware decodes them (spaces as `+`, reserved bytes percent-escaped).
pub(crate) fn cgi_path<K, V>(
    script: &str,
    msubmenu: &str,
    action: &str,
    params: &[(K, V)],
) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut path = cgi(script, msubmenu, action);
    if !params.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(key, value)| (key.as_ref(), value.as_ref())))
            .finish();
        path.push('&');
        path.push_str(&encoded);
    }
    path
}

/// Booleans on the wire are spelled `True` and `False`.
pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Comma-separated list, the device's encoding for every multi-value field.
pub(crate) fn csv<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Outcome message of a set/control operation.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "Response")]
    pub response: String,
}

impl CommandResponse {
    /// Success is spelled exactly `Success`; anything else carries a
    /// reason, like `Fail (No Face Detected)`.
    pub fn is_success(&self) -> bool {
        self.response == "Success"
    }
}

/// Handle for an asynchronous search running on the device.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchToken {
    #[serde(rename = "SearchToken")]
    pub search_token: String,
}

/// Progress report for an asynchronous search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchStatus {
    /// `Completed` or `NotCompleted`
    pub status: Option<String>,
    pub total_results_found: Option<u64>,
    pub total_count: Option<u64>,
    /// String boolean (`"True"`/`"False"`), kept verbatim
    pub timed_out: Option<String>,
    pub search_token_expiry_time: Option<String>,
}

impl SearchStatus {
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("Completed")
    }
}

/// 2D point in device pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
