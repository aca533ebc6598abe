//! Factory-state password bootstrap.
//!
//! A device fresh out of the box has no admin password yet and answers
//! these endpoints without authentication; everything else refuses to talk
//! until the initial password is set.

use serde::Deserialize;
use url::form_urlencoded;

use crate::api::CommandResponse;
use crate::client::SunApiClient;
use crate::error::Result;

/// Answer of the password-initialization status check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordInitStatus {
    pub initialized: Option<bool>,
    pub language: Option<String>,
    pub max_channel: Option<u32>,
    pub special_type: Option<String>,
    pub new_password_policy: Option<bool>,
    pub max_password_length: Option<u32>,
    /// Present only while uninitialized, for the encrypted set flow
    #[serde(default)]
    pub supported_public_key_formats: Vec<String>,
    /// RSA public key PEM, present only while uninitialized
    pub public_key: Option<String>,
    pub manufacturer: Option<String>,
}

impl PasswordInitStatus {
    pub fn is_initialized(&self) -> bool {
        self.initialized.unwrap_or(false)
    }
}

impl SunApiClient {
    /// Whether the admin password has ever been set.
    pub async fn password_initialized(&self) -> Result<PasswordInitStatus> {
        self.get_json_plain("/init-cgi/pw_init.cgi?msubmenu=status&action=view")
            .await
    }

    /// Set the very first admin password. Works exactly once; an already
    /// initialized device refuses it.
    ///
    /// Unlike the status check, this endpoint takes no `action` parameter.
    pub async fn set_initial_password(&self, password: &str) -> Result<CommandResponse> {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair("Password", password)
            .finish();
        self.get_json_plain(&format!(
            "/init-cgi/pw_init.cgi?msubmenu=setinitialpassword&{encoded}"
        ))
        .await
    }
}
