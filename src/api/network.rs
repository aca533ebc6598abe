//! Network status endpoints.

use crate::api::cgi;
use crate::client::SunApiClient;
use crate::error::Result;

impl SunApiClient {
    /// Interface configuration of the recorder. The payload layout varies
    /// widely between firmware lines, so it comes back undecoded.
    pub async fn network_interface(&self) -> Result<serde_json::Value> {
        self.get_json(&cgi("recording", "network", "view")).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::digest::Credentials;
    use crate::transport::testing::ScriptedTransport;

    #[tokio::test]
    async fn asks_the_recording_script() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_unauthorized(r#"Digest realm="iPolis", nonce="n", qop="auth""#);
        transport.push_ok(r#"{"InterfaceList":[{"InterfaceID":1,"IPv4Address":"192.168.0.64"}]}"#);
        let client =
            SunApiClient::with_transport(transport.clone(), Credentials::new("admin", "pw"));

        let value = client.network_interface().await.unwrap();
        assert_eq!(
            value["InterfaceList"][0]["IPv4Address"],
            serde_json::json!("192.168.0.64")
        );
        assert_eq!(
            transport.seen()[1].path,
            "/stw-cgi/recording.cgi?msubmenu=network&action=view"
        );
    }
}
