//! System information endpoints.

use serde::Deserialize;

use crate::api::cgi;
use crate::client::SunApiClient;
use crate::error::Result;

/// Identity block reported by `deviceinfo`. Firmware generations differ in
/// which fields they fill in, so everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceInfo {
    pub model: Option<String>,
    pub device_type: Option<String>,
    pub device_name: Option<String>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub build_date: Option<String>,
    #[serde(rename = "WebURL")]
    pub web_url: Option<String>,
    #[serde(rename = "ISPVersion")]
    pub isp_version: Option<String>,
    #[serde(rename = "CGIVersion")]
    pub cgi_version: Option<String>,
    #[serde(rename = "ONVIFVersion")]
    pub onvif_version: Option<String>,
    #[serde(rename = "ConnectedMACAddress")]
    pub connected_mac_address: Option<String>,
    pub max_channel: Option<u32>,
}

impl SunApiClient {
    /// Identity and firmware details of the device.
    pub async fn device_info(&self) -> Result<DeviceInfo> {
        self.get_json(&cgi("system", "deviceinfo", "view")).await
    }
}
