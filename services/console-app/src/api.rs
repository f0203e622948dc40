//! Wire types shared with the backend services
//!
//! These mirror the JSON documents of the device-claim service and the
//! endpoint discovery document served on the console origin.

use serde::{Deserialize, Serialize};

/// Device-id prefix marking simulator-class devices
pub const SIMULATOR_DEVICE_PREFIX: &str = "simulator-";

/// Endpoint discovery document served at the well-known path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointsDocument {
    pub auth_server_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulator_url: Option<String>,
}

/// Claim state as returned by the device-claim service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceClaim {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub provisioning_id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl DeviceClaim {
    /// A claim without a provisioning id means "no device claimed"
    pub fn is_claimed(&self) -> bool {
        self.provisioning_id.is_some()
    }

    /// Simulator-class devices get the launch action and the details card
    pub fn is_simulator(&self) -> bool {
        self.id
            .as_deref()
            .is_some_and(|id| id.starts_with(SIMULATOR_DEVICE_PREFIX))
    }
}

/// Display command payload; sent to the device, never persisted client-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub brightness: u8,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_document_parses_camel_case() {
        let json = r#"{
            "authServerUrl": "https://auth.example/realm",
            "api": "https://api.example",
            "simulatorUrl": "https://simulator.example"
        }"#;
        let document: EndpointsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.auth_server_url, "https://auth.example/realm");
        assert_eq!(document.api.as_deref(), Some("https://api.example"));
        assert_eq!(document.ws, None);
        assert_eq!(
            document.simulator_url.as_deref(),
            Some("https://simulator.example")
        );
    }

    #[test]
    fn endpoints_document_requires_auth_server_url() {
        let result = serde_json::from_str::<EndpointsDocument>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn endpoints_document_omits_absent_fields() {
        let document = EndpointsDocument {
            auth_server_url: "https://auth.example".to_string(),
            api: None,
            ws: None,
            simulator_url: None,
        };
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"{"authServerUrl":"https://auth.example"}"#);
    }

    #[test]
    fn device_claim_parses_nulls_and_missing_fields() {
        let claim: DeviceClaim = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(claim, DeviceClaim::default());

        let claim: DeviceClaim =
            serde_json::from_str(r#"{"id": "device-1", "provisioningId": "p-1"}"#).unwrap();
        assert_eq!(claim.id.as_deref(), Some("device-1"));
        assert_eq!(claim.provisioning_id.as_deref(), Some("p-1"));
        assert_eq!(claim.password, None);
    }

    #[test]
    fn claim_without_provisioning_id_is_unclaimed() {
        let claim = DeviceClaim {
            id: Some("device-1".to_string()),
            provisioning_id: None,
            password: Some("secret".to_string()),
        };
        assert!(!claim.is_claimed());
    }

    #[test]
    fn claim_with_provisioning_id_is_claimed() {
        let claim = DeviceClaim {
            provisioning_id: Some("p-1".to_string()),
            ..DeviceClaim::default()
        };
        assert!(claim.is_claimed());
    }

    #[test]
    fn simulator_prefix_marks_simulator_devices() {
        let claim = DeviceClaim {
            id: Some("simulator-7".to_string()),
            ..DeviceClaim::default()
        };
        assert!(claim.is_simulator());

        let claim = DeviceClaim {
            id: Some("micro-bit-7".to_string()),
            ..DeviceClaim::default()
        };
        assert!(!claim.is_simulator());

        assert!(!DeviceClaim::default().is_simulator());
    }

    #[test]
    fn display_settings_serialize_as_json_object() {
        let display = DisplaySettings {
            brightness: 128,
            enabled: true,
        };
        let json = serde_json::to_string(&display).unwrap();
        assert_eq!(json, r#"{"brightness":128,"enabled":true}"#);
    }
}
