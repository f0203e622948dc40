//! Device claim API client
//!
//! One request per user action, no retry; failures carry the response body
//! text for diagnostic display.

use url::form_urlencoded;
use url::Url;

use crate::api::DeviceClaim;
use crate::endpoints::Endpoints;
use crate::error::{ApiError, Result};
use crate::io::{check_response, HttpClient};

const CLAIMS_PATH: &str = "/api/deviceClaims/v1alpha1";
const SIMULATOR_PATH: &str = "/api/deviceClaims/v1alpha1/simulator";

/// Fetch the current claim state
pub async fn fetch_claim(http: &impl HttpClient, endpoints: &Endpoints) -> Result<DeviceClaim> {
    let url = endpoints.api(CLAIMS_PATH);
    let response = check_response(http.get(&url).await?)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Json(e.to_string()))
}

/// Claim the device with the given id
pub async fn claim_device(
    http: &impl HttpClient,
    endpoints: &Endpoints,
    claim_id: &str,
) -> Result<()> {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("claimId", claim_id)
        .finish();
    let url = format!("{}?{}", endpoints.api(CLAIMS_PATH), query);
    check_response(http.put(&url).await?)?;
    Ok(())
}

/// Release the current claim
pub async fn release_device(http: &impl HttpClient, endpoints: &Endpoints) -> Result<()> {
    check_response(http.delete(&endpoints.api(CLAIMS_PATH)).await?)?;
    Ok(())
}

/// Create a simulator device and claim it in one step
pub async fn create_simulator(http: &impl HttpClient, endpoints: &Endpoints) -> Result<()> {
    check_response(http.put(&endpoints.api(SIMULATOR_PATH)).await?)?;
    Ok(())
}

/// Simulator page URL carrying the claimed device credentials as `device`
/// and `password` query parameters
pub fn simulator_launch_url(simulator_url: &str, claim: &DeviceClaim) -> Option<String> {
    let mut url = match Url::parse(simulator_url) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Invalid simulator URL {:?}: {}", simulator_url, e);
            return None;
        }
    };

    if claim.id.is_some() || claim.password.is_some() {
        let mut query = url.query_pairs_mut();
        if let Some(id) = &claim.id {
            query.append_pair("device", id);
        }
        if let Some(password) = &claim.password {
            query.append_pair("password", password);
        }
    }

    Some(url.to_string())
}
