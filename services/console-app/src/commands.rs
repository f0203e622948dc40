//! Device command API client

use crate::api::DisplaySettings;
use crate::endpoints::Endpoints;
use crate::error::{ApiError, Result};
use crate::io::{check_response, HttpClient};

const DISPLAY_COMMAND_PATH: &str = "/api/commands/v1alpha1/display";

/// Apply display settings on the claimed device
pub async fn set_display(
    http: &impl HttpClient,
    endpoints: &Endpoints,
    display: &DisplaySettings,
) -> Result<()> {
    let url = endpoints.api(DISPLAY_COMMAND_PATH);
    let body = serde_json::to_string(display).map_err(|e| ApiError::Json(e.to_string()))?;
    check_response(http.post_json(&url, &body).await?)?;
    Ok(())
}
