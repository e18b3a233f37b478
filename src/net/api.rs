//! REST calls against the remote campaign and alerts services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a user-presentable message;
//! callers route the message to the toast or page-level error channel and
//! never retry. A `Bearer` token from `localStorage` is attached when
//! present; requests go out unauthenticated otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Campaign;
#[cfg(feature = "hydrate")]
use super::types::{CampaignListResponse, Notification};

/// Base URL of the campaign service, fixed at build time.
pub fn campaigns_endpoint() -> &'static str {
    option_env!("MAILBOARD_CAMPAIGNS_URL").unwrap_or("/api/campaigns")
}

/// Base URL of the alerts service, fixed at build time.
pub fn alerts_endpoint() -> &'static str {
    option_env!("MAILBOARD_ALERTS_URL").unwrap_or("/api/alerts")
}

/// User-facing message for a non-success response: the body's `message`
/// field when the server provided one, else a generic status line.
pub fn failure_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(|m| m.as_str())
        .map_or_else(|| format!("HTTP error! status: {status}"), ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
fn with_auth(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let req = req.header("Content-Type", "application/json");
    match crate::util::auth_token::read() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Fetch the full campaign collection from `GET <endpoint>`.
///
/// # Errors
///
/// Returns a message suitable for the page-level error channel on transport
/// failure, non-success status, or a malformed body.
pub async fn fetch_campaigns() -> Result<Vec<Campaign>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(campaigns_endpoint()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err("Failed to fetch campaigns".to_owned());
        }
        let body: CampaignListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Partial-update one campaign: `PATCH <endpoint>/{id}` with the full edited
/// payload as body.
///
/// # Errors
///
/// Prefers the server's `message` body field, else a generic status line.
pub async fn update_campaign(id: &str, payload: &Campaign) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/{id}", campaigns_endpoint());
        let resp = with_auth(gloo_net::http::Request::patch(&url))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(failure_message(resp.status(), body.as_ref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete one campaign: `DELETE <endpoint>/{id}`.
///
/// # Errors
///
/// Returns a generic status message; the caller substitutes the page-level
/// error text.
pub async fn delete_campaign(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/{id}", campaigns_endpoint());
        let resp = with_auth(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP error! status: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Trigger the remote send of one campaign: `POST <endpoint>/{id}/launch`.
/// Fire-and-report; the local list is not touched.
///
/// # Errors
///
/// The message carries the status line so the failure toast can surface it.
pub async fn launch_campaign(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/{id}/launch", campaigns_endpoint());
        let resp = with_auth(gloo_net::http::Request::post(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("{} {}", resp.status(), resp.status_text()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the alert list from the alerts service.
///
/// # Errors
///
/// Same channel conventions as [`fetch_campaigns`].
pub async fn fetch_notifications() -> Result<Vec<crate::net::types::Notification>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(alerts_endpoint()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err("Failed to fetch notifications".to_owned());
        }
        resp.json::<Vec<Notification>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Mark one alert as read: `PATCH <alerts endpoint>/{id}`.
///
/// # Errors
///
/// Returns a generic status message on failure.
pub async fn mark_notification_read(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/{id}", alerts_endpoint());
        let resp = with_auth(gloo_net::http::Request::patch(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP error! status: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
