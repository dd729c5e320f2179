//! REST API Client
//!
//! Thin wrappers over the browser fetch API, one function per backend
//! route. Read endpoints return the `{ data: ... }` envelope unwrapped;
//! mutating endpoints take the bearer header produced by the session
//! guard. The API is the sole authority on token validity — a 401/403
//! surfaces as `ApiError::Unauthorized` and is never retried here.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config;
use crate::models::{Banner, Document, Event, Member, Project, User};

/// Failure classes the UI branches on
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure: server unreachable, request aborted
    Network,
    /// 401/403 — the token was rejected
    Unauthorized,
    /// Any other non-2xx, with the API's message when it sent one
    Api { status: u16, message: String },
    /// 2xx with a body we could not decode
    Decode,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network => write!(f, "Cannot reach the server"),
            ApiError::Unauthorized => write!(f, "Your session has expired"),
            ApiError::Api { message, .. } => write!(f, "{message}"),
            ApiError::Decode => write!(f, "Unexpected response from the server"),
        }
    }
}

/// Read-endpoint envelope
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Error body shape shared by all endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of an event registration attempt the caller must branch on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegisterOutcome {
    Registered,
    AlreadyRegistered,
    CapacityFull,
}

/// Map a registration response to its outcome. Registration failures with
/// a known code are outcomes, not errors: the UI shows a warning for a
/// duplicate and an error for a full event, and only unknown failures
/// propagate as `ApiError`.
pub fn parse_register_outcome(
    ok: bool,
    status: u16,
    body: &ErrorBody,
) -> Result<RegisterOutcome, ApiError> {
    if ok {
        return Ok(RegisterOutcome::Registered);
    }
    match body.error.as_deref() {
        Some("IP_ALREADY_REGISTERED") => Ok(RegisterOutcome::AlreadyRegistered),
        Some("FULL_CAPACITY") => Ok(RegisterOutcome::CapacityFull),
        _ => Err(ApiError::Api {
            status,
            message: body
                .message
                .clone()
                .unwrap_or_else(|| "Registration failed".to_string()),
        }),
    }
}

// ========================
// Fetch plumbing
// ========================

/// Lowest layer: run the request, return (status, ok, parsed JSON body).
/// Only transport and JSON-parse failures error here.
async fn fetch_json(
    method: &str,
    url: &str,
    body: Option<String>,
    auth: Option<&str>,
) -> Result<(u16, bool, JsValue), ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(payload) = body {
        opts.set_body(&JsValue::from_str(&payload));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::Network)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::Network)?;
    headers
        .set("Accept", "application/json")
        .map_err(|_| ApiError::Network)?;
    if let Some(header) = auth {
        headers
            .set("Authorization", header)
            .map_err(|_| ApiError::Network)?;
    }

    let window = web_sys::window().ok_or(ApiError::Network)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Network)?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::Network)?;

    let status = response.status();
    let ok = response.ok();
    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    };
    Ok((status, ok, json))
}

/// Standard layer: classify non-2xx responses into the error taxonomy.
async fn request(
    method: &str,
    path: &str,
    body: Option<String>,
    auth: Option<&str>,
) -> Result<JsValue, ApiError> {
    let url = format!("{}{}", config::api_url(), path);
    let (status, ok, json) = fetch_json(method, &url, body, auth).await?;
    if ok {
        return Ok(json);
    }
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized);
    }
    let error_body: ErrorBody = serde_wasm_bindgen::from_value(json).unwrap_or_default();
    Err(ApiError::Api {
        status,
        message: error_body
            .message
            .or(error_body.error)
            .unwrap_or_else(|| format!("Request failed ({status})")),
    })
}

fn decode<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, ApiError> {
    serde_wasm_bindgen::from_value(value).map_err(|_| ApiError::Decode)
}

fn encode<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|_| ApiError::Decode)
}

async fn get_list<T: for<'de> Deserialize<'de>>(path: &str) -> Result<Vec<T>, ApiError> {
    let json = request("GET", path, None, None).await?;
    let envelope: DataEnvelope<Vec<T>> = decode(json)?;
    Ok(envelope.data)
}

// ========================
// Auth
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = encode(&LoginArgs { username, password })?;
    let json = request("POST", "/auth/login", Some(body), None).await?;
    decode(json)
}

// ========================
// Public reads
// ========================

pub async fn list_documents() -> Result<Vec<Document>, ApiError> {
    get_list("/documents").await
}

pub async fn list_events() -> Result<Vec<Event>, ApiError> {
    get_list("/events").await
}

pub async fn get_event(id: u32) -> Result<Event, ApiError> {
    let json = request("GET", &format!("/events/{id}"), None, None).await?;
    let envelope: DataEnvelope<Event> = decode(json)?;
    Ok(envelope.data)
}

pub async fn list_members() -> Result<Vec<Member>, ApiError> {
    get_list("/members").await
}

pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    get_list("/projects").await
}

pub async fn list_banners() -> Result<Vec<Banner>, ApiError> {
    get_list("/banners").await
}

// ========================
// Events: registration + download counters
// ========================

pub async fn register_event(id: u32) -> Result<RegisterOutcome, ApiError> {
    let url = format!("{}/events/{id}/register", config::api_url());
    let (status, ok, json) = fetch_json("POST", &url, None, None).await?;
    let body: ErrorBody = serde_wasm_bindgen::from_value(json).unwrap_or_default();
    parse_register_outcome(ok, status, &body)
}

/// Bump the download counter. Fire-and-forget: the caller opens the file
/// regardless of whether the bump landed.
pub async fn bump_download(id: u32) {
    let _ = request("GET", &format!("/documents/{id}/download"), None, None).await;
}

// ========================
// Visitor IP (external service)
// ========================

#[derive(Deserialize)]
struct IpResponse {
    ip: String,
}

pub async fn fetch_visitor_ip() -> Result<String, ApiError> {
    let (_, ok, json) = fetch_json("GET", "https://api.ipify.org?format=json", None, None).await?;
    if !ok {
        return Err(ApiError::Network);
    }
    let body: IpResponse = decode(json)?;
    Ok(body.ip)
}

// ========================
// Admin: banners
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct BannerPayload {
    pub title: String,
    pub image: String,
    pub order: u32,
    pub active: bool,
}

pub async fn create_banner(payload: &BannerPayload, auth: &str) -> Result<Banner, ApiError> {
    let json = request("POST", "/banners", Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Banner> = decode(json)?;
    Ok(envelope.data)
}

pub async fn update_banner(id: u32, payload: &BannerPayload, auth: &str) -> Result<Banner, ApiError> {
    let json = request("PUT", &format!("/banners/{id}"), Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Banner> = decode(json)?;
    Ok(envelope.data)
}

pub async fn delete_banner(id: u32, auth: &str) -> Result<(), ApiError> {
    request("DELETE", &format!("/banners/{id}"), None, Some(auth)).await?;
    Ok(())
}

// ========================
// Admin: events
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub status: String,
    pub image: String,
    #[serde(rename = "maxParticipants")]
    pub max_participants: u32,
    pub organizer: String,
    #[serde(rename = "googleFormUrl")]
    pub google_form_url: String,
}

pub async fn create_event(payload: &EventPayload, auth: &str) -> Result<Event, ApiError> {
    let json = request("POST", "/events", Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Event> = decode(json)?;
    Ok(envelope.data)
}

pub async fn update_event(id: u32, payload: &EventPayload, auth: &str) -> Result<Event, ApiError> {
    let json = request("PUT", &format!("/events/{id}"), Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Event> = decode(json)?;
    Ok(envelope.data)
}

pub async fn delete_event(id: u32, auth: &str) -> Result<(), ApiError> {
    request("DELETE", &format!("/events/{id}"), None, Some(auth)).await?;
    Ok(())
}

// ========================
// Admin: members
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct MemberPayload {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub team: String,
    pub department: String,
    pub year: Option<String>,
    pub skills: Vec<String>,
    pub links: crate::models::MemberLinks,
}

pub async fn create_member(payload: &MemberPayload, auth: &str) -> Result<Member, ApiError> {
    let json = request("POST", "/members", Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Member> = decode(json)?;
    Ok(envelope.data)
}

pub async fn update_member(id: u32, payload: &MemberPayload, auth: &str) -> Result<Member, ApiError> {
    let json = request("PUT", &format!("/members/{id}"), Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Member> = decode(json)?;
    Ok(envelope.data)
}

pub async fn delete_member(id: u32, auth: &str) -> Result<(), ApiError> {
    request("DELETE", &format!("/members/{id}"), None, Some(auth)).await?;
    Ok(())
}

// ========================
// Admin: projects
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub progress: u32,
    #[serde(rename = "teamSize")]
    pub team_size: u32,
    pub technologies: Vec<String>,
    pub links: crate::models::ProjectLinks,
    pub details: String,
}

pub async fn create_project(payload: &ProjectPayload, auth: &str) -> Result<Project, ApiError> {
    let json = request("POST", "/projects", Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Project> = decode(json)?;
    Ok(envelope.data)
}

pub async fn update_project(id: u32, payload: &ProjectPayload, auth: &str) -> Result<Project, ApiError> {
    let json = request("PUT", &format!("/projects/{id}"), Some(encode(payload)?), Some(auth)).await?;
    let envelope: DataEnvelope<Project> = decode(json)?;
    Ok(envelope.data)
}

pub async fn delete_project(id: u32, auth: &str) -> Result<(), ApiError> {
    request("DELETE", &format!("/projects/{id}"), None, Some(auth)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_outcome_success() {
        let outcome = parse_register_outcome(true, 200, &ErrorBody::default());
        assert_eq!(outcome, Ok(RegisterOutcome::Registered));
    }

    #[test]
    fn test_register_outcome_duplicate_is_a_warning_not_an_error() {
        let body = ErrorBody {
            error: Some("IP_ALREADY_REGISTERED".to_string()),
            message: None,
        };
        let outcome = parse_register_outcome(false, 409, &body);
        assert_eq!(outcome, Ok(RegisterOutcome::AlreadyRegistered));
    }

    #[test]
    fn test_register_outcome_capacity_full() {
        let body = ErrorBody {
            error: Some("FULL_CAPACITY".to_string()),
            message: None,
        };
        let outcome = parse_register_outcome(false, 409, &body);
        assert_eq!(outcome, Ok(RegisterOutcome::CapacityFull));
    }

    #[test]
    fn test_register_outcome_unknown_failure_propagates_message() {
        let body = ErrorBody {
            error: Some("SOMETHING_ELSE".to_string()),
            message: Some("event closed".to_string()),
        };
        match parse_register_outcome(false, 400, &body) {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "event closed");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_display_is_user_facing() {
        assert_eq!(ApiError::Network.to_string(), "Cannot reach the server");
        let api = ApiError::Api {
            status: 422,
            message: "name is required".to_string(),
        };
        assert_eq!(api.to_string(), "name is required");
    }
}
