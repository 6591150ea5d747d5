// EventHubApiClient - typed facade over the EventHub HTTP API

use reqwest::multipart::{Form, Part};
use tracing::warn;

use eventhub_api::{
    AdminStats, Event, EventCreate, EventFilters, EventUpdate, InternshipSlot, ScrapeReport,
    SlotFilters, Token, UserRead, validate_credentials, validate_resume,
};

use crate::{
    constants::{api_path, timeouts},
    error::{ClientError, Result},
    http::{EventHubHttpClient, HttpClientConfig},
};

/// A resume file staged for upload, validated before any request is sent
#[derive(Clone, Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(filename: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }
}

/// Typed client for the EventHub backend
pub struct EventHubApiClient {
    http_client: EventHubHttpClient,
}

impl EventHubApiClient {
    /// Create a new API client with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let http_client = EventHubHttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Create a new API client for a backend base URL
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(HttpClientConfig::new(base_url))
    }

    /// Get the underlying HTTP client
    pub fn http_client(&self) -> &EventHubHttpClient {
        &self.http_client
    }

    // ============== Event APIs ==============

    /// List events matching the given filters
    ///
    /// Bounded by the fixed 10 second collection ceiling regardless of the
    /// client-wide read timeout. Read-path callers normally wrap this in the
    /// resilient fetcher rather than handling the error themselves.
    pub async fn events_list(&self, filters: &EventFilters) -> Result<Vec<Event>> {
        self.http_client
            .get_with_query_with_timeout(api_path::EVENTS, filters, timeouts::COLLECTION_FETCH)
            .await
    }

    /// Look up a single event; `None` when the backend reports 404
    pub async fn event_get(&self, id: i64) -> Result<Option<Event>> {
        match self.http_client.get::<Event>(&api_path::event(id)).await {
            Ok(event) => Ok(Some(event)),
            Err(ClientError::RequestFailed { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create an event (organizer/admin only)
    pub async fn event_create(&self, event: &EventCreate) -> Result<Event> {
        self.http_client.post_json(api_path::EVENTS, event).await
    }

    /// Partially update an event
    pub async fn event_update(&self, id: i64, update: &EventUpdate) -> Result<Event> {
        self.http_client
            .patch_json(&api_path::event(id), update)
            .await
    }

    /// Trigger an out-of-band ingestion run across all scraper sources
    ///
    /// Long-running; bounded by the 60 second scrape timeout. A transport
    /// failure is reported inline as a failed [`ScrapeReport`], not an error.
    pub async fn scrape_now(&self) -> ScrapeReport {
        let result: Result<ScrapeReport> = self
            .http_client
            .post_json_with_timeout(
                api_path::EVENTS_SCRAPE_NOW,
                &serde_json::json!({}),
                timeouts::SCRAPE,
            )
            .await;
        match result {
            Ok(report) => report,
            Err(e) => {
                warn!("scrape-now failed: {}", e);
                ScrapeReport::failed(e.to_string())
            }
        }
    }

    // ============== Internship APIs ==============

    /// List internship slots matching the given filters
    pub async fn slots_list(&self, filters: &SlotFilters) -> Result<Vec<InternshipSlot>> {
        self.http_client
            .get_with_query(api_path::INTERNSHIP_SLOTS, filters)
            .await
    }

    // ============== Auth APIs ==============

    /// Log in with form-encoded credentials and store the returned token pair
    pub async fn login(&self, username: &str, password: &str) -> Result<Token> {
        let token: Token = self
            .http_client
            .post_form_with_timeout(
                api_path::AUTH_LOGIN,
                &[("username", username), ("password", password)],
                timeouts::LOGIN,
            )
            .await
            .map_err(|e| match e {
                ClientError::Unauthorized { .. } => {
                    ClientError::AuthFailed("invalid credentials".to_string())
                }
                other => other,
            })?;

        self.http_client
            .set_tokens(token.access_token.clone(), token.refresh_token.clone());
        Ok(token)
    }

    /// Register a new user with a mandatory resume upload
    ///
    /// Credentials and the resume are validated locally first; on a
    /// validation failure no request is sent. After a successful
    /// registration a login is attempted so the session starts
    /// authenticated; a failed auto-login does not fail the registration.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        resume: &ResumeUpload,
    ) -> Result<UserRead> {
        validate_credentials(email, password)?;
        validate_resume(&resume.filename, &resume.content_type, resume.bytes.len())?;

        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.filename.clone())
            .mime_str(&resume.content_type)?;
        let form = Form::new()
            .text("email", email.to_string())
            .text("password", password.to_string())
            .part("resume", part);

        let user: UserRead = self
            .http_client
            .post_multipart_with_timeout(api_path::AUTH_REGISTER, form, timeouts::LOGIN)
            .await?;

        if let Err(e) = self.login(email, password).await {
            warn!("auto-login after registration failed: {}", e);
        }
        Ok(user)
    }

    /// Drop the stored token pair; no server call is involved
    pub fn logout(&self) {
        self.http_client.clear_tokens();
    }

    /// True when a token pair is held
    pub fn is_authenticated(&self) -> bool {
        self.http_client.is_authenticated()
    }

    // ============== Admin APIs ==============
    // All require a bearer token; 401/403 surface as ClientError::Unauthorized
    // so the caller can route back to login.

    /// System statistics
    pub async fn admin_stats(&self) -> Result<AdminStats> {
        self.http_client.get(api_path::ADMIN_STATS).await
    }

    /// All registered users
    pub async fn admin_users(&self) -> Result<Vec<UserRead>> {
        self.http_client.get(api_path::ADMIN_USERS).await
    }

    /// All events, including unpublished ones
    pub async fn admin_events(&self) -> Result<Vec<Event>> {
        self.http_client.get(api_path::ADMIN_EVENTS).await
    }
}
