//! Wire models for the EventHub backend
//!
//! Field names follow the backend's snake_case JSON contract. Timestamps are
//! carried as the RFC 3339 strings the backend emits; the client never
//! interprets them beyond display.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a published event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Hackathon,
    Quest,
    Tournament,
    Seminar,
    Meetup,
    Lecture,
    Workshop,
    #[default]
    Other,
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventType::Hackathon => "hackathon",
            EventType::Quest => "quest",
            EventType::Tournament => "tournament",
            EventType::Seminar => "seminar",
            EventType::Meetup => "meetup",
            EventType::Lecture => "lecture",
            EventType::Workshop => "workshop",
            EventType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// A published event record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub r#type: EventType,
    pub city: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    pub date_start: String,
    pub date_end: Option<String>,
    #[serde(default)]
    pub organizer_id: Option<i64>,
    pub banner: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Sort order for event list queries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSort {
    Upcoming,
    Newest,
    Oldest,
}

/// Query filters for `GET /events/`
///
/// `None` fields are omitted from the query string. The UI's "all" sentinel
/// maps to `None` here; it is not a wire value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<EventSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

/// Payload for `POST /events/`
#[derive(Clone, Debug, Default, Serialize)]
pub struct EventCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub r#type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub is_online: bool,
    pub date_start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Partial payload for `PATCH /events/{id}`; absent fields are left untouched
#[derive(Clone, Debug, Default, Serialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// An internship slot record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InternshipSlot {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    pub slot_start: String,
    pub slot_end: String,
    pub duration_hours: i64,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub payment: Option<f64>,
    #[serde(default)]
    pub bonus: Option<String>,
    pub status: String,
    pub company_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Query filters for `GET /internship/slots`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SlotFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Token pair returned by `POST /auth/login`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// User record returned by registration and admin listings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i64,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub resume_path: Option<String>,
    pub created_at: String,
}

/// User counters from `GET /admin/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: i64,
    pub active: i64,
}

/// Event counters from `GET /admin/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub total: i64,
}

/// System statistics from `GET /admin/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub users: UserStats,
    pub events: EventStats,
}

/// Outcome of `POST /events/scrape-now`: per-source ingestion counts
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub results: HashMap<String, i64>,
    #[serde(default)]
    pub total: i64,
}

impl ScrapeReport {
    /// Report for a scrape request that never reached the backend
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            results: HashMap::new(),
            total: 0,
        }
    }
}

/// A renderable collection as handed to a consumer
///
/// `total` always equals `items.len()`; it is not a server-reported count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> CollectionPage<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for CollectionPage<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&EventType::Hackathon).unwrap(),
            "\"hackathon\""
        );
        let t: EventType = serde_json::from_str("\"tournament\"").unwrap();
        assert_eq!(t, EventType::Tournament);
        assert_eq!(EventType::default(), EventType::Other);
    }

    #[test]
    fn test_event_deserialize_backend_payload() {
        let json = r#"{
            "id": 6,
            "title": "HackNU 2025",
            "description": "Annual hackathon",
            "type": "hackathon",
            "city": "Astana",
            "is_online": false,
            "date_start": "2025-12-01T09:00:00",
            "date_end": "2025-12-03T18:00:00",
            "organizer_id": null,
            "banner": null,
            "requirements": null,
            "tags": ["AI", "FinTech"],
            "source": "nu",
            "source_url": "https://nu.edu.kz/hackathon",
            "created_at": "2025-11-01T00:00:00",
            "updated_at": "2025-11-01T00:00:00"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 6);
        assert_eq!(event.r#type, EventType::Hackathon);
        assert_eq!(event.tags.as_deref(), Some(&["AI".to_string(), "FinTech".to_string()][..]));
    }

    #[test]
    fn test_event_filters_query_encoding() {
        let filters = EventFilters {
            query: Some("hack".to_string()),
            r#type: Some(EventType::Hackathon),
            is_online: Some(true),
            sort: Some(EventSort::Upcoming),
            date_from: NaiveDate::from_ymd_opt(2025, 11, 1),
            date_to: None,
        };
        let qs = serde_urlencoded::to_string(&filters).unwrap();
        assert_eq!(
            qs,
            "query=hack&type=hackathon&is_online=true&sort=upcoming&date_from=2025-11-01"
        );
    }

    #[test]
    fn test_event_filters_default_encodes_empty() {
        let qs = serde_urlencoded::to_string(&EventFilters::default()).unwrap();
        assert!(qs.is_empty());
    }

    #[test]
    fn test_event_update_skips_absent_fields() {
        let update = EventUpdate {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"New title"}"#);
    }

    #[test]
    fn test_collection_page_total_tracks_len() {
        let page = CollectionPage::new(vec![1, 2, 3]);
        assert_eq!(page.total, 3);
        assert_eq!(page.total, page.items.len());

        let empty: CollectionPage<i32> = CollectionPage::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.total, 0);
    }

    #[test]
    fn test_token_default_type() {
        let token: Token =
            serde_json::from_str(r#"{"access_token":"a","refresh_token":"r"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_scrape_report_failed() {
        let report = ScrapeReport::failed("connection refused");
        assert!(!report.success);
        assert!(report.results.is_empty());
        assert_eq!(report.total, 0);
    }
}
