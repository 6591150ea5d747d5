// API path and timeout constants for the EventHub backend

pub mod api_path {
    // Events
    pub const EVENTS: &str = "/events/";
    pub const EVENTS_SCRAPE_NOW: &str = "/events/scrape-now";

    // Internship
    pub const INTERNSHIP_SLOTS: &str = "/internship/slots";

    // Auth
    pub const AUTH_LOGIN: &str = "/auth/login";
    pub const AUTH_REGISTER: &str = "/auth/register";

    // Admin
    pub const ADMIN_STATS: &str = "/admin/stats";
    pub const ADMIN_USERS: &str = "/admin/users";
    pub const ADMIN_EVENTS: &str = "/admin/events";

    /// Path for a single event lookup/update
    pub fn event(id: i64) -> String {
        format!("/events/{}", id)
    }
}

pub mod timeouts {
    use std::time::Duration;

    /// Ceiling for a collection fetch; on expiry the fetcher serves fallback
    pub const COLLECTION_FETCH: Duration = Duration::from_secs(10);

    /// Login and registration submissions fail fast
    pub const LOGIN: Duration = Duration::from_secs(3);

    /// Scrape-now is a long-running ingestion batch
    pub const SCRAPE: Duration = Duration::from_secs(60);
}
