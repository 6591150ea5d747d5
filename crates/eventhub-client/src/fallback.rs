//! Bundled sample events served when the live backend is unreachable
//!
//! One shared fixture for every consumer of the events collection. The
//! records mirror real Astana Hub / Nazarbayev University listings so a
//! degraded catalog still looks like a catalog.

use chrono::{Duration, Utc};

use eventhub_api::{Event, EventType};

use crate::fetcher::FallbackDataset;

fn event(
    id: i64,
    title: &str,
    description: &str,
    r#type: EventType,
    city: Option<&str>,
    is_online: bool,
    date_start: String,
    date_end: Option<String>,
    banner: &str,
    source_url: &str,
    tags: &[&str],
) -> Event {
    let now = Utc::now().to_rfc3339();
    Event {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        r#type,
        city: city.map(str::to_string),
        is_online,
        date_start,
        date_end,
        organizer_id: None,
        banner: Some(banner.to_string()),
        requirements: None,
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        source: None,
        source_url: Some(source_url.to_string()),
        created_at: now.clone(),
        updated_at: now,
    }
}

const ASTANA_HUB_LOGO: &str = "https://astanahub.com/static/images/logo.svg";
const NU_LOGO: &str = "https://upload.wikimedia.org/wikipedia/en/thumb/4/4a/Nazarbayev_University_logo.svg/200px-Nazarbayev_University_logo.svg.png";

/// The bundled events dataset
///
/// Built once at startup and held immutable for the process lifetime.
pub fn sample_events() -> FallbackDataset<Event> {
    let in_days = |d: i64| (Utc::now() + Duration::days(d)).to_rfc3339();

    FallbackDataset::new(vec![
        event(
            1,
            "Become a Scrum master in 2 days",
            "At Scrum School by Astana Hub you will master Scrum and Agile \
             methodologies to run teams and projects the way leading IT companies do.",
            EventType::Seminar,
            Some("Astana"),
            true,
            "2025-11-28T09:00:00+00:00".to_string(),
            Some("2025-11-29T13:00:00+00:00".to_string()),
            ASTANA_HUB_LOGO,
            "https://astanahub.com/en/event/stan-scrum-masterom-za-2-dnia",
            &["Scrum", "Agile", "Management"],
        ),
        event(
            2,
            "Pizza Pitch!",
            "Startup at MVP stage or later? Pitch your project to experts and \
             investors and compete for a 1,500,000 KZT prize pool.",
            EventType::Tournament,
            Some("Astana"),
            false,
            "2025-11-18T15:00:00+00:00".to_string(),
            None,
            ASTANA_HUB_LOGO,
            "https://astanahub.com/en/event/pizza-pitch1763379282",
            &["Startup", "Pitching", "Investment"],
        ),
        event(
            3,
            "IT Queen: your project deserves the crown",
            "A competition for women founders and startups at MVP stage. \
             Pitching in front of experts, mentors, and investors.",
            EventType::Tournament,
            Some("Astana"),
            false,
            "2025-11-28T15:30:00+00:00".to_string(),
            None,
            ASTANA_HUB_LOGO,
            "https://astanahub.com/en/event/it-queen-tvoi-proekt-zasluzhivaet-koronu1762510308",
            &["Startup", "Women", "Competition"],
        ),
        event(
            4,
            "Workshop: turn chaos into order with Notion in 2 hours",
            "Starting from a blank page, we will assemble your personal \
             life-and-task management system live.",
            EventType::Seminar,
            None,
            true,
            "2025-11-28T15:00:00+00:00".to_string(),
            Some("2025-11-28T17:00:00+00:00".to_string()),
            ASTANA_HUB_LOGO,
            "https://astanahub.com/en/event/vorkshop-prevrati-khaos-v-poriadok",
            &["Notion", "Productivity", "Workshop"],
        ),
        event(
            5,
            "How to design an application that survives a million users",
            "A master class by Vlad Mishustin, founder of Warpflow and former CTO.",
            EventType::Seminar,
            None,
            true,
            "2025-11-26T16:00:00+00:00".to_string(),
            None,
            ASTANA_HUB_LOGO,
            "https://astanahub.com/en/event/demo-day-market-entry-accelerator",
            &["Development", "Architecture", "Scaling"],
        ),
        event(
            6,
            "HackNU 2025 - the largest hackathon in Kazakhstan",
            "The annual Nazarbayev University hackathon. Build innovative \
             solutions in AI, HealthTech, and FinTech.",
            EventType::Hackathon,
            Some("Astana"),
            false,
            in_days(30),
            Some(in_days(32)),
            NU_LOGO,
            "https://nu.edu.kz/hackathon",
            &["AI", "HealthTech", "FinTech", "NU"],
        ),
        event(
            7,
            "Astana Hub Startup Day",
            "Open doors and startup pitches at Astana Hub. Present your \
             project to experts and investors.",
            EventType::Tournament,
            Some("Astana"),
            false,
            in_days(15),
            None,
            ASTANA_HUB_LOGO,
            "https://astanahub.com",
            &["Startup", "Pitching", "Astana Hub"],
        ),
    ])
}
