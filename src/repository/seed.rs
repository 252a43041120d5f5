// file: src/repository/seed.rs
// description: demo catalog used by the explicit seed command
// reference: internal persistence layer

use crate::models::{ContentItem, Corpus, ModelProfile};
use chrono::{DateTime, Utc};

fn ts(value: &str) -> Option<DateTime<Utc>> {
    value.parse().ok()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// A small but representative catalog: featured and plain videos, galleries
/// with shared tags, and the profiles their keywords reference.
pub fn demo_catalog() -> Corpus {
    let videos = vec![
        ContentItem {
            id: "vid-001".to_string(),
            title: "Neon Dreams".to_string(),
            description: Some("A night walk through rain-slicked streets under neon signage.".to_string()),
            keywords: strings(&["neon", "dreams", "alina", "urban", "moody", "editorial"]),
            tags: strings(&["urban", "moody"]),
            models: strings(&["Alina"]),
            date: ts("2026-08-24T18:30:00Z"),
            is_featured: true,
            category: Some("editorial".to_string()),
        },
        ContentItem {
            id: "vid-002".to_string(),
            title: "Rooftop Golden Hour".to_string(),
            description: Some("Sunset portraits above the old harbor district.".to_string()),
            keywords: strings(&["rooftop", "golden", "hour", "elena", "fashion", "portrait"]),
            tags: strings(&["fashion", "studio"]),
            models: strings(&["Elena"]),
            date: ts("2026-07-12T17:00:00Z"),
            is_featured: false,
            category: Some("portrait".to_string()),
        },
        ContentItem {
            id: "vid-003".to_string(),
            title: "Backstage Diaries".to_string(),
            description: Some("Unscripted moments before the runway opens.".to_string()),
            keywords: strings(&["backstage", "diaries", "mira", "runway", "fashion"]),
            tags: strings(&["fashion", "runway"]),
            models: strings(&["Mira", "Elena"]),
            date: ts("2026-08-28T09:15:00Z"),
            is_featured: true,
            category: Some("documentary".to_string()),
        },
        ContentItem {
            id: "vid-004".to_string(),
            title: "Fog Valley Morning".to_string(),
            description: None,
            keywords: strings(&["fog", "valley", "morning", "landscape"]),
            tags: strings(&["nature", "moody"]),
            models: vec![],
            date: ts("2026-03-02T06:45:00Z"),
            is_featured: false,
            category: Some("landscape".to_string()),
        },
    ];

    let galleries = vec![
        ContentItem {
            id: "gal-001".to_string(),
            title: "Neon Streets".to_string(),
            description: Some("Stills from the Neon Dreams shoot.".to_string()),
            keywords: strings(&["neon", "streets", "alina", "urban"]),
            tags: strings(&["urban", "night"]),
            models: strings(&["Alina"]),
            date: ts("2026-08-25T12:00:00Z"),
            is_featured: false,
            category: Some("editorial".to_string()),
        },
        ContentItem {
            id: "gal-002".to_string(),
            title: "Studio Monochrome".to_string(),
            description: Some("Black and white studio session.".to_string()),
            keywords: strings(&["studio", "monochrome", "mira", "fashion", "studio"]),
            tags: strings(&["fashion", "studio"]),
            models: strings(&["Mira"]),
            date: ts("2026-05-19T14:20:00Z"),
            is_featured: false,
            category: Some("studio".to_string()),
        },
        ContentItem {
            id: "gal-003".to_string(),
            title: "Quiet Mornings".to_string(),
            description: None,
            keywords: strings(&["quiet", "mornings", "lifestyle"]),
            tags: strings(&["lifestyle"]),
            models: vec![],
            date: ts("2026-01-08T08:00:00Z"),
            is_featured: false,
            category: Some("lifestyle".to_string()),
        },
    ];

    let models = vec![
        ModelProfile {
            id: "mod-001".to_string(),
            name: "Alina".to_string(),
            description: Some("Editorial and street-style model based in Berlin.".to_string()),
            famous_for: Some("Neon Dreams campaign".to_string()),
            instagram: Some("@alina.frames".to_string()),
        },
        ModelProfile {
            id: "mod-002".to_string(),
            name: "Elena".to_string(),
            description: Some("Portrait specialist, golden-hour work.".to_string()),
            famous_for: None,
            instagram: Some("@elena.gold".to_string()),
        },
        ModelProfile {
            id: "mod-003".to_string(),
            name: "Mira".to_string(),
            description: None,
            famous_for: Some("Runway seasons 2024-2026".to_string()),
            instagram: None,
        },
    ];

    Corpus {
        videos,
        galleries,
        models,
    }
}
