// core/marketplace/src/display.rs

use chrono::{DateTime, Utc};

/// Relative upload time as shown on item cards
pub fn format_time_ago(uploaded_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - uploaded_at).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Distance with one decimal, e.g. "1.2 km"
pub fn format_distance(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}
