use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::TimeError;

/// Current local time for a matched destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeInfo {
    pub location: String,
    pub time: String,
}

/// Timezone used for the time banner of a destination, picked from the
/// country named in the destination's label.
pub fn timezone_for(name: &str) -> Option<&'static str> {
    if name.contains("Australia") {
        Some("Australia/Sydney")
    } else if name.contains("Japan") {
        Some("Asia/Tokyo")
    } else if name.contains("Brazil") {
        Some("America/Sao_Paulo")
    } else {
        None
    }
}

/// Format the current time in `timezone_id` as `hh:mm:ss AM`.
pub fn resolve_time(timezone_id: &str, location: &str) -> Result<TimeInfo, TimeError> {
    resolve_time_at(timezone_id, location, Utc::now())
}

pub fn resolve_time_at(
    timezone_id: &str,
    location: &str,
    now: DateTime<Utc>,
) -> Result<TimeInfo, TimeError> {
    let tz: Tz = timezone_id
        .parse()
        .map_err(|_| TimeError::InvalidTimezone(timezone_id.to_string()))?;

    Ok(TimeInfo {
        location: location.to_string(),
        time: now.with_timezone(&tz).format("%I:%M:%S %p").to_string(),
    })
}
