//! Business-day cutoff windowing.
//!
//! The kitchen's "business day" starts at 06:00 local time, not at
//! midnight: an order placed at 02:00 still belongs to the previous
//! evening's service. The admin order listing partitions orders into
//! "current" and "previous" around that cutoff.
//!
//! This window definition is intentionally different from the financial
//! report bucketing in [`crate::reports`], which uses midnight-aligned
//! local calendar buckets. Both must be preserved as-is.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::America::Sao_Paulo;
use serde::{Deserialize, Serialize};

/// Local hour at which a new business day starts.
pub const BUSINESS_DAY_START_HOUR: u32 = 6;

/// The start of the current business day, as a UTC instant.
///
/// Before 06:00 local the business day started at 06:00 *yesterday*;
/// from 06:00 onwards it started at 06:00 today. Local time is
/// America/Sao_Paulo; Brazil has not observed DST since 2019, so 06:00
/// exists on every calendar day.
#[must_use]
pub fn business_day_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    let local = now.with_timezone(&Sao_Paulo);

    let mut day = local.date_naive();
    if local.hour() < BUSINESS_DAY_START_HOUR
        && let Some(previous) = day.pred_opt()
    {
        day = previous;
    }

    day.and_hms_opt(BUSINESS_DAY_START_HOUR, 0, 0)
        .and_then(|naive| Sao_Paulo.from_local_datetime(&naive).earliest())
        .map_or(now, |cutoff| cutoff.with_timezone(&Utc))
}

/// Which slice of the order history a listing request wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderWindow {
    /// Orders created at or after the business-day cutoff.
    #[default]
    Current,
    /// Orders created before the cutoff.
    Previous,
    /// No time filter.
    All,
}

impl OrderWindow {
    /// Whether an order created at `created_at` falls inside this window,
    /// relative to `now`.
    #[must_use]
    pub fn contains(self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Current => created_at >= business_day_cutoff(now),
            Self::Previous => created_at < business_day_cutoff(now),
        }
    }
}

impl std::str::FromStr for OrderWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "previous" => Ok(Self::Previous),
            "all" => Ok(Self::All),
            _ => Err(format!("invalid order window: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a UTC instant from São Paulo wall-clock time.
    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Sao_Paulo
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("valid local time")
            .with_timezone(&Utc)
    }

    #[test]
    fn cutoff_is_six_local_today_after_six() {
        let now = local(2026, 8, 25, 10, 30);
        assert_eq!(business_day_cutoff(now), local(2026, 8, 25, 6, 0));
    }

    #[test]
    fn cutoff_is_six_local_yesterday_before_six() {
        let now = local(2026, 8, 25, 4, 59);
        assert_eq!(business_day_cutoff(now), local(2026, 8, 24, 6, 0));
    }

    #[test]
    fn cutoff_at_exactly_six_belongs_to_today() {
        let now = local(2026, 8, 25, 6, 0);
        assert_eq!(business_day_cutoff(now), local(2026, 8, 25, 6, 0));
    }

    #[test]
    fn five_am_order_is_previous_seven_am_order_is_current() {
        // Orders dated today at 05:00 and 07:00 local, with the 06:00
        // cutoff: the 05:00 order belongs to "previous", the 07:00 to
        // "current".
        let now = local(2026, 8, 25, 12, 0);
        let at_five = local(2026, 8, 25, 5, 0);
        let at_seven = local(2026, 8, 25, 7, 0);

        assert!(OrderWindow::Previous.contains(at_five, now));
        assert!(!OrderWindow::Current.contains(at_five, now));
        assert!(OrderWindow::Current.contains(at_seven, now));
        assert!(!OrderWindow::Previous.contains(at_seven, now));
        assert!(OrderWindow::All.contains(at_five, now));
        assert!(OrderWindow::All.contains(at_seven, now));
    }

    #[test]
    fn window_parses_from_query_values() {
        assert_eq!("current".parse::<OrderWindow>(), Ok(OrderWindow::Current));
        assert_eq!("previous".parse::<OrderWindow>(), Ok(OrderWindow::Previous));
        assert_eq!("all".parse::<OrderWindow>(), Ok(OrderWindow::All));
        assert!("yesterday".parse::<OrderWindow>().is_err());
    }
}
