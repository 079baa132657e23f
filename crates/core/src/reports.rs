//! Financial revenue/count bucketing for the dashboard.
//!
//! Given a period selector, the aggregator buckets every non-cancelled
//! order by its creation date into a pre-initialized zero-filled series:
//! hour-of-day for `day`, `dd/mm` dates for `week`/`month`, pt-BR month
//! labels for `year`. Buckets are aligned to local (America/Sao_Paulo)
//! calendar midnights - deliberately not the 06:00 business-day cutoff
//! used by the order listing in [`crate::business_day`].

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use chrono_tz::America::Sao_Paulo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("invalid report period: {s}")),
        }
    }
}

/// The slice of an order the aggregator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenuePoint {
    pub created_at: DateTime<Utc>,
    pub total: Decimal,
}

/// One bucket of the revenue series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub total: Decimal,
}

/// Aggregated dashboard figures for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub period: Period,
    pub total_revenue: Decimal,
    pub total_orders: u64,
    /// Zero-filled series in chronological order, even when empty.
    pub series: Vec<Bucket>,
}

/// pt-BR abbreviated month names, used as year-period bucket labels.
const PT_BR_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Year-period lookback: a little over one year, so the oldest labelled
/// month is fully covered regardless of day-of-month.
const YEAR_LOOKBACK_MS: i64 = 34_689_600_000;

fn month_label(months_since_epoch: i32) -> String {
    let idx = usize::try_from(months_since_epoch.rem_euclid(12)).unwrap_or(0);
    PT_BR_MONTHS.get(idx).copied().unwrap_or("jan").to_string()
}

/// Aggregate orders into the zero-filled series for `period`.
///
/// Callers pass only non-cancelled orders; cancelled orders never count
/// towards revenue. `now` anchors the lookback window and "today".
#[must_use]
pub fn financial_report(period: Period, orders: &[RevenuePoint], now: DateTime<Utc>) -> FinancialReport {
    let local_now = now.with_timezone(&Sao_Paulo);
    let today = local_now.date_naive();

    let mut series: Vec<Bucket> = match period {
        Period::Day => (0..24)
            .map(|hour| Bucket {
                label: format!("{hour:02}:00"),
                total: Decimal::ZERO,
            })
            .collect(),
        Period::Week | Period::Month => {
            let days: i64 = if period == Period::Week { 7 } else { 30 };
            (0..days)
                .rev()
                .map(|back| Bucket {
                    label: (today - Duration::days(back)).format("%d/%m").to_string(),
                    total: Decimal::ZERO,
                })
                .collect()
        }
        Period::Year => {
            let current = local_now.year() * 12 + i32::try_from(local_now.month0()).unwrap_or(0);
            (0..12)
                .rev()
                .map(|back| Bucket {
                    label: month_label(current - back),
                    total: Decimal::ZERO,
                })
                .collect()
        }
    };

    let mut total_revenue = Decimal::ZERO;
    let mut total_orders: u64 = 0;

    for order in orders {
        let local = order.created_at.with_timezone(&Sao_Paulo);
        let age = now.signed_duration_since(order.created_at);

        let key = match period {
            Period::Day => {
                if local.date_naive() == today {
                    Some(format!("{:02}:00", local.hour()))
                } else {
                    None
                }
            }
            Period::Week | Period::Month => {
                let limit: i64 = if period == Period::Week { 7 } else { 30 };
                if age >= Duration::zero() && age <= Duration::days(limit) {
                    Some(local.date_naive().format("%d/%m").to_string())
                } else {
                    None
                }
            }
            Period::Year => {
                if age >= Duration::zero() && age.num_milliseconds() < YEAR_LOOKBACK_MS {
                    let months = local.year() * 12 + i32::try_from(local.month0()).unwrap_or(0);
                    Some(month_label(months))
                } else {
                    None
                }
            }
        };

        // An order only counts when it lands in an existing bucket.
        if let Some(key) = key
            && let Some(bucket) = series.iter_mut().find(|b| b.label == key)
        {
            bucket.total += order.total;
            total_revenue += order.total;
            total_orders += 1;
        }
    }

    FinancialReport {
        period,
        total_revenue,
        total_orders,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Sao_Paulo
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .expect("valid local time")
            .with_timezone(&Utc)
    }

    fn point(created_at: DateTime<Utc>, total_cents: i64) -> RevenuePoint {
        RevenuePoint {
            created_at,
            total: Decimal::new(total_cents, 2),
        }
    }

    #[test]
    fn week_report_has_exactly_seven_zero_buckets_when_empty() {
        let now = local(2026, 8, 25, 15);
        let report = financial_report(Period::Week, &[], now);

        assert_eq!(report.series.len(), 7);
        assert!(report.series.iter().all(|b| b.total == Decimal::ZERO));
        assert_eq!(report.total_revenue, Decimal::ZERO);
        assert_eq!(report.total_orders, 0);
        // Oldest first, ending today (25/08).
        assert_eq!(report.series.first().map(|b| b.label.as_str()), Some("19/08"));
        assert_eq!(report.series.last().map(|b| b.label.as_str()), Some("25/08"));
    }

    #[test]
    fn month_report_has_thirty_buckets() {
        let now = local(2026, 8, 25, 15);
        let report = financial_report(Period::Month, &[], now);
        assert_eq!(report.series.len(), 30);
    }

    #[test]
    fn week_orders_land_in_their_date_bucket() {
        let now = local(2026, 8, 25, 15);
        let orders = vec![
            point(local(2026, 8, 25, 12), 12_930),
            point(local(2026, 8, 23, 20), 5_000),
            point(local(2026, 8, 23, 21), 5_000),
            // Eight days ago: outside the 7-day labels.
            point(local(2026, 8, 17, 12), 99_999),
        ];
        let report = financial_report(Period::Week, &orders, now);

        assert_eq!(report.total_orders, 3);
        assert_eq!(report.total_revenue, Decimal::new(22_930, 2));
        let today = report.series.iter().find(|b| b.label == "25/08").unwrap();
        assert_eq!(today.total, Decimal::new(12_930, 2));
        let sunday = report.series.iter().find(|b| b.label == "23/08").unwrap();
        assert_eq!(sunday.total, Decimal::new(10_000, 2));
    }

    #[test]
    fn day_report_buckets_by_local_hour_and_requires_today() {
        let now = local(2026, 8, 25, 22);
        let orders = vec![
            point(local(2026, 8, 25, 19), 8_000),
            point(local(2026, 8, 25, 19), 4_000),
            // Yesterday: excluded even though within 24h.
            point(local(2026, 8, 24, 23), 7_777),
        ];
        let report = financial_report(Period::Day, &orders, now);

        assert_eq!(report.series.len(), 24);
        assert_eq!(report.total_orders, 2);
        let bucket = report.series.iter().find(|b| b.label == "19:00").unwrap();
        assert_eq!(bucket.total, Decimal::new(12_000, 2));
    }

    #[test]
    fn year_report_uses_pt_br_month_labels() {
        let now = local(2026, 8, 25, 15);
        let orders = vec![
            point(local(2026, 8, 10, 12), 10_000),
            point(local(2025, 10, 10, 12), 3_000),
            // Thirteen months back: outside the lookback.
            point(local(2025, 7, 10, 12), 50_000),
        ];
        let report = financial_report(Period::Year, &orders, now);

        assert_eq!(report.series.len(), 12);
        assert_eq!(report.series.last().map(|b| b.label.as_str()), Some("ago"));
        assert_eq!(report.series.first().map(|b| b.label.as_str()), Some("set"));
        assert_eq!(report.total_orders, 2);
        let august = report.series.iter().rfind(|b| b.label == "ago").unwrap();
        assert_eq!(august.total, Decimal::new(10_000, 2));
        let october = report.series.iter().find(|b| b.label == "out").unwrap();
        assert_eq!(october.total, Decimal::new(3_000, 2));
    }

    #[test]
    fn future_orders_are_excluded_from_lookback_periods() {
        let now = local(2026, 8, 25, 15);
        let report = financial_report(
            Period::Week,
            &[point(local(2026, 8, 27, 12), 5_000)],
            now,
        );
        assert_eq!(report.total_orders, 0);
    }

    #[test]
    fn period_parses_from_query_values() {
        assert_eq!("day".parse::<Period>(), Ok(Period::Day));
        assert_eq!("year".parse::<Period>(), Ok(Period::Year));
        assert!("quarter".parse::<Period>().is_err());
    }
}
