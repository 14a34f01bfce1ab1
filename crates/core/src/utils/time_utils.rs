use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for business dates.
/// This is the canonical timezone used to convert UTC instants to domain
/// dates. The back office operates on Brazilian contracts, so
/// America/Sao_Paulo is the sensible default.
pub const DEFAULT_BUSINESS_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// Converts a UTC instant to a business date in the given timezone.
///
/// This is the single source of truth for converting instants to domain
/// dates. Use this whenever a contractual date has to be derived from a
/// timestamp.
pub fn business_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default business timezone.
/// Equivalent to `business_date_from_utc(instant, DEFAULT_BUSINESS_TZ)`.
pub fn business_date_today() -> NaiveDate {
    business_date_from_utc(Utc::now(), DEFAULT_BUSINESS_TZ)
}
