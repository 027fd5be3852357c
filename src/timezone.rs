//! Resolves the configured canonical timezone into the UTC offset used for
//! displaying transaction dates.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// The UTC offset currently in effect for `canonical_timezone`, e.g. "America/Sao_Paulo".
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Like [get_local_offset], but logs and returns [Error::InvalidTimezoneError]
/// for unknown timezone names.
pub fn resolve_local_offset(canonical_timezone: &str) -> Result<UtcOffset, Error> {
    get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })
}

#[cfg(test)]
mod tests {
    use time::UtcOffset;

    use crate::Error;

    use super::resolve_local_offset;

    #[test]
    fn resolves_utc() {
        assert_eq!(resolve_local_offset("Etc/UTC"), Ok(UtcOffset::UTC));
    }

    #[test]
    fn sao_paulo_is_behind_utc() {
        let offset = resolve_local_offset("America/Sao_Paulo").unwrap();

        assert!(offset.is_negative());
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert_eq!(
            resolve_local_offset("Atlantis/Lost_City"),
            Err(Error::InvalidTimezoneError("Atlantis/Lost_City".to_owned()))
        );
    }
}
