use chrono::{DateTime, TimeDelta, Utc};

const UNITS: [(&str, i64); 4] = [("d", 86_400), ("h", 3_600), ("m", 60), ("s", 1)];

/// Elapsed time since `epoch` as seen from `now`, e.g. `3d4h` or `in 5m`.
pub fn format_age(epoch: i64, now: DateTime<Utc>) -> String {
    match DateTime::<Utc>::from_timestamp(epoch, 0) {
        Some(then) => format_delta(now - then),
        None => "unknown".to_string(),
    }
}

pub fn age_from_now(epoch: i64) -> String {
    format_age(epoch, Utc::now())
}

/// The two most significant non-zero units.
fn format_delta(delta: TimeDelta) -> String {
    let seconds = delta.num_seconds();
    let mut remaining = seconds.unsigned_abs();
    let mut out = String::new();
    let mut parts = 0;

    for (suffix, size) in UNITS {
        let size = size as u64;
        let count = remaining / size;
        if count == 0 && parts == 0 {
            continue;
        }
        if parts == 2 {
            break;
        }
        remaining %= size;
        if count > 0 {
            out.push_str(&format!("{count}{suffix}"));
        }
        parts += 1;
    }

    if out.is_empty() {
        out.push_str("0s");
    }

    if seconds < 0 { format!("in {out}") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(epoch: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(epoch, 0).unwrap()
    }

    #[test]
    fn zero_elapsed() {
        assert_eq!(format_age(100, at(100)), "0s");
    }

    #[test]
    fn seconds_only() {
        assert_eq!(format_age(100, at(142)), "42s");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_age(0, at(5 * 60 + 12)), "5m12s");
    }

    #[test]
    fn keeps_two_most_significant_units() {
        assert_eq!(format_age(0, at(3 * 86_400 + 4 * 3_600 + 59 * 60 + 1)), "3d4h");
    }

    #[test]
    fn skips_zero_inner_unit() {
        assert_eq!(format_age(0, at(2 * 3_600 + 7)), "2h");
        assert_eq!(format_age(0, at(86_400 + 30 * 60)), "1d");
    }

    #[test]
    fn future_epoch() {
        assert_eq!(format_age(600, at(0)), "in 10m");
    }

    #[test]
    fn out_of_range_epoch() {
        assert_eq!(format_age(i64::MAX, at(0)), "unknown");
    }
}
