//! Deterministic seeding from calendar dates

/// Polynomial hash of a date string
///
/// `seed = seed * 31 + unit (mod 2^32)` over the UTF-16 code units of the
/// string, so the same date always yields the same puzzle.
///
/// # Examples
/// ```
/// use ttsla::daily::seed_from_date;
///
/// assert_eq!(seed_from_date("2025-11-03"), seed_from_date("2025-11-03"));
/// assert_eq!(seed_from_date(""), 0);
/// ```
#[must_use]
pub fn seed_from_date(date: &str) -> u32 {
    date.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Index `(seed + offset) mod len`, or `None` for an empty table
#[must_use]
pub fn pick_index(len: usize, seed: u32, offset: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (u64::from(seed) + offset as u64) % len as u64;
    Some(index as usize)
}

/// Today's date in UTC as `yyyy-mm-dd`
#[must_use]
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_known_values() {
        assert_eq!(seed_from_date("2025-11-03"), 275_085_572);
        assert_eq!(seed_from_date("2025-11-04"), 275_085_573);
    }

    #[test]
    fn seed_wraps_unsigned() {
        // Exceeds i32::MAX, so a signed hash would differ here
        assert_eq!(seed_from_date("2024-01-01"), 3_681_625_664);
    }

    #[test]
    fn pick_index_bounds() {
        assert_eq!(pick_index(0, 12, 0), None);
        assert_eq!(pick_index(5, 275_085_572, 0), Some(2));
        assert_eq!(pick_index(5, 275_085_572, 1), Some(3));
        assert_eq!(pick_index(3, u32::MAX, 2), Some(((u64::from(u32::MAX) + 2) % 3) as usize));
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
