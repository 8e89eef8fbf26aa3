//! Sequential record IDs (`P0001`, `APT0001`, `T0001`).

use super::{CollectionKind, StoreError, StoreResult};

/// Minimum number of digits after the prefix.
pub const ID_DIGITS: usize = 4;

/// Format an ID from its prefix and sequence number.
pub fn format_id(kind: CollectionKind, sequence: u64) -> String {
    format!("{}{:0width$}", kind.id_prefix(), sequence, width = ID_DIGITS)
}

/// Sequence number of `id`, if it is a well-formed ID for `kind`.
pub fn parse_sequence(kind: CollectionKind, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(kind.id_prefix())?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Next free ID: one past the highest sequence among `taken`.
///
/// Keys that don't parse as IDs of this kind are ignored. Gaps left by hand
/// edits are never refilled. Any key that parses has a sequence at or below
/// the highest, so the result cannot collide with one of them.
pub fn next_id<I, S>(kind: CollectionKind, taken: I) -> StoreResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let highest = taken
        .into_iter()
        .filter_map(|id| parse_sequence(kind, id.as_ref()))
        .max()
        .unwrap_or(0);
    let next = highest
        .checked_add(1)
        .ok_or(StoreError::IdsExhausted(kind))?;
    Ok(format_id(kind, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(CollectionKind::Patients, 1), "P0001");
        assert_eq!(format_id(CollectionKind::Appointments, 42), "APT0042");
        assert_eq!(format_id(CollectionKind::Treatments, 12345), "T12345");
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence(CollectionKind::Patients, "P0007"), Some(7));
        assert_eq!(parse_sequence(CollectionKind::Patients, "P"), None);
        assert_eq!(parse_sequence(CollectionKind::Patients, "P+7"), None);
        assert_eq!(parse_sequence(CollectionKind::Patients, "APT0007"), None);
        assert_eq!(parse_sequence(CollectionKind::Appointments, "APT0007"), Some(7));
        assert_eq!(parse_sequence(CollectionKind::Patients, "P99999999999999999999999"), None);
    }

    #[test]
    fn test_next_id_empty() {
        let none: [&str; 0] = [];
        assert_eq!(next_id(CollectionKind::Treatments, none).unwrap(), "T0001");
    }

    #[test]
    fn test_next_id_dense() {
        let taken = ["P0001", "P0002", "P0003"];
        assert_eq!(next_id(CollectionKind::Patients, taken).unwrap(), "P0004");
    }

    #[test]
    fn test_next_id_skips_past_gaps() {
        // Counting records would give P0003, which is taken.
        let taken = ["P0001", "P0003"];
        assert_eq!(next_id(CollectionKind::Patients, taken).unwrap(), "P0004");
    }

    #[test]
    fn test_next_id_ignores_foreign_keys() {
        let taken = ["legacy", "P0002", "Pxyz"];
        assert_eq!(next_id(CollectionKind::Patients, taken).unwrap(), "P0003");
    }

    #[test]
    fn test_next_id_past_u32_range() {
        let taken = ["P4294967295"];
        assert_eq!(next_id(CollectionKind::Patients, taken).unwrap(), "P4294967296");
    }

    #[test]
    fn test_next_id_exhausted() {
        let taken = [format!("T{}", u64::MAX)];
        let err = next_id(CollectionKind::Treatments, &taken).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted(CollectionKind::Treatments)));
    }
}
