/// Asserts that state read when the call was built still holds at execution.
///
/// Returns `stale` when the two values differ, so each contract can report
/// the mismatch with its own error type.
pub fn ensure_snapshot_current<T, E>(expected: &T, actual: &T, stale: E) -> Result<(), E>
where
    T: PartialEq,
{
    if expected != actual {
        return Err(stale);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricefeed::types::{OracleError, PriceRecord};

    #[test]
    fn test_matching_snapshot_passes() {
        let record = PriceRecord::new(100, 10);
        assert_eq!(
            ensure_snapshot_current(&record, &record.clone(), OracleError::StaleSnapshot),
            Ok(())
        );
    }

    #[test]
    fn test_changed_snapshot_is_rejected() {
        let quoted = PriceRecord::new(100, 10);
        let committed = PriceRecord::new(101, 11);
        assert_eq!(
            ensure_snapshot_current(&quoted, &committed, OracleError::StaleSnapshot),
            Err(OracleError::StaleSnapshot)
        );
    }
}
