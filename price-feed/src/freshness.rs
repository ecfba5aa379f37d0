use common::pricefeed::types::{OracleError, PriceRecord};

/// `stored_time > now - max_delay`, rearranged so it cannot underflow.
pub fn is_within_window(now: u64, stored_time: u64, max_delay: u64) -> bool {
    stored_time.saturating_add(max_delay) > now
}

/// Gate applied before stored data is handed to a consumer.
pub fn check_fresh(record: &PriceRecord, now: u64, max_delay: u64) -> Result<(), OracleError> {
    if !record.is_set() {
        return Err(OracleError::PriceUnavailable);
    }
    if !is_within_window(now, record.time, max_delay) {
        return Err(OracleError::StaleData);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_728_318_100;

    #[test]
    fn test_boundary() {
        // stale at exactly now - max_delay, fresh one second later
        assert!(!is_within_window(NOW, NOW - 60, 60));
        assert!(is_within_window(NOW, NOW - 60 + 1, 60));
    }

    #[test]
    fn test_window_larger_than_clock() {
        assert!(is_within_window(30, 0, 60));
        assert!(is_within_window(10, 5, u64::MAX));
    }

    #[test]
    fn test_zero_window_rejects_current_second() {
        assert!(!is_within_window(NOW, NOW, 0));
        assert!(is_within_window(NOW, NOW + 1, 0));
    }

    #[test]
    fn test_unset_price_is_unavailable() {
        let record = PriceRecord::new(0, NOW);
        assert_eq!(check_fresh(&record, NOW, 60), Err(OracleError::PriceUnavailable));
    }

    #[test]
    fn test_unavailable_takes_precedence_over_stale() {
        assert_eq!(
            check_fresh(&PriceRecord::unset(), NOW, 60),
            Err(OracleError::PriceUnavailable)
        );
    }

    #[test]
    fn test_stale_record() {
        let record = PriceRecord::new(54118599, NOW - 61);
        assert_eq!(check_fresh(&record, NOW, 60), Err(OracleError::StaleData));
    }

    #[test]
    fn test_fresh_record() {
        let record = PriceRecord::new(54118599, NOW - 59);
        assert_eq!(check_fresh(&record, NOW, 60), Ok(()));
    }
}
