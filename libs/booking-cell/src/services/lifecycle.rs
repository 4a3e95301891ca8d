// libs/booking-cell/src/services/lifecycle.rs
use tracing::{debug, warn};

use crate::models::{BookingError, BookingStatus};

pub struct BookingLifecycleService;

impl BookingLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: BookingStatus,
        new_status: BookingStatus,
    ) -> Result<(), BookingError> {
        if !self.get_valid_transitions(current_status).contains(&new_status) {
            warn!("Invalid status transition attempted: {} -> {}", current_status, new_status);
            return Err(BookingError::InvalidStatusTransition {
                from: current_status,
                to: new_status,
            });
        }

        debug!("Status transition validated: {} -> {}", current_status, new_status);
        Ok(())
    }

    /// Get all valid next statuses for a given current status
    pub fn get_valid_transitions(&self, current_status: BookingStatus) -> Vec<BookingStatus> {
        match current_status {
            BookingStatus::Confirmed => vec![BookingStatus::Cancelled, BookingStatus::Rescheduled],
            // A rescheduled booking can be moved again
            BookingStatus::Rescheduled => vec![BookingStatus::Cancelled, BookingStatus::Rescheduled],
            // Terminal
            BookingStatus::Cancelled => vec![],
        }
    }
}

impl Default for BookingLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn confirmed_can_be_cancelled_or_rescheduled() {
        let lifecycle = BookingLifecycleService::new();
        assert!(lifecycle
            .validate_status_transition(BookingStatus::Confirmed, BookingStatus::Cancelled)
            .is_ok());
        assert!(lifecycle
            .validate_status_transition(BookingStatus::Confirmed, BookingStatus::Rescheduled)
            .is_ok());
    }

    #[test]
    fn nothing_returns_to_confirmed() {
        let lifecycle = BookingLifecycleService::new();
        assert_matches!(
            lifecycle.validate_status_transition(BookingStatus::Rescheduled, BookingStatus::Confirmed),
            Err(BookingError::InvalidStatusTransition { .. })
        );
    }

    #[test]
    fn cancelled_is_terminal() {
        let lifecycle = BookingLifecycleService::new();
        assert!(lifecycle.get_valid_transitions(BookingStatus::Cancelled).is_empty());
        assert_matches!(
            lifecycle.validate_status_transition(BookingStatus::Cancelled, BookingStatus::Rescheduled),
            Err(BookingError::InvalidStatusTransition {
                from: BookingStatus::Cancelled,
                to: BookingStatus::Rescheduled
            })
        );
    }
}
