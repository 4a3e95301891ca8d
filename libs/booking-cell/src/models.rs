// libs/booking-cell/src/models.rs
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::StoreError;
use shared_models::error::AppError;

/// Half-hour slots offered when rescheduling.
pub const RESCHEDULE_SLOTS: &[&str] = &[
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
];

pub const DEFAULT_CANCELLATION_REASON: &str = "Not specified";

// ==============================================================================
// CORE BOOKING MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Rescheduled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "Confirmed"),
            BookingStatus::Cancelled => write!(f, "Cancelled"),
            BookingStatus::Rescheduled => write!(f, "Rescheduled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub provider_name: String,
    pub date: String,
    pub time: String,
    pub consultation_fee: String,
    /// Epoch milliseconds of the last booking or reschedule.
    pub booked_at: i64,
    pub status: BookingStatus,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_booking_details: Option<ScheduleSnapshot>,
}

impl Booking {
    /// Appointment start as a local date-time, when the stored strings parse.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = parse_slot_start(&self.time)?;
        Some(date.and_time(time))
    }
}

/// Start time of a slot such as `10:00 AM - 1:00 PM`, `09:30 AM` or `14:00`.
pub fn parse_slot_start(slot: &str) -> Option<NaiveTime> {
    let start = slot.split(" - ").next()?.trim();
    NaiveTime::parse_from_str(start, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(start, "%H:%M"))
        .ok()
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub provider_id: String,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleBookingRequest {
    pub date: Option<String>,
    pub time: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Please select a date and time for your appointment.")]
    MissingSchedule,

    #[error("Please select a new date and time.")]
    MissingRescheduleSchedule,

    #[error("Invalid appointment date: {0}")]
    InvalidDate(String),

    #[error("Appointment date cannot be in the past")]
    DateInPast,

    #[error("Time slot {0} is not available")]
    UnavailableSlot(String),

    #[error("Provider not found")]
    ProviderNotFound,

    #[error("Could not find the appointment.")]
    NotFound,

    #[error("Appointment cannot be {to} when it is {from}")]
    InvalidStatusTransition { from: BookingStatus, to: BookingStatus },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::MissingSchedule
            | BookingError::MissingRescheduleSchedule
            | BookingError::InvalidDate(_)
            | BookingError::DateInPast
            | BookingError::UnavailableSlot(_) => AppError::ValidationError(err.to_string()),
            BookingError::ProviderNotFound | BookingError::NotFound => {
                AppError::NotFound(err.to_string())
            }
            BookingError::InvalidStatusTransition { .. } => AppError::Conflict(err.to_string()),
            BookingError::Storage(e) => e.into(),
        }
    }
}
