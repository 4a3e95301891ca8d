// libs/booking-cell/src/services/booking.rs
use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use provider_cell::ProviderService;
use shared_config::AppConfig;
use shared_database::{keys, LocalStore};

use crate::models::{
    Booking, BookingError, BookingStatus, CreateBookingRequest, RescheduleBookingRequest,
    ScheduleSnapshot, DEFAULT_CANCELLATION_REASON, RESCHEDULE_SLOTS,
};
use crate::services::lifecycle::BookingLifecycleService;

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_future_date(date: &str, today: NaiveDate) -> Result<NaiveDate, BookingError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(date.to_string()))?;

    if parsed < today {
        return Err(BookingError::DateInPast);
    }
    Ok(parsed)
}

pub struct BookingService {
    store: LocalStore,
    providers: ProviderService,
    lifecycle: BookingLifecycleService,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: LocalStore::new(config),
            providers: ProviderService::new(),
            lifecycle: BookingLifecycleService::new(),
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Book a catalog provider. Appends exactly one `Confirmed` record to the user's list.
    pub async fn create_booking(
        &self,
        user_id: &str,
        request: CreateBookingRequest,
    ) -> Result<Booking, BookingError> {
        let (Some(date), Some(time)) = (non_blank(request.date), non_blank(request.time)) else {
            return Err(BookingError::MissingSchedule);
        };

        parse_future_date(&date, Self::today())?;

        let provider = self
            .providers
            .get_provider(&request.provider_id)
            .map_err(|_| BookingError::ProviderNotFound)?;

        if !provider.time_slots().contains(&time) {
            return Err(BookingError::UnavailableSlot(time));
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            provider_id: Some(provider.id.clone()),
            provider_name: provider.name.clone(),
            date,
            time,
            consultation_fee: provider.consultation_fee.clone(),
            booked_at: Utc::now().timestamp_millis(),
            status: BookingStatus::Confirmed,
            user_id: user_id.to_string(),
            cancellation_reason: None,
            original_booking_details: None,
        };

        let booking = self
            .store
            .update_json(&keys::bookings(user_id), |bookings: &mut Vec<Booking>| {
                bookings.push(booking.clone());
                Ok::<_, BookingError>(booking)
            })
            .await?;

        info!(
            "Booking {} created for {} with {} on {} at {}",
            booking.id, user_id, booking.provider_name, booking.date, booking.time
        );
        Ok(booking)
    }

    /// The user's bookings, most recent appointment first.
    pub async fn list_bookings(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        let mut bookings: Vec<Booking> = self
            .store
            .get_json(&keys::bookings(user_id))
            .await?
            .unwrap_or_default();

        // Unparseable schedules sort last
        bookings.sort_by(|a, b| {
            b.scheduled_at()
                .cmp(&a.scheduled_at())
                .then_with(|| b.booked_at.cmp(&a.booked_at))
        });

        debug!("Loaded {} bookings for {}", bookings.len(), user_id);
        Ok(bookings)
    }

    pub async fn get_booking(&self, user_id: &str, booking_id: &str) -> Result<Booking, BookingError> {
        self.list_bookings(user_id)
            .await?
            .into_iter()
            .find(|b| b.id == booking_id)
            .ok_or(BookingError::NotFound)
    }

    pub async fn cancel_booking(
        &self,
        user_id: &str,
        booking_id: &str,
        reason: Option<String>,
    ) -> Result<Booking, BookingError> {
        let reason = non_blank(reason).unwrap_or_else(|| DEFAULT_CANCELLATION_REASON.to_string());

        let booking = self
            .store
            .update_json(&keys::bookings(user_id), |bookings: &mut Vec<Booking>| {
                let booking = bookings
                    .iter_mut()
                    .find(|b| b.id == booking_id)
                    .ok_or(BookingError::NotFound)?;

                self.lifecycle
                    .validate_status_transition(booking.status, BookingStatus::Cancelled)?;

                booking.status = BookingStatus::Cancelled;
                booking.cancellation_reason = Some(reason);
                Ok::<_, BookingError>(booking.clone())
            })
            .await?;

        info!("Booking {} cancelled for {}", booking.id, user_id);
        Ok(booking)
    }

    /// Move a booking to a new date and time, keeping the replaced schedule as a snapshot.
    pub async fn reschedule_booking(
        &self,
        user_id: &str,
        booking_id: &str,
        request: RescheduleBookingRequest,
    ) -> Result<Booking, BookingError> {
        let (Some(date), Some(time)) = (non_blank(request.date), non_blank(request.time)) else {
            return Err(BookingError::MissingRescheduleSchedule);
        };

        parse_future_date(&date, Self::today())?;

        let booking = self
            .store
            .update_json(&keys::bookings(user_id), |bookings: &mut Vec<Booking>| {
                let booking = bookings
                    .iter_mut()
                    .find(|b| b.id == booking_id)
                    .ok_or(BookingError::NotFound)?;

                self.lifecycle
                    .validate_status_transition(booking.status, BookingStatus::Rescheduled)?;

                if !self.reschedule_slots_for(booking).contains(&time) {
                    return Err(BookingError::UnavailableSlot(time));
                }

                booking.original_booking_details = Some(ScheduleSnapshot {
                    date: std::mem::replace(&mut booking.date, date),
                    time: std::mem::replace(&mut booking.time, time),
                });
                booking.status = BookingStatus::Rescheduled;
                booking.booked_at = Utc::now().timestamp_millis();
                Ok::<_, BookingError>(booking.clone())
            })
            .await?;

        info!(
            "Booking {} rescheduled for {} to {} at {}",
            booking.id, user_id, booking.date, booking.time
        );
        Ok(booking)
    }

    /// Standard reschedule slots plus the booked provider's own slots.
    pub fn reschedule_slots_for(&self, booking: &Booking) -> Vec<String> {
        let mut slots: Vec<String> = RESCHEDULE_SLOTS.iter().map(|s| s.to_string()).collect();

        if let Some(provider) = booking
            .provider_id
            .as_deref()
            .and_then(|id| self.providers.get_provider(id).ok())
        {
            slots.extend(provider.time_slots());
        }

        slots
    }
}
