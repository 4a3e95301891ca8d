pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Booking, BookingError, BookingStatus, CancelBookingRequest, CreateBookingRequest,
    RescheduleBookingRequest, ScheduleSnapshot,
};
pub use router::booking_routes;
