//! Namespaced keys used in the local store.

pub const REGISTERED_USERS: &str = "swasthyaConnectRegisteredUsers";
pub const REVOKED_SESSIONS: &str = "swasthyaConnectRevokedSessions";
pub const BOOKINGS_PREFIX: &str = "swasthyaConnectBookings_";

pub fn bookings(phone_number: &str) -> String {
    format!("{}{}", BOOKINGS_PREFIX, phone_number)
}
