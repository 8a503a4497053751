//! Paths and DOM ids shared by the booking pages and the server.

/// Endpoint that accepts a booking as a JSON object.
pub const BOOK_ENDPOINT: &str = "/book";

/// Page listing all appointments, shown after a successful booking.
pub const APPOINTMENTS_PATH: &str = "/appointments";

/// `id` attribute of the booking form on `/book`.
pub const APPOINTMENT_FORM_ID: &str = "appointmentForm";
