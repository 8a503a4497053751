use contracts::booking::routes::{APPOINTMENTS_PATH, APPOINTMENT_FORM_ID, BOOK_ENDPOINT};

/// Which form to bind, where to send it and where to go afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub form_id: String,
    pub endpoint: String,
    pub redirect_to: String,
}

impl SubmissionConfig {
    pub fn new(
        form_id: impl Into<String>,
        endpoint: impl Into<String>,
        redirect_to: impl Into<String>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            endpoint: endpoint.into(),
            redirect_to: redirect_to.into(),
        }
    }

    /// Appointment booking form on `/book`.
    pub fn appointment() -> Self {
        Self::new(APPOINTMENT_FORM_ID, BOOK_ENDPOINT, APPOINTMENTS_PATH)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self::appointment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_appointment_form() {
        let config = SubmissionConfig::default();
        assert_eq!(config.form_id, "appointmentForm");
        assert_eq!(config.endpoint, "/book");
        assert_eq!(config.redirect_to, "/appointments");
    }

    #[test]
    fn test_custom_config_for_mock_endpoint() {
        let config = SubmissionConfig::new("appointmentForm", "/mock/book", "/done");
        assert_eq!(config.endpoint, "/mock/book");
        assert_eq!(config.redirect_to, "/done");
    }
}
