use chrono::NaiveDate;
use shared_types::{BookingRequest, BookingResponse};

use crate::booking::schedule;
use crate::catalog;

/// Fallback shown when the intake endpoint fails without a usable message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Произошла ошибка при отправке заявки. Попробуйте еще раз или свяжитесь с нами напрямую.";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Пожалуйста, заполните все обязательные поля")]
    MissingFields,
    #[error("Заявка уже отправляется")]
    SubmissionInFlight,
}

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(String),
}

/// All state behind the booking dialog. Starts empty, is mutated only
/// through the setters below, and is wiped back to its initial value only
/// after a confirmed successful submission. Failed attempts keep every
/// field so the client can retry without re-entering anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub service_id: String,
    pub time_slot: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub message: String,
    pub dialog_open: bool,
    pub submitting: bool,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.dialog_open = true;
    }

    /// The per-service "choose" affordance opens the dialog with that
    /// service already picked.
    pub fn open_with_service(&mut self, service_id: &str) {
        self.service_id = service_id.to_string();
        self.dialog_open = true;
    }

    /// Cancel: close the dialog, keep whatever was entered.
    pub fn close(&mut self) {
        self.dialog_open = false;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn set_service(&mut self, service_id: String) {
        self.service_id = service_id;
    }

    pub fn set_time_slot(&mut self, time_slot: String) {
        self.time_slot = time_slot;
    }

    pub fn set_client_name(&mut self, client_name: String) {
        self.client_name = client_name;
    }

    pub fn set_client_phone(&mut self, client_phone: String) {
        self.client_phone = client_phone;
    }

    pub fn set_client_email(&mut self, client_email: String) {
        self.client_email = client_email;
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    /// Submit guard: date, service, time slot, name and phone present, and
    /// nothing already in flight.
    pub fn is_submittable(&self) -> bool {
        self.date.is_some()
            && !self.service_id.trim().is_empty()
            && !self.time_slot.trim().is_empty()
            && !self.client_name.trim().is_empty()
            && !self.client_phone.trim().is_empty()
            && !self.submitting
    }

    /// Check-and-set entry into the `Submitting` state: validates, flips the
    /// in-flight flag and builds the request in one call, so a second submit
    /// landing in the same event turn gets `SubmissionInFlight` instead of
    /// dispatching a duplicate request.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, BookingError> {
        if self.submitting {
            return Err(BookingError::SubmissionInFlight);
        }
        if !self.is_submittable() {
            return Err(BookingError::MissingFields);
        }
        self.submitting = true;
        Ok(self.to_request())
    }

    /// Leave the `Submitting` state. Success wipes the form and closes the
    /// dialog; failure keeps everything editable for a retry.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        if let SubmitOutcome::Accepted = outcome {
            *self = Self::default();
        }
    }

    fn to_request(&self) -> BookingRequest {
        BookingRequest {
            // Unknown ids go out verbatim; the specialist still sees what
            // was asked for.
            service: catalog::title_for(&self.service_id)
                .map(str::to_string)
                .unwrap_or_else(|| self.service_id.clone()),
            date: self
                .date
                .map(schedule::format_booking_date)
                .unwrap_or_default(),
            time: self.time_slot.clone(),
            client_name: self.client_name.clone(),
            client_phone: self.client_phone.clone(),
            client_email: self.client_email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Fold the transport result into the outcome the dialog acts on: the
/// server's own error message verbatim when it sent one, the generic retry
/// message for everything else (network failure, decode failure, an error
/// body without a message).
pub fn outcome<E: std::fmt::Display>(result: Result<BookingResponse, E>) -> SubmitOutcome {
    match result {
        Ok(response) if response.success => SubmitOutcome::Accepted,
        Ok(response) => SubmitOutcome::Rejected(
            response
                .error
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        ),
        Err(_) => SubmitOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingForm {
        let mut form = BookingForm::new();
        form.open_with_service("consultation");
        form.set_date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        form.set_time_slot("13:00".to_string());
        form.set_client_name("Елена М.".to_string());
        form.set_client_phone("+7 (999) 123-45-67".to_string());
        form
    }

    #[test]
    fn empty_form_is_not_submittable() {
        assert!(!BookingForm::new().is_submittable());
    }

    #[test]
    fn submit_guard_requires_every_mandatory_field() {
        // Every combination of missing required fields; only the complete
        // form may submit.
        for mask in 0u8..32 {
            let mut form = filled();
            if mask & 1 != 0 {
                form.date = None;
            }
            if mask & 2 != 0 {
                form.set_service(String::new());
            }
            if mask & 4 != 0 {
                form.set_time_slot(String::new());
            }
            if mask & 8 != 0 {
                form.set_client_name(String::new());
            }
            if mask & 16 != 0 {
                form.set_client_phone(String::new());
            }
            assert_eq!(form.is_submittable(), mask == 0, "mask {:#07b}", mask);
        }
    }

    #[test]
    fn whitespace_only_fields_do_not_count_as_filled() {
        let mut form = filled();
        form.set_client_name("   ".to_string());
        assert!(!form.is_submittable());
    }

    #[test]
    fn submit_guard_blocks_while_in_flight() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert!(!form.is_submittable());
        assert_eq!(form.begin_submit(), Err(BookingError::SubmissionInFlight));
    }

    #[test]
    fn incomplete_form_cannot_enter_submitting() {
        let mut form = filled();
        form.set_client_phone(String::new());
        assert_eq!(form.begin_submit(), Err(BookingError::MissingFields));
        assert!(!form.submitting);
    }

    #[test]
    fn request_resolves_service_title_from_catalog() {
        let request = filled().begin_submit().unwrap();
        assert_eq!(request.service, "Личная консультация");
        assert_eq!(request.date, "20.01.2025");
        assert_eq!(request.time, "13:00");
        assert_eq!(request.client_name, "Елена М.");
        assert_eq!(request.client_email, "");
        assert_eq!(request.message, "");
    }

    #[test]
    fn request_falls_back_to_raw_id_for_unknown_service() {
        let mut form = filled();
        form.set_service("retreat-2026".to_string());
        let request = form.begin_submit().unwrap();
        assert_eq!(request.service, "retreat-2026");
    }

    #[test]
    fn accepted_outcome_resets_the_form_and_closes_the_dialog() {
        let mut form = filled();
        form.set_client_email("elena@example.com".to_string());
        form.set_message("Хочу разбор в этом месяце".to_string());
        form.begin_submit().unwrap();

        form.finish_submit(&SubmitOutcome::Accepted);
        assert_eq!(form, BookingForm::default());
        assert!(!form.dialog_open);
        assert!(!form.submitting);
    }

    #[test]
    fn rejected_outcome_keeps_fields_for_retry() {
        let mut form = filled();
        form.set_message("после 18:00 не могу".to_string());
        form.begin_submit().unwrap();
        let before = BookingForm {
            submitting: false,
            ..form.clone()
        };

        form.finish_submit(&SubmitOutcome::Rejected("Время занято".to_string()));
        assert_eq!(form, before);
        assert!(form.dialog_open);
        assert!(form.is_submittable());
    }

    #[test]
    fn cancel_never_touches_entered_values() {
        let mut form = filled();
        let before = form.clone();
        form.close();
        assert!(!form.dialog_open);
        assert_eq!(
            BookingForm {
                dialog_open: true,
                ..form
            },
            before
        );
    }

    #[test]
    fn server_error_message_is_surfaced_verbatim() {
        let body = r#"{"success": false, "error": "slot taken"}"#;
        let response: BookingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            outcome::<std::convert::Infallible>(Ok(response)),
            SubmitOutcome::Rejected("slot taken".to_string())
        );
    }

    #[test]
    fn successful_response_is_accepted() {
        let body = r#"{"success": true}"#;
        let response: BookingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            outcome::<std::convert::Infallible>(Ok(response)),
            SubmitOutcome::Accepted
        );
    }

    #[test]
    fn transport_failures_get_the_generic_retry_message() {
        let result: Result<BookingResponse, String> = Err("connection refused".to_string());
        assert_eq!(
            outcome(result),
            SubmitOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn failure_body_without_message_gets_the_generic_retry_message() {
        let response = BookingResponse {
            success: false,
            error: None,
        };
        assert_eq!(
            outcome::<std::convert::Infallible>(Ok(response)),
            SubmitOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_string())
        );
    }
}
