use serde::{Deserialize, Serialize};

/// One consultation reservation attempt, as sent to the intake endpoint.
///
/// The endpoint expects camelCase keys; optional fields travel as empty
/// strings rather than being omitted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub service: String,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub message: String,
}

/// Intake endpoint reply. The backend also sends `message`/`requestId`
/// fields we have no use for; error bodies may carry `error` alone.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BookingResponse {
    pub success: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = BookingRequest {
            service: "Личная консультация".to_string(),
            date: "20.01.2025".to_string(),
            time: "13:00".to_string(),
            client_name: "Елена".to_string(),
            client_phone: "+7 (999) 123-45-67".to_string(),
            client_email: String::new(),
            message: String::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service"], "Личная консультация");
        assert_eq!(value["date"], "20.01.2025");
        assert_eq!(value["time"], "13:00");
        assert_eq!(value["clientName"], "Елена");
        assert_eq!(value["clientPhone"], "+7 (999) 123-45-67");
        assert_eq!(value["clientEmail"], "");
        assert_eq!(value["message"], "");
    }

    #[test]
    fn response_decodes_success_body_with_extra_fields() {
        let body = r#"{"success": true, "message": "Заявка успешно отправлена", "requestId": "abc-123"}"#;
        let response: BookingResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.error, None);
    }

    #[test]
    fn response_decodes_error_only_body() {
        let body = r#"{"error": "Некорректный JSON в запросе"}"#;
        let response: BookingResponse = serde_json::from_str(body).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Некорректный JSON в запросе"));
    }
}
