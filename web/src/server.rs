use leptos::prelude::*;
use leptos::server;
use shared_types::{BookingRequest, BookingResponse};

/// Remote intake function that emails the specialist about a new booking.
pub const BOOKING_ENDPOINT: &str =
    "https://functions.poehali.dev/f9388ebe-c74c-40ef-87b5-4fee1d07eb06";

#[server]
pub async fn submit_booking(request: BookingRequest) -> Result<BookingResponse, ServerFnError> {
    let client = reqwest::Client::new();

    let response = client
        .post(BOOKING_ENDPOINT)
        .json(&request)
        .send()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to reach booking endpoint: {}", e)))?;

    let status = response.status();
    let mut body: BookingResponse = response
        .json()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to decode booking response: {}", e)))?;

    // A non-2xx status is a failure no matter what the body claims; the
    // body's error message still wins when it has one.
    if !status.is_success() {
        body.success = false;
    }

    tracing::info!(
        status = %status,
        success = body.success,
        service = %request.service,
        "booking intake responded"
    );

    Ok(body)
}
