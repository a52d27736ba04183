use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use vg_shared::utils::phone::mask_phone_number;

use crate::dto::otp::{OtpResponse, VerifyOtpRequest};

use super::AppState;

/// Handler for POST /api/otp/verify
///
/// Verifies a user-submitted OTP for the given mobile number.
///
/// # Request Body
///
/// ```json
/// { "mobile_number": "+15551234567", "otp": "123456" }
/// ```
///
/// # Response
///
/// Always `200 OK` with the policy layer's result message, e.g.:
///
/// ```json
/// { "message": "OTP verified successfully! You are now logged in." }
/// ```
///
/// Malformed request bodies produce `400 Bad Request`.
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing verify request for {}",
        request_id,
        mask_phone_number(&request.mobile_number)
    );

    if let Err(errors) = request.validate() {
        log::warn!(
            "[{}] Validation failed for verify request: {:?}",
            request_id,
            errors
        );
        return HttpResponse::BadRequest().json(OtpResponse {
            message: "Invalid request data".to_string(),
        });
    }

    let outcome = state
        .otp_service
        .verify_otp(&request.mobile_number, &request.otp)
        .await;

    HttpResponse::Ok().json(OtpResponse {
        message: outcome.message().to_string(),
    })
}
