use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use vg_core::services::otp::OtpPolicyService;
use vg_shared::utils::phone::mask_phone_number;

use crate::dto::otp::{OtpResponse, SendOtpRequest};

/// Application state that holds shared services
pub struct AppState {
    pub otp_service: Arc<OtpPolicyService>,
}

/// Handler for POST /api/otp/send
///
/// Requests a new OTP for the given mobile number.
///
/// # Request Body
///
/// ```json
/// { "mobile_number": "+15551234567" }
/// ```
///
/// # Response
///
/// Always `200 OK` with the policy layer's result message:
///
/// ```json
/// { "message": "OTP sent successfully" }
/// ```
///
/// Malformed request bodies produce `400 Bad Request`; that mapping is the
/// HTTP layer's own and not part of the policy contract.
pub async fn send_otp(
    state: web::Data<AppState>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing send request for {}",
        request_id,
        mask_phone_number(&request.mobile_number)
    );

    if let Err(errors) = request.validate() {
        log::warn!(
            "[{}] Validation failed for send request: {:?}",
            request_id,
            errors
        );
        return HttpResponse::BadRequest().json(OtpResponse {
            message: "Invalid mobile number".to_string(),
        });
    }

    let outcome = state.otp_service.send_otp(&request.mobile_number).await;

    HttpResponse::Ok().json(OtpResponse {
        message: outcome.message().to_string(),
    })
}
