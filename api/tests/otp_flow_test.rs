//! End-to-end tests for the OTP routes, running against the mock provider

use actix_web::{test, web, App};
use std::sync::Arc;

use vg_api::dto::otp::OtpResponse;
use vg_api::routes::otp::{send::send_otp, verify::verify_otp, AppState};
use vg_core::services::otp::{OtpPolicyConfig, OtpPolicyService, OtpStore};
use vg_infra::provider::mock::{MockVerificationProvider, MOCK_ACCEPTED_CODE};

const PHONE: &str = "+15551234567";

fn test_state() -> web::Data<AppState> {
    let provider = Arc::new(MockVerificationProvider::new());
    let store = Arc::new(OtpStore::new());
    let otp_service = Arc::new(OtpPolicyService::new(
        provider,
        store,
        OtpPolicyConfig::default(),
    ));
    web::Data::new(AppState { otp_service })
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new().app_data(test_state()).service(
                web::scope("/api/otp")
                    .route("/send", web::post().to(send_otp))
                    .route("/verify", web::post().to(verify_otp)),
            ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_send_and_verify_success() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/otp/send")
        .set_json(serde_json::json!({ "mobile_number": PHONE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.message, "OTP sent successfully");

    let req = test::TestRequest::post()
        .uri("/api/otp/verify")
        .set_json(serde_json::json!({ "mobile_number": PHONE, "otp": MOCK_ACCEPTED_CODE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.message, "OTP verified successfully! You are now logged in.");
}

#[actix_rt::test]
async fn test_verify_without_send_reports_not_found() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/otp/verify")
        .set_json(serde_json::json!({ "mobile_number": PHONE, "otp": MOCK_ACCEPTED_CODE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.message, "OTP not found or expired");
}

#[actix_rt::test]
async fn test_three_wrong_codes_block_the_number() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/otp/send")
        .set_json(serde_json::json!({ "mobile_number": PHONE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.message, "OTP sent successfully");

    for expected in [
        "Invalid OTP!",
        "Invalid OTP!",
        "Invalid OTP! Number is now blocked due to multiple incorrect attempts.",
    ] {
        let req = test::TestRequest::post()
            .uri("/api/otp/verify")
            .set_json(serde_json::json!({ "mobile_number": PHONE, "otp": "000000" }))
            .to_request();
        let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.message, expected);
    }

    // Even the correct code is rejected now
    let req = test::TestRequest::post()
        .uri("/api/otp/verify")
        .set_json(serde_json::json!({ "mobile_number": PHONE, "otp": MOCK_ACCEPTED_CODE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        resp.message,
        "Number is blocked due to multiple incorrect attempts. Please try again after 24 hours."
    );

    // And further sends short-circuit with the same message
    let req = test::TestRequest::post()
        .uri("/api/otp/send")
        .set_json(serde_json::json!({ "mobile_number": PHONE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        resp.message,
        "Number is blocked due to multiple incorrect attempts. Please try again after 24 hours."
    );
}

#[actix_rt::test]
async fn test_malformed_requests_are_rejected() {
    let app = init_app!();

    // Mobile number too short for the DTO validation
    let req = test::TestRequest::post()
        .uri("/api/otp/send")
        .set_json(serde_json::json!({ "mobile_number": "+1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    // Missing otp field entirely
    let req = test::TestRequest::post()
        .uri("/api/otp/verify")
        .set_json(serde_json::json!({ "mobile_number": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_provider_failure_maps_to_send_error_message() {
    let provider = Arc::new(MockVerificationProvider::failing());
    let store = Arc::new(OtpStore::new());
    let otp_service = Arc::new(OtpPolicyService::new(
        provider,
        store,
        OtpPolicyConfig::default(),
    ));
    let state = web::Data::new(AppState { otp_service });

    let app = test::init_service(
        App::new().app_data(state).service(
            web::scope("/api/otp").route("/send", web::post().to(send_otp)),
        ),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/otp/send")
        .set_json(serde_json::json!({ "mobile_number": PHONE }))
        .to_request();
    let resp: OtpResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.message, "Error sending OTP. Please try again later.");
}
