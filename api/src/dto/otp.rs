use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(length(min = 8, max = 16))]
    pub mobile_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 8, max = 16))]
    pub mobile_number: String,
    #[validate(length(min = 4, max = 10))]
    pub otp: String,
}

/// Response carrying the policy layer's result message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_validation() {
        let request = SendOtpRequest {
            mobile_number: "+15551234567".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = SendOtpRequest {
            mobile_number: "+1".to_string(), // Too short
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_verify_request_validation() {
        let request = VerifyOtpRequest {
            mobile_number: "+15551234567".to_string(),
            otp: "123456".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = VerifyOtpRequest {
            mobile_number: "+15551234567".to_string(),
            otp: "123".to_string(), // Too short
        };
        assert!(request.validate().is_err());

        let request = VerifyOtpRequest {
            mobile_number: "+15551234567".to_string(),
            otp: "12345678901".to_string(), // Too long
        };
        assert!(request.validate().is_err());
    }
}
