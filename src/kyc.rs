//! BVN verification and one-time passwords

use crate::client::{encode_path, normalize, Flutterwave};
use crate::error::Result;
use crate::types::{Envelope, OtpChannel};
use serde_json::json;

/// Digits in an issued OTP
const OTP_LENGTH: u32 = 6;
/// OTP validity window in minutes
const OTP_EXPIRY_MINUTES: u32 = 5;

impl Flutterwave {
    /// Verify a Bank Verification Number
    pub async fn verify_bvn(&self, bvn: &str) -> Result<Envelope> {
        let path = format!("kyc/bvns/{}", encode_path(bvn));
        Ok(normalize(self.get(&path, &[]).await?))
    }

    /// Issue a one-time password to a customer.
    ///
    /// The code is 6 digits and valid for 5 minutes. An empty `channels`
    /// slice delivers on every channel; the sender name comes from client
    /// configuration.
    pub async fn send_otp(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        channels: &[OtpChannel],
    ) -> Result<Envelope> {
        let channels: Vec<OtpChannel> = if channels.is_empty() {
            OtpChannel::all().to_vec()
        } else {
            channels.to_vec()
        };
        let body = json!({
            "length": OTP_LENGTH,
            "customer": {
                "name": name,
                "email": email,
                "phone": phone,
            },
            "sender": self.config().sender_name,
            "send": true,
            "medium": channels,
            "expiry": OTP_EXPIRY_MINUTES,
        });
        Ok(normalize(self.post("otps", body).await?))
    }

    /// Verify a one-time password against the reference it was issued under
    pub async fn verify_otp(&self, otp: &str, reference: &str) -> Result<Envelope> {
        let path = format!("otps/{}/validate", encode_path(reference));
        Ok(normalize(self.post(&path, json!({ "otp": otp })).await?))
    }
}
