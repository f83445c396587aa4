//! # flutterwave - Flutterwave v3 API client
//!
//! A Rust client for the Flutterwave payment API: balances, transactions,
//! virtual accounts, transfers, bill payments, virtual cards, BVN
//! verification, OTPs, and the bank directory.
//!
//! Every operation resolves to the same [`Envelope`] shape regardless of
//! which endpoint was hit:
//!
//! ```json
//! { "error": false, "message": "...", "data": ... }
//! ```
//!
//! `error` is `false` exactly when the provider reported success; local
//! validation failures and provider-reported failures both come back as
//! envelopes with `error: true` and an empty `data` array. Only transport
//! faults (DNS, connection, TLS) surface as a Rust error.
//!
//! ```rust,no_run
//! use flutterwave::{Config, Flutterwave};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), flutterwave::FlutterwaveError> {
//! let client = Flutterwave::new(Config::new(
//!     "FLWPUBK-xxxx",
//!     "FLWSECK-xxxx",
//!     "FLWSECK_ENC-xxxx",
//!     "NGN",
//!     "https://example.com/webhooks/flutterwave",
//! ));
//!
//! let balances = client.balances("NGN").await?;
//! if balances.is_success() {
//!     println!("NGN balance: {}", balances.data);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

mod accounts;
mod bills;
mod cards;
mod kyc;
mod transfers;

// Re-exports for convenience
pub use client::{Config, Flutterwave, DEFAULT_BASE_URL};
pub use error::{FlutterwaveError, Result};
pub use types::*;

/// Current version of the flutterwave crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "https://api.flutterwave.com/v3/");
    }

    #[test]
    fn test_client_exposes_config() {
        let client = Flutterwave::new(Config::new(
            "pk",
            "sk",
            "ek",
            "NGN",
            "https://example.com/hooks",
        ));
        assert_eq!(client.config().currency_code, "NGN");
        assert_eq!(client.config().public_key, "pk");
        assert_eq!(client.config().encryption_key, "ek");
    }
}
