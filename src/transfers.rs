//! Transaction listing, transfer rates, transfers, and fee lookups

use crate::client::{normalize, Flutterwave};
use crate::error::Result;
use crate::types::{Envelope, TransactionFilter, TransferRequest};
use rust_decimal::Decimal;
use serde_json::json;

impl Flutterwave {
    /// List transactions matching a filter.
    ///
    /// At least one filter field must be set; an empty filter fails locally
    /// without touching the network.
    pub async fn transactions(&self, filter: &TransactionFilter) -> Result<Envelope> {
        let query = filter.to_query();
        if query.is_empty() {
            return Ok(Envelope::failure("Please check the keys in the filter."));
        }
        Ok(normalize(self.get("transactions", &query).await?))
    }

    /// Look up the conversion rate for moving an amount between currencies.
    ///
    /// Both currencies must be in the supported table; when both are not,
    /// the failure message names both.
    pub async fn transfer_rate(
        &self,
        amount: Decimal,
        source: &str,
        destination: &str,
    ) -> Result<Envelope> {
        let bad_source = !self.is_supported_currency(source);
        let bad_destination = !self.is_supported_currency(destination);
        if bad_source || bad_destination {
            let mut message = String::new();
            if bad_source {
                message.push_str("Source currency ");
            }
            if bad_destination {
                message.push_str(if bad_source {
                    "and Destination currency "
                } else {
                    "Destination currency "
                });
            }
            message.push_str("not supported.");
            return Ok(Envelope::failure(message));
        }

        let query = [
            ("amount", amount.to_string()),
            ("destination_currency", destination.to_string()),
            ("source_currency", source.to_string()),
        ];
        Ok(normalize(self.get("transfers/rates", &query).await?))
    }

    /// Initiate a bank transfer.
    ///
    /// The configured webhook URL is injected as the transfer callback;
    /// unset request fields fall back to client configuration.
    pub async fn create_transfer(&self, request: &TransferRequest) -> Result<Envelope> {
        let config = self.config();
        let currency = request
            .currency
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| config.currency_code.clone());
        let debit_currency = request
            .debit_currency
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| config.admin_debit_currency.clone());
        let narration = request
            .narration
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("{} transfer", config.sender_name));

        let mut body = json!({
            "account_bank": request.bank_code,
            "account_number": request.account_number,
            "amount": request.amount,
            "narration": narration,
            "currency": currency,
            "reference": request.reference,
            "callback_url": config.webhook_url,
            "debit_currency": debit_currency,
        });
        if let Some(meta) = &request.meta {
            body["meta"] = meta.clone();
        }

        Ok(normalize(self.post("transfers", body).await?))
    }

    /// Look up the provider fee for a transfer amount; an empty currency
    /// uses the admin debit currency
    pub async fn transfer_fee(&self, amount: Decimal, currency: &str) -> Result<Envelope> {
        let currency = if currency.is_empty() {
            self.config().admin_debit_currency.as_str()
        } else {
            currency
        };
        let query = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
        ];
        Ok(normalize(self.get("transfers/fee", &query).await?))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, Flutterwave, TransactionFilter};
    use rust_decimal_macros::dec;

    fn client() -> Flutterwave {
        // Unroutable base URL; these tests must never reach the network.
        Flutterwave::new(
            Config::new("pk", "sk", "ek", "NGN", "https://example.com/hooks")
                .with_base_url("http://192.0.2.1:1"),
        )
    }

    #[tokio::test]
    async fn test_transfer_rate_rejects_bad_source() {
        let envelope = client()
            .transfer_rate(dec!(100), "ZZZ", "NGN")
            .await
            .unwrap();
        assert!(envelope.error);
        assert_eq!(envelope.message, "Source currency not supported.");
    }

    #[tokio::test]
    async fn test_transfer_rate_rejects_bad_destination() {
        let envelope = client()
            .transfer_rate(dec!(100), "NGN", "ZZZ")
            .await
            .unwrap();
        assert!(envelope.error);
        assert_eq!(envelope.message, "Destination currency not supported.");
    }

    #[tokio::test]
    async fn test_transfer_rate_names_both_bad_currencies() {
        let envelope = client()
            .transfer_rate(dec!(100), "ZZZ", "YYY")
            .await
            .unwrap();
        assert!(envelope.error);
        assert_eq!(
            envelope.message,
            "Source currency and Destination currency not supported."
        );
    }

    #[tokio::test]
    async fn test_transactions_rejects_empty_filter() {
        let envelope = client()
            .transactions(&TransactionFilter::new())
            .await
            .unwrap();
        assert!(envelope.error);
        assert!(envelope.message.contains("check the keys"));
    }
}
