//! Balances, virtual accounts, account resolution, and the bank directory

use crate::client::{encode_path, normalize, Flutterwave, GENERIC_FAILURE};
use crate::error::Result;
use crate::types::{Envelope, VirtualAccountRequest};
use serde_json::{json, Value};

impl Flutterwave {
    /// Fetch wallet balances.
    ///
    /// An empty `currency` returns every balance the provider holds;
    /// otherwise the currency must be in the supported table and only its
    /// entry is returned.
    pub async fn balances(&self, currency: &str) -> Result<Envelope> {
        if !currency.is_empty() && !self.is_supported_currency(currency) {
            return Ok(Envelope::failure("Currency not supported."));
        }

        let envelope = normalize(self.get("balances", &[]).await?);
        if envelope.error || currency.is_empty() {
            return Ok(envelope);
        }

        let matched = envelope
            .data
            .as_array()
            .and_then(|rows| {
                rows.iter()
                    .find(|row| row.get("currency").and_then(Value::as_str) == Some(currency))
            })
            .cloned();

        Ok(match matched {
            Some(row) => Envelope::success(envelope.message, row),
            None => Envelope::failure("No balance found for the requested currency."),
        })
    }

    /// Create a virtual account number for a customer
    pub async fn create_virtual_account(
        &self,
        request: &VirtualAccountRequest,
    ) -> Result<Envelope> {
        let body = serde_json::to_value(request)?;
        Ok(normalize(self.post("virtual-account-numbers", body).await?))
    }

    /// Fetch a virtual account by its order reference
    pub async fn virtual_account(&self, reference: &str) -> Result<Envelope> {
        if reference.is_empty() {
            return Ok(Envelope::failure("Reference cannot be empty."));
        }
        let path = format!("virtual-account-numbers/{}", encode_path(reference));
        Ok(normalize(self.get(&path, &[]).await?))
    }

    /// Resolve an account number against a bank code.
    ///
    /// Success requires the provider to return actual account details; an
    /// empty result maps to a "No account found" failure.
    pub async fn resolve_account(&self, account_number: &str, bank_code: &str) -> Result<Envelope> {
        let body = json!({
            "account_number": account_number,
            "account_bank": bank_code,
        });
        let envelope = normalize(self.post("accounts/resolve", body).await?);

        let data_empty = match &envelope.data {
            Value::Null => true,
            Value::Array(rows) => rows.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if envelope.is_success() && !data_empty {
            return Ok(envelope);
        }

        let message = if envelope.message == GENERIC_FAILURE || (envelope.is_success() && data_empty)
        {
            "No account found".to_string()
        } else {
            envelope.message
        };
        Ok(Envelope::failure(message))
    }

    /// List banks for a country; an empty code defaults to "NG"
    pub async fn banks(&self, country_code: &str) -> Result<Envelope> {
        let country = if country_code.is_empty() {
            "NG"
        } else {
            country_code
        };
        let path = format!("banks/{}", encode_path(country));
        Ok(normalize(self.get(&path, &[]).await?))
    }

    /// List branches of a bank
    pub async fn bank_branches(&self, bank_id: &str) -> Result<Envelope> {
        let path = format!("banks/{}/branches", encode_path(bank_id));
        Ok(normalize(self.get(&path, &[]).await?))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, Flutterwave};
    use mockito::Server;
    use serde_json::json;

    fn client_for(server: &Server) -> Flutterwave {
        Flutterwave::new(
            Config::new("pk", "sk", "ek", "NGN", "https://example.com/hooks")
                .with_base_url(server.url()),
        )
    }

    #[tokio::test]
    async fn test_balances_filters_to_requested_currency() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/balances")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": "success",
                    "message": "Wallet balances fetched",
                    "data": [
                        {"currency": "NGN", "available_balance": 1500},
                        {"currency": "USD", "available_balance": 20}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let envelope = client.balances("NGN").await.unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.message, "Wallet balances fetched");
        assert_eq!(
            envelope.data,
            json!({"currency": "NGN", "available_balance": 1500})
        );
    }

    #[tokio::test]
    async fn test_balances_empty_currency_returns_all() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/balances")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": "success",
                    "message": "Wallet balances fetched",
                    "data": [{"currency": "NGN"}, {"currency": "USD"}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let envelope = client.balances("").await.unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_balances_currency_missing_from_list() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/balances")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": "success",
                    "message": "Wallet balances fetched",
                    "data": [{"currency": "USD"}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let envelope = client.balances("NGN").await.unwrap();
        assert!(envelope.error);
        assert_eq!(envelope.message, "No balance found for the requested currency.");
    }

    #[tokio::test]
    async fn test_resolve_account_empty_data_is_not_found() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/accounts/resolve")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "success", "data": {}}).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let envelope = client.resolve_account("0690000032", "044").await.unwrap();
        assert!(envelope.error);
        assert_eq!(envelope.message, "No account found");
    }

    #[tokio::test]
    async fn test_resolve_account_keeps_provider_message() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/accounts/resolve")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"status": "error", "message": "Account resolution failed", "data": null})
                    .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let envelope = client.resolve_account("0690000032", "044").await.unwrap();
        assert!(envelope.error);
        assert_eq!(envelope.message, "Account resolution failed");
    }

    #[tokio::test]
    async fn test_banks_empty_country_defaults_to_ng() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/banks/NG")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"status": "success", "message": "Banks fetched successfully", "data": []})
                    .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let envelope = client.banks("").await.unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.message, "Banks fetched successfully");
    }
}
