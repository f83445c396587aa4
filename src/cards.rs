//! Virtual prepaid card lifecycle

use crate::client::{encode_path, is_valid_date, normalize, Flutterwave};
use crate::error::Result;
use crate::types::{Envelope, VirtualCardRequest};
use rust_decimal::Decimal;
use serde_json::json;

impl Flutterwave {
    /// Create a virtual prepaid card.
    ///
    /// Card events are delivered to the configured webhook URL suffixed with
    /// `/card/<reference>`, so each card's events can be routed back to the
    /// request that created it. Unset billing fields are omitted from the
    /// body; the debit currency is the configured admin debit currency.
    pub async fn create_virtual_card(&self, request: &VirtualCardRequest) -> Result<Envelope> {
        let config = self.config();
        let mut body = json!({
            "currency": request.currency,
            "amount": request.amount,
            "debit_currency": config.admin_debit_currency,
            "billing_name": request.billing_name,
        });
        if let Some(address) = request.billing_address.as_deref().filter(|v| !v.is_empty()) {
            body["billing_address"] = json!(address);
        }
        if let Some(city) = request.billing_city.as_deref().filter(|v| !v.is_empty()) {
            body["billing_city"] = json!(city);
        }
        if let Some(state) = request.billing_state.as_deref().filter(|v| !v.is_empty()) {
            body["billing_state"] = json!(state);
        }
        if let Some(postal_code) = request
            .billing_postal_code
            .as_deref()
            .filter(|v| !v.is_empty())
        {
            body["billing_postal_code"] = json!(postal_code);
        }
        body["callback_url"] = json!(format!(
            "{}/card/{}",
            config.webhook_url.trim_end_matches('/'),
            encode_path(&request.reference)
        ));

        Ok(normalize(self.post("virtual-cards", body).await?))
    }

    /// List issued cards, one page at a time
    pub async fn cards(&self, page: u32) -> Result<Envelope> {
        let query = [("page", page.to_string())];
        Ok(normalize(self.get("virtual-cards", &query).await?))
    }

    /// Fetch one card by id
    pub async fn card(&self, card_id: &str) -> Result<Envelope> {
        let path = format!("virtual-cards/{}", encode_path(card_id));
        Ok(normalize(self.get(&path, &[]).await?))
    }

    /// Fund a card from a wallet; an empty debit currency uses the admin
    /// debit currency
    pub async fn fund_card(
        &self,
        card_id: &str,
        amount: Decimal,
        debit_currency: &str,
    ) -> Result<Envelope> {
        let debit_currency = if debit_currency.trim().is_empty() {
            self.config().admin_debit_currency.as_str()
        } else {
            debit_currency
        };
        let body = json!({
            "amount": amount,
            "debit_currency": debit_currency,
        });
        let path = format!("virtual-cards/{}/fund", encode_path(card_id));
        Ok(normalize(self.post(&path, body).await?))
    }

    /// Terminate a card
    pub async fn terminate_card(&self, card_id: &str) -> Result<Envelope> {
        let path = format!("virtual-cards/{}/terminate", encode_path(card_id));
        Ok(normalize(self.put(&path).await?))
    }

    /// List a card's transactions inside a date range, paged by `index` and
    /// `size`
    pub async fn card_transactions(
        &self,
        card_id: &str,
        from: &str,
        to: &str,
        index: u32,
        size: u32,
    ) -> Result<Envelope> {
        if !(is_valid_date(from) && is_valid_date(to)) {
            return Ok(Envelope::failure("Please enter a valid date."));
        }
        let path = format!("virtual-cards/{}/transactions", encode_path(card_id));
        let query = [
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("index", index.to_string()),
            ("size", size.to_string()),
        ];
        Ok(normalize(self.get(&path, &query).await?))
    }

    /// Withdraw balance from a card back into the wallet
    pub async fn withdraw_from_card(&self, card_id: &str, amount: Decimal) -> Result<Envelope> {
        let path = format!("virtual-cards/{}/withdraw", encode_path(card_id));
        Ok(normalize(self.post(&path, json!({ "amount": amount })).await?))
    }

    /// Block or unblock a card; `action` must be `"block"` or `"unblock"`
    pub async fn block_card(&self, card_id: &str, action: &str) -> Result<Envelope> {
        let action = action.trim();
        if action != "block" && action != "unblock" {
            return Ok(Envelope::failure("Please provide a valid card status."));
        }
        let path = format!(
            "virtual-cards/{}/status/{}",
            encode_path(card_id.trim()),
            action
        );
        Ok(normalize(self.put(&path).await?))
    }
}
