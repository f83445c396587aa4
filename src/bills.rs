//! Bill catalog, validation, payment, status, and history

use crate::client::{encode_path, is_valid_date, normalize, Flutterwave};
use crate::error::Result;
use crate::types::Envelope;
use rust_decimal::Decimal;
use serde_json::{json, Value};

impl Flutterwave {
    /// List payable bill categories.
    ///
    /// `kind` selects a catalog slice: `"all"` covers every category,
    /// `"biller_code"` scopes the listing to `biller_code`, and any other
    /// recognized code selects that single category. Rows are filtered to
    /// `country` (empty defaults to `"NG"`) and `default_commission` is
    /// rounded to the nearest integer.
    pub async fn bill_categories(
        &self,
        kind: &str,
        biller_code: &str,
        country: &str,
    ) -> Result<Envelope> {
        if !self.is_bill_type(kind) {
            return Ok(Envelope::failure(format!(
                "Please enter a correct bill type. Recognized types: {}",
                self.bill_type_codes()
            )));
        }

        let table = &self.config().bill_types;
        let query: Vec<(&str, String)> = if kind == "all" {
            table
                .iter()
                .filter(|(code, _)| code != "all")
                .map(|(code, _)| (code.as_str(), "1".to_string()))
                .collect()
        } else if kind == "biller_code" {
            vec![("biller_code", biller_code.to_string())]
        } else {
            vec![(kind, "1".to_string())]
        };

        let envelope = normalize(self.get("bill-categories", &query).await?);
        if envelope.error {
            return Ok(envelope);
        }

        let country = if country.is_empty() { "NG" } else { country };
        let rows: Vec<Value> = envelope
            .data
            .as_array()
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.get("country").and_then(Value::as_str) == Some(country))
                    .cloned()
                    .map(|mut row| {
                        if let Some(commission) =
                            row.get("default_commission").and_then(Value::as_f64)
                        {
                            row["default_commission"] = json!(commission.round() as i64);
                        }
                        row
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Envelope::success(envelope.message, Value::Array(rows)))
    }

    /// Validate a bill item against a customer identifier, e.g. a phone
    /// number for airtime or a smartcard number for cable
    pub async fn validate_bill(
        &self,
        item_code: &str,
        code: &str,
        customer: &str,
    ) -> Result<Envelope> {
        let path = format!("bill-items/{}/validate", encode_path(item_code));
        let query = [
            ("code", code.to_string()),
            ("customer", customer.to_string()),
        ];
        Ok(normalize(self.get(&path, &query).await?))
    }

    /// Pay a validated bill
    pub async fn pay_bill(
        &self,
        country: &str,
        customer: &str,
        bill_type: &str,
        reference: &str,
        amount: Decimal,
    ) -> Result<Envelope> {
        let body = json!({
            "country": country,
            "customer": customer,
            "amount": amount,
            "type": bill_type,
            "reference": reference,
        });
        Ok(normalize(self.post("bills", body).await?))
    }

    /// Check the status of a bill payment by its reference
    pub async fn bill_status(&self, reference: &str) -> Result<Envelope> {
        let path = format!("bills/{}", encode_path(reference));
        Ok(normalize(self.get(&path, &[]).await?))
    }

    /// List bill payments inside a date range.
    ///
    /// `from` and `to` must be `YYYY-MM-DD`; `page` and `customer_id` are
    /// forwarded only when given.
    pub async fn bill_payments(
        &self,
        from: &str,
        to: &str,
        page: Option<u32>,
        customer_id: Option<&str>,
    ) -> Result<Envelope> {
        if !(is_valid_date(from) && is_valid_date(to)) {
            return Ok(Envelope::failure("Please enter a valid date."));
        }

        let mut query = vec![("from", from.to_string()), ("to", to.to_string())];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(customer_id) = customer_id.filter(|c| !c.is_empty()) {
            query.push(("reference", customer_id.to_string()));
        }
        Ok(normalize(self.get("bills", &query).await?))
    }
}
