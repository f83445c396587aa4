//! Request and response types for the Flutterwave API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform result shape returned by every API operation.
///
/// `error` is `false` exactly when the provider reported success; `data` is
/// the empty JSON array whenever `error` is `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the operation failed
    pub error: bool,
    /// Provider message, or a local validation message
    pub message: String,
    /// Provider payload on success, empty array on failure
    pub data: Value,
}

impl Envelope {
    /// Build a success envelope carrying the provider's payload
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            error: false,
            message: message.into(),
            data,
        }
    }

    /// Build a failure envelope; `data` is always the empty array
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: Value::Array(Vec::new()),
        }
    }

    /// Whether the operation succeeded
    pub fn is_success(&self) -> bool {
        !self.error
    }
}

/// Currencies the provider can settle in
pub mod currencies {
    /// Settlement currencies accepted out of the box.
    ///
    /// [`Config`](crate::Config) copies this table at construction; override
    /// it per instance with
    /// [`with_supported_currencies`](crate::Config::with_supported_currencies).
    pub const SUPPORTED: &[&str] = &[
        "NGN", "KES", "GHS", "USD", "EUR", "ZAR", "GBP", "TZS", "UGX", "RWF",
        "ZMW", "INR", "XOF", "MUR", "ETB", "JPY", "MAD", "XAF", "AUD", "CAD",
        "MYR", "CNY", "BRL", "eNGN", "MWK",
    ];

    /// Check if a currency code is in the default table
    pub fn is_supported(code: &str) -> bool {
        SUPPORTED.contains(&code)
    }
}

/// Payable bill categories
pub mod bill_types {
    /// Recognized bill categories as `(code, label)` pairs.
    ///
    /// `"all"` and `"biller_code"` select the catalog-wide and biller-scoped
    /// listing routes rather than a single category.
    pub const RECOGNIZED: &[(&str, &str)] = &[
        ("airtime", "Airtime"),
        ("data_bundle", "Data Bundle"),
        ("power", "Power"),
        ("internet", "Internet"),
        ("toll", "Toll"),
        ("biller_code", "Biller Code"),
        ("cables", "Cable"),
        ("all", "All"),
    ];

    /// Check if a bill category code is in the default table
    pub fn is_recognized(code: &str) -> bool {
        RECOGNIZED.iter().any(|(c, _)| *c == code)
    }
}

/// Delivery channel for one-time passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpChannel {
    Email,
    Whatsapp,
    Sms,
}

impl OtpChannel {
    /// Every delivery channel, in the provider's documented order
    pub fn all() -> [OtpChannel; 3] {
        [OtpChannel::Email, OtpChannel::Whatsapp, OtpChannel::Sms]
    }
}

/// Filters for the transaction listing endpoint.
///
/// Every field is optional, but at least one must be set before the listing
/// call will go out. `from` and `to` are only emitted as a pair.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Start of the date range (`YYYY-MM-DD`)
    pub from: Option<String>,
    /// End of the date range (`YYYY-MM-DD`)
    pub to: Option<String>,
    /// Page of results to fetch
    pub page: Option<u32>,
    /// Filter by customer email
    pub customer_email: Option<String>,
    /// Filter by transaction status, e.g. `successful`
    pub status: Option<String>,
    /// Filter by merchant transaction reference
    pub tx_ref: Option<String>,
    /// Filter by customer full name
    pub customer_fullname: Option<String>,
    /// Filter by settlement currency
    pub currency: Option<String>,
}

impl TransactionFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to a date range; both bounds are required
    pub fn with_date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    /// Select a result page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Filter by customer email
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Filter by transaction status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filter by merchant transaction reference
    pub fn with_tx_ref(mut self, tx_ref: impl Into<String>) -> Self {
        self.tx_ref = Some(tx_ref.into());
        self
    }

    /// Filter by customer full name
    pub fn with_customer_fullname(mut self, name: impl Into<String>) -> Self {
        self.customer_fullname = Some(name.into());
        self
    }

    /// Filter by settlement currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Assemble the query pairs in the provider's documented order.
    ///
    /// An empty result means no recognized filter was set and the call must
    /// fail locally.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            pairs.push(("from", from.clone()));
            pairs.push(("to", to.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(email) = &self.customer_email {
            pairs.push(("customer_email", email.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(tx_ref) = &self.tx_ref {
            pairs.push(("tx_ref", tx_ref.clone()));
        }
        if let Some(name) = &self.customer_fullname {
            pairs.push(("customer_fullname", name.clone()));
        }
        if let Some(currency) = &self.currency {
            pairs.push(("currency", currency.clone()));
        }
        pairs
    }
}

/// Request body for creating a virtual account number
#[derive(Debug, Clone, Serialize)]
pub struct VirtualAccountRequest {
    /// Customer email the account is issued against
    pub email: String,
    /// Whether the account number is permanent or single-use
    pub is_permanent: bool,
    /// Customer BVN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,
    /// Customer phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonenumber: Option<String>,
    /// Customer first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Customer last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Narration shown on the account statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
}

impl VirtualAccountRequest {
    /// Create a single-use virtual account request for a customer email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_permanent: false,
            bvn: None,
            phonenumber: None,
            firstname: None,
            lastname: None,
            narration: None,
        }
    }

    /// Mark the account as permanent
    pub fn permanent(mut self, is_permanent: bool) -> Self {
        self.is_permanent = is_permanent;
        self
    }

    /// Attach the customer BVN
    pub fn with_bvn(mut self, bvn: impl Into<String>) -> Self {
        self.bvn = Some(bvn.into());
        self
    }

    /// Attach the customer phone number
    pub fn with_phonenumber(mut self, phonenumber: impl Into<String>) -> Self {
        self.phonenumber = Some(phonenumber.into());
        self
    }

    /// Attach the customer name
    pub fn with_name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    /// Attach a statement narration
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }
}

/// Request for a bank transfer.
///
/// Fields left unset fall back to client configuration when the transfer is
/// created: `currency` to the default settlement currency, `debit_currency`
/// to the admin debit currency, `narration` to `"<sender> transfer"`.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Destination bank code
    pub bank_code: String,
    /// Destination account number
    pub account_number: String,
    /// Amount to transfer
    pub amount: Decimal,
    /// Unique merchant reference for the transfer
    pub reference: String,
    /// Narration shown to the recipient
    pub narration: Option<String>,
    /// Settlement currency
    pub currency: Option<String>,
    /// Currency of the wallet to debit
    pub debit_currency: Option<String>,
    /// Arbitrary metadata forwarded with the transfer
    pub meta: Option<Value>,
}

impl TransferRequest {
    /// Create a transfer request with the required fields
    pub fn new(
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
        amount: Decimal,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            bank_code: bank_code.into(),
            account_number: account_number.into(),
            amount,
            reference: reference.into(),
            narration: None,
            currency: None,
            debit_currency: None,
            meta: None,
        }
    }

    /// Set the recipient narration
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    /// Set the settlement currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the wallet currency to debit
    pub fn with_debit_currency(mut self, debit_currency: impl Into<String>) -> Self {
        self.debit_currency = Some(debit_currency.into());
        self
    }

    /// Attach metadata to the transfer
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Request for a new virtual prepaid card.
///
/// `reference` is the caller's unique id for the card; it is appended to the
/// configured webhook URL so card events can be routed back to this request.
#[derive(Debug, Clone)]
pub struct VirtualCardRequest {
    /// Caller-supplied unique reference for webhook routing
    pub reference: String,
    /// Card currency
    pub currency: String,
    /// Opening balance; must cover the provider's issuance charge
    pub amount: Decimal,
    /// Name embossed on the card
    pub billing_name: String,
    /// Billing address
    pub billing_address: Option<String>,
    /// Billing city
    pub billing_city: Option<String>,
    /// Billing state
    pub billing_state: Option<String>,
    /// Billing postal code
    pub billing_postal_code: Option<String>,
}

impl VirtualCardRequest {
    /// Create a card request with the required fields
    pub fn new(
        reference: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
        billing_name: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            currency: currency.into(),
            amount,
            billing_name: billing_name.into(),
            billing_address: None,
            billing_city: None,
            billing_state: None,
            billing_postal_code: None,
        }
    }

    /// Set the billing address
    pub fn with_billing_address(mut self, address: impl Into<String>) -> Self {
        self.billing_address = Some(address.into());
        self
    }

    /// Set the billing city
    pub fn with_billing_city(mut self, city: impl Into<String>) -> Self {
        self.billing_city = Some(city.into());
        self
    }

    /// Set the billing state
    pub fn with_billing_state(mut self, state: impl Into<String>) -> Self {
        self.billing_state = Some(state.into());
        self
    }

    /// Set the billing postal code
    pub fn with_billing_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.billing_postal_code = Some(postal_code.into());
        self
    }
}
