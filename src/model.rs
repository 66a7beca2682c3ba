//! Wire and display types shared by the pages

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Credit => "CREDIT",
            TransactionType::Debit => "DEBIT",
        }
    }

    pub fn sign(self) -> char {
        match self {
            TransactionType::Credit => '+',
            TransactionType::Debit => '-',
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TransactionType::Credit => Tone::Positive,
            TransactionType::Debit => Tone::Negative,
        }
    }

    /// Arrow glyph used in the description cell
    pub fn arrow(self) -> &'static str {
        match self {
            TransactionType::Credit => "↗",
            TransactionType::Debit => "↘",
        }
    }
}

/// Colour family of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Positive => "amount-positive",
            Tone::Negative => "amount-negative",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Positive => "tx-icon tx-icon-positive",
            Tone::Negative => "tx-icon tx-icon-negative",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub sender_account_number: String,
    pub receiver_account_number: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub created_at: String,
}

/// Backends disagree on whether ids are strings or integers
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(n) => n.to_string(),
    })
}

impl Transaction {
    /// `+$12.50` for credits, `-$12.50` for debits. Depends on `kind` only.
    pub fn signed_amount(&self) -> String {
        format!("{}${:.2}", self.kind.sign(), self.amount.abs())
    }

    pub fn tone(&self) -> Tone {
        self.kind.tone()
    }

    pub fn description(&self) -> String {
        format!(
            "{} → {}",
            self.sender_account_number, self.receiver_account_number
        )
    }

    /// Calendar date of `created_at` as `M/D/YYYY`, or the raw value when it
    /// cannot be parsed
    pub fn display_date(&self) -> String {
        crate::utils::format_date(&self.created_at)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
    Investment,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [
        AccountType::Savings,
        AccountType::Checking,
        AccountType::Investment,
    ];
    pub const CODES: &'static [&'static str] = &["SAVINGS", "CHECKING", "INVESTMENT"];

    pub fn code(self) -> &'static str {
        match self {
            AccountType::Savings => "SAVINGS",
            AccountType::Checking => "CHECKING",
            AccountType::Investment => "INVESTMENT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::Investment => "Investment",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Inr];
    pub const CODES: &'static [&'static str] = &["USD", "EUR", "GBP", "INR"];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Body of `POST /auth/profile`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProfileRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Body of `POST /accounts`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountRequest {
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: Currency,
}

/// Profile object returned by the backend. Unknown fields are kept so the
/// cached copy matches what the server sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Up to two initials for the avatar
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Account object returned by `POST /accounts`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default, rename = "type")]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id: "t1".to_string(),
            sender_account_number: "ACC-1".to_string(),
            receiver_account_number: "ACC-2".to_string(),
            kind,
            amount,
            created_at: "2024-03-05T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_transaction_from_backend_json() {
        let raw = r#"{
            "id": "42",
            "senderAccountNumber": "111",
            "receiverAccountNumber": "222",
            "type": "DEBIT",
            "amount": 19.5,
            "createdAt": "2024-01-02T03:04:05"
        }"#;
        let parsed: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.kind, TransactionType::Debit);
        assert_eq!(parsed.sender_account_number, "111");
        assert_eq!(parsed.description(), "111 → 222");
    }

    #[test]
    fn test_numeric_transaction_id() {
        let raw = r#"{
            "id": 9,
            "senderAccountNumber": "1",
            "receiverAccountNumber": "2",
            "type": "CREDIT",
            "amount": 1,
            "createdAt": "2024-01-02"
        }"#;
        let parsed: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, "9");
    }

    #[test]
    fn test_sign_and_tone_follow_type_only() {
        let credit = tx(TransactionType::Credit, 12.5);
        let debit = tx(TransactionType::Debit, 12.5);
        assert_eq!(credit.signed_amount(), "+$12.50");
        assert_eq!(credit.tone(), Tone::Positive);
        assert_eq!(debit.signed_amount(), "-$12.50");
        assert_eq!(debit.tone(), Tone::Negative);
    }

    #[test]
    fn test_zero_amount_keeps_sign() {
        assert_eq!(tx(TransactionType::Credit, 0.0).signed_amount(), "+$0.00");
        assert_eq!(tx(TransactionType::Debit, 0.0).signed_amount(), "-$0.00");
        assert_eq!(tx(TransactionType::Debit, 0.0).tone(), Tone::Negative);
    }

    #[test]
    fn test_account_request_wire_shape() {
        let request = AccountRequest {
            account_type: AccountType::Checking,
            balance: Decimal::new(100050, 2),
            currency: Currency::Eur,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": "CHECKING", "balance": 1000.5, "currency": "EUR" })
        );
    }

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let raw = r#"{ "id": 7, "name": "Ada Lovelace", "email": "ada@example.com" }"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.initials(), "AL");
        assert_eq!(profile.extra.get("email").and_then(|v| v.as_str()), Some("ada@example.com"));
        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["id"], 7);
    }

    #[test]
    fn test_codes_round_trip_through_lookup() {
        assert_eq!(AccountType::from_code("INVESTMENT"), Some(AccountType::Investment));
        assert_eq!(AccountType::from_code("savings"), None);
        assert_eq!(Currency::from_code("INR"), Some(Currency::Inr));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
