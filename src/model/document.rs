use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered field map backing one output object. `serde_json` is built
/// with `preserve_order`, so key order is frozen at first insertion and
/// updating a seeded key keeps its slot.
pub type Fields = Map<String, Value>;

/// Controls whether output objects always carry the fixed default field
/// set, filling fields absent from the source with empty values. Fixed
/// for the duration of one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub account_defaults: bool,
    pub transaction_defaults: bool,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        FieldPolicy {
            account_defaults: true,
            transaction_defaults: true,
        }
    }
}

/// Seed map for one account. With defaults enabled the fixed keys are
/// present up front in their final order; tag values and the derived
/// transaction count/list later overwrite them in place.
pub fn init_account(policy: FieldPolicy) -> Fields {
    let mut fields = Fields::new();
    if policy.account_defaults {
        fields.insert("Name".to_string(), Value::String(String::new()));
        fields.insert("Description".to_string(), Value::String(String::new()));
        fields.insert("Type".to_string(), Value::String(String::new()));
        fields.insert("Transaction Count".to_string(), Value::from(0));
        fields.insert("Transaction".to_string(), Value::Array(Vec::new()));
    }
    fields
}

/// Seed map for one transaction.
pub fn init_transaction(policy: FieldPolicy) -> Fields {
    let mut fields = Fields::new();
    if policy.transaction_defaults {
        fields.insert("Date".to_string(), Value::String(String::new()));
        fields.insert("Payee".to_string(), Value::String(String::new()));
        fields.insert("Amount".to_string(), Value::String(String::new()));
        fields.insert("Category".to_string(), Value::String(String::new()));
    }
    fields
}

/// Final conversion result: the ordered account list. Serializes as a
/// bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub accounts: Vec<Fields>,
}

impl Document {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
