//! Record materializer.
//!
//! Consumes scanner events in order, tracking the account currently
//! receiving transactions, and assembles the output document. Tag codes
//! are resolved through the fixed tables in [`tags`]; codes missing
//! from a table pass through under the code itself.

use serde_json::Value;

use crate::model::document::{init_account, init_transaction, Document, FieldPolicy, Fields};
use crate::model::errors::MalformedInput;
use crate::qif::scanner::{RawRecord, ScanEvent, SectionKind};
use crate::qif::tags;

const TYPE_KEY: &str = "Type";
const COUNT_KEY: &str = "Transaction Count";
const LIST_KEY: &str = "Transaction";
const ADDRESS_KEY: &str = "Address";
const SPLITS_KEY: &str = "Splits";

pub struct Materializer {
    policy: FieldPolicy,
    accounts: Vec<Fields>,
    current: Option<PendingAccount>,
}

struct PendingAccount {
    fields: Fields,
    transactions: Vec<Value>,
}

impl Materializer {
    pub fn new(policy: FieldPolicy) -> Self {
        Materializer {
            policy,
            accounts: Vec::new(),
            current: None,
        }
    }

    pub fn push(&mut self, event: ScanEvent) -> Result<(), MalformedInput> {
        match event {
            ScanEvent::Record(record) => match record.kind {
                SectionKind::Account => {
                    self.begin_account(record);
                    Ok(())
                }
                SectionKind::Transaction => self.push_transaction(record),
            },
            // The transaction-type header names the account's type; it
            // wins over a `T` tag in the account record.
            ScanEvent::TransactionType(kind) => {
                if let Some(current) = self.current.as_mut() {
                    current
                        .fields
                        .insert(TYPE_KEY.to_string(), Value::String(kind));
                }
                Ok(())
            }
        }
    }

    pub fn finish(mut self) -> Document {
        self.flush_current();
        Document {
            accounts: self.accounts,
        }
    }

    fn begin_account(&mut self, record: RawRecord) {
        self.flush_current();
        let mut fields = init_account(self.policy);
        for (code, value) in record.fields {
            let key = tags::account_field(code)
                .map(str::to_string)
                .unwrap_or_else(|| code.to_string());
            fields.insert(key, Value::String(value));
        }
        self.current = Some(PendingAccount {
            fields,
            transactions: Vec::new(),
        });
    }

    fn push_transaction(&mut self, record: RawRecord) -> Result<(), MalformedInput> {
        let current = self
            .current
            .as_mut()
            .ok_or(MalformedInput::TransactionBeforeAccount)?;

        let mut fields = init_transaction(self.policy);
        let mut splits = SplitBuilder::default();
        for (code, value) in record.fields {
            match code {
                'S' => splits.category(value),
                'E' => splits.memo(value),
                '$' => splits.amount(value),
                'A' => append_address(&mut fields, value),
                _ => {
                    let key = tags::transaction_field(code)
                        .map(str::to_string)
                        .unwrap_or_else(|| code.to_string());
                    fields.insert(key, Value::String(value));
                }
            }
        }
        let splits = splits.finish();
        if !splits.is_empty() {
            fields.insert(SPLITS_KEY.to_string(), Value::Array(splits));
        }

        current.transactions.push(Value::Object(fields));
        Ok(())
    }

    /// Finalize the current account into the output. The transaction
    /// count is always the live list length, never a source value.
    fn flush_current(&mut self) {
        if let Some(pending) = self.current.take() {
            let mut fields = pending.fields;
            fields.insert(
                COUNT_KEY.to_string(),
                Value::from(pending.transactions.len()),
            );
            fields.insert(LIST_KEY.to_string(), Value::Array(pending.transactions));
            self.accounts.push(fields);
        }
    }
}

/// Drive a full event stream through a [`Materializer`].
pub fn materialize<I>(events: I, policy: FieldPolicy) -> Result<Document, MalformedInput>
where
    I: IntoIterator<Item = Result<ScanEvent, MalformedInput>>,
{
    let mut materializer = Materializer::new(policy);
    for event in events {
        materializer.push(event?)?;
    }
    Ok(materializer.finish())
}

/// Repeated `A` lines accumulate into one comma-separated address.
fn append_address(fields: &mut Fields, value: String) {
    match fields.get_mut(ADDRESS_KEY) {
        Some(Value::String(existing)) => {
            existing.push_str(", ");
            existing.push_str(&value);
        }
        _ => {
            fields.insert(ADDRESS_KEY.to_string(), Value::String(value));
        }
    }
}

/// Split lines come in `S` (category), `E` (memo), `$` (amount) groups;
/// the `$` line closes one split.
#[derive(Default)]
struct SplitBuilder {
    current: Fields,
    done: Vec<Value>,
}

impl SplitBuilder {
    fn category(&mut self, value: String) {
        self.current
            .insert("Category".to_string(), Value::String(value));
    }

    fn memo(&mut self, value: String) {
        self.current.insert("Memo".to_string(), Value::String(value));
    }

    fn amount(&mut self, value: String) {
        self.current
            .insert("Amount".to_string(), Value::String(value));
        self.done.push(Value::Object(std::mem::take(&mut self.current)));
    }

    fn finish(self) -> Vec<Value> {
        let mut done = self.done;
        if !self.current.is_empty() {
            done.push(Value::Object(self.current));
        }
        done
    }
}
