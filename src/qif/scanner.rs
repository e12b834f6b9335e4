//! Line classifier and record splitter.
//!
//! Walks decoded QIF text line by line, tracking which section the
//! cursor is in, and groups consecutive tag lines into raw records
//! closed by a standalone `^` delimiter. Consumed lazily through the
//! `Iterator` impl.

use crate::model::errors::MalformedInput;

const DELIMITER: &str = "^";
const ACCOUNT_HEADER: &str = "!Account";
const CLEAR_AUTO_SWITCH: &str = "!Clear:AutoSwitch";
const TYPE_HEADER: &str = "!Type:";
const CATEGORY_SECTION: &str = "Cat";

/// Section kind a raw record was collected in. Determined by scanner
/// state, never by the record's own content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Account,
    Transaction,
}

/// Tag/value pairs collected between `^` delimiters, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub kind: SectionKind,
    pub fields: Vec<(char, String)>,
}

/// One step of the line classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A record closed by its `^` delimiter.
    Record(RawRecord),
    /// A transaction-type section header, carrying the account type it
    /// names (the `Bank` of `!Type:Bank`).
    TransactionType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Nothing recognized yet; preamble lines are skipped.
    BeforeAccounts,
    /// The next closed record describes an account.
    InAccountHeader,
    /// Closed records are transactions of the current account.
    InTransactions,
}

pub struct Scanner<'a> {
    lines: std::str::Lines<'a>,
    state: ScanState,
    pending: Vec<(char, String)>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Scanner {
            lines: text.lines(),
            state: ScanState::BeforeAccounts,
            pending: Vec::new(),
            failed: false,
        }
    }

    /// Apply a `!…` header line to the state machine. Returns the event
    /// to emit, if any.
    fn on_header(&mut self, line: &str) -> Option<ScanEvent> {
        if line.starts_with(ACCOUNT_HEADER) || line == CLEAR_AUTO_SWITCH {
            self.state = ScanState::InAccountHeader;
            return None;
        }
        let kind = section_type(line)?;
        if kind.eq_ignore_ascii_case(CATEGORY_SECTION) {
            // Category/class lists are unsupported; skip until the next
            // account header.
            self.state = ScanState::BeforeAccounts;
            self.pending.clear();
            return None;
        }
        match self.state {
            // A leading type header opens the account block.
            ScanState::BeforeAccounts => {
                self.state = ScanState::InAccountHeader;
                None
            }
            ScanState::InAccountHeader | ScanState::InTransactions => {
                self.state = ScanState::InTransactions;
                Some(ScanEvent::TransactionType(kind.trim().to_string()))
            }
        }
    }
}

/// The section type named by a `!Type:…` header, case-insensitive on
/// the marker itself (`!TYPE:Cat` appears in Mac exports).
fn section_type(line: &str) -> Option<&str> {
    let marker = line.get(..TYPE_HEADER.len())?;
    if marker.eq_ignore_ascii_case(TYPE_HEADER) {
        Some(&line[TYPE_HEADER.len()..])
    } else {
        None
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<ScanEvent, MalformedInput>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let Some(raw) = self.lines.next() else {
                // A trailing delimiter and newline must have closed the
                // final record; leftover tag lines are rejected rather
                // than silently dropped.
                if self.pending.is_empty() {
                    return None;
                }
                self.failed = true;
                return Some(Err(MalformedInput::UnterminatedRecord));
            };
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line == DELIMITER {
                let kind = match self.state {
                    ScanState::BeforeAccounts => continue,
                    ScanState::InAccountHeader => SectionKind::Account,
                    ScanState::InTransactions => SectionKind::Transaction,
                };
                let fields = std::mem::take(&mut self.pending);
                return Some(Ok(ScanEvent::Record(RawRecord { kind, fields })));
            }
            if line.starts_with('!') {
                if let Some(event) = self.on_header(line) {
                    return Some(Ok(event));
                }
                continue;
            }
            if self.state == ScanState::BeforeAccounts {
                continue;
            }
            let mut chars = line.chars();
            let Some(code) = chars.next() else { continue };
            self.pending.push((code, chars.as_str().trim().to_string()));
        }
    }
}
