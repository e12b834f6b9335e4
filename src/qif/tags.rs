//! Fixed mapping from QIF tag codes to output field names, one table
//! per record kind because several codes carry different meanings in
//! account and transaction records (`T` is the account type but the
//! transaction amount). Codes absent from a table pass through under a
//! field named by the code itself.

const ACCOUNT_TAGS: &[(char, &str)] = &[
    ('N', "Name"),
    ('T', "Type"),
    ('D', "Description"),
    ('B', "Balance"),
    ('L', "Credit Limit"),
    ('A', "Address"),
];

/// Split lines (`S`/`E`/`$`) and address accumulation (`A`) are handled
/// by the materializer, not this table.
const TRANSACTION_TAGS: &[(char, &str)] = &[
    ('D', "Date"),
    ('P', "Payee"),
    ('T', "Amount"),
    ('U', "Amount2"),
    ('M', "Memo"),
    ('C', "Reconciled"),
    ('L', "Category"),
    ('N', "Transfer"),
    ('F', "Reimbursable"),
    ('Y', "Security Name"),
    ('I', "Security Price"),
    ('Q', "Share Qty"),
    ('O', "Commission Cost"),
];

fn lookup(table: &'static [(char, &'static str)], code: char) -> Option<&'static str> {
    table
        .iter()
        .find(|(tag, _)| *tag == code)
        .map(|(_, field)| *field)
}

pub fn account_field(code: char) -> Option<&'static str> {
    lookup(ACCOUNT_TAGS, code)
}

pub fn transaction_field(code: char) -> Option<&'static str> {
    lookup(TRANSACTION_TAGS, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_codes_resolve_per_record_kind() {
        assert_eq!(account_field('T'), Some("Type"));
        assert_eq!(transaction_field('T'), Some("Amount"));
        assert_eq!(account_field('L'), Some("Credit Limit"));
        assert_eq!(transaction_field('L'), Some("Category"));
    }

    #[test]
    fn unknown_codes_have_no_mapping() {
        assert_eq!(account_field('Z'), None);
        assert_eq!(transaction_field('Z'), None);
    }
}
