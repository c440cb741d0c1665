const TRANSFER: &str = "TRANSFER";
const TRANSFER_OUT: &str = "TRANSFER_OUT";
const TRANSFER_IN: &str = "TRANSFER_IN";
const INTERNAL_TRANSFER: &str = "INTERNAL_TRANSFER";

/// Maps a ledger transaction type into the external feed's vocabulary.
///
/// Transfers are split by which counterpart accounts are present. Every other
/// type, including `DEPOSIT` and `WITHDRAWAL`, is returned upper-cased.
pub fn normalize(ledger_type: &str, has_from_account: bool, has_to_account: bool) -> String {
    let ledger_type = ledger_type.to_uppercase();

    if ledger_type != TRANSFER {
        return ledger_type
    }

    match (has_from_account, has_to_account) {
        (true, false) => TRANSFER_OUT.to_string(),
        (false, true) => TRANSFER_IN.to_string(),
        (true, true) => INTERNAL_TRANSFER.to_string(),
        (false, false) => ledger_type
    }
}
