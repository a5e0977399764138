use super::*;

fn make_tx(id: &str, beneficiary: &str, account: &str, status: &str) -> Transaction {
    Transaction {
        transaction_id: id.to_owned(),
        transaction_type: "WIRE_TRANSFER".to_owned(),
        from_account_number: Some("TAL-0000000042".to_owned()),
        to_account_number: account.to_owned(),
        beneficiary_name: beneficiary.to_owned(),
        amount: 100.0,
        currency: "EUR".to_owned(),
        description: None,
        initiated_at: None,
        status: status.to_owned(),
        risk_score: Some(10),
        signature_verified: false,
        executed_at: None,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        make_tx("tx-aaa", "ACME Inc.", "TAL-0000000001", "EXECUTED"),
        make_tx("tx-bbb", "Globex Corp", "TAL-0000000002", "PENDING"),
        make_tx("tx-ccc", "ACME Inc.", "TAL-0000000003", "SIGNED"),
    ]
}

#[test]
fn empty_search_and_all_status_keep_everything() {
    let items = sample();
    assert_eq!(filter_transactions(&items, "", "ALL").len(), 3);
}

#[test]
fn search_matches_beneficiary_case_insensitively() {
    let items = sample();
    let hits = filter_transactions(&items, "acme", "ALL");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|tx| tx.beneficiary_name == "ACME Inc."));
}

#[test]
fn search_matches_id_and_account() {
    let items = sample();
    assert_eq!(filter_transactions(&items, "tx-bbb", "ALL").len(), 1);
    assert_eq!(filter_transactions(&items, "0000000003", "ALL").len(), 1);
}

#[test]
fn status_filter_is_exact() {
    let items = sample();
    let hits = filter_transactions(&items, "", "PENDING");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].transaction_id, "tx-bbb");
}

#[test]
fn search_and_status_combine() {
    let items = sample();
    assert_eq!(filter_transactions(&items, "acme", "SIGNED").len(), 1);
    assert!(filter_transactions(&items, "acme", "PENDING").is_empty());
}

#[test]
fn whitespace_only_search_matches_everything() {
    let items = sample();
    assert_eq!(filter_transactions(&items, "   ", "ALL").len(), 3);
}
