//! End-to-end checks for contract dispatch and decoding

use num_bigint::BigInt;
use serde_json::{json, Map, Value};
use std::str::FromStr;

use tron_contracts::{decode_contract, Address, Contract, DecodeError, KNOWN_TYPE_TAGS};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn addr(byte: &str) -> String {
    format!("41{}", byte.repeat(20))
}

#[test]
fn test_transfer_ownership_is_owner_only() {
    let owner_hex = addr("ab");
    let recipient_hex = addr("cd");
    let payload = object(json!({
        "owner_address": owner_hex,
        "to_address": recipient_hex,
        "amount": 1_000_000,
    }));

    let contract = decode_contract("TransferContract", &payload).unwrap();
    let Contract::Transfer(transfer) = &contract else {
        panic!("expected Transfer, got {contract:?}");
    };
    assert_eq!(transfer.amount, BigInt::from(1_000_000));

    let owner = Address::from_hex(&owner_hex).unwrap();
    let recipient = Address::from_hex(&recipient_hex).unwrap();
    assert!(contract.own_transaction(&owner));
    // Being paid by a transaction does not make it yours
    assert!(!contract.own_transaction(&recipient));
}

#[test]
fn test_missing_required_field_names_variant_and_field() {
    let payload = object(json!({
        "owner_address": addr("ab"),
        "to_address": addr("cd"),
    }));

    let err = decode_contract("TransferContract", &payload).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingField {
            contract: "TransferContract",
            field: "amount",
        }
    );
    assert!(err.to_string().contains("TransferContract"));
    assert!(err.to_string().contains("amount"));
}

#[test]
fn test_future_tag_never_fails() {
    let payload = object(json!({
        "anything": ["at", "all"],
        "nested": { "deep": true },
    }));

    let contract = decode_contract("SomeFutureContract", &payload).unwrap();
    let Contract::Unknown(unknown) = &contract else {
        panic!("expected Unknown, got {contract:?}");
    };
    assert_eq!(unknown.type_tag, "SomeFutureContract");
    assert_eq!(unknown.payload, payload);
    assert_eq!(contract.type_tag(), "SomeFutureContract");

    for hex in [addr("ab"), addr("cd"), addr("00")] {
        let candidate = Address::from_hex(&hex).unwrap();
        assert!(!contract.own_transaction(&candidate));
    }
}

#[test]
fn test_amounts_beyond_64_bits_survive() {
    // Parsed straight off the wire so the oversized literal reaches the
    // decoder exactly as written
    let raw = format!(
        r#"{{
            "owner_address": "{}",
            "name": "Mega",
            "abbr": "MEG",
            "precision": 18,
            "total_supply": 115792089237316195423570985008687907853269984665640564039457584007913129639935,
            "trx_num": 1,
            "num": 1,
            "start_time": 1600000000000,
            "end_time": 1700000000000
        }}"#,
        addr("ab")
    );
    let payload: Map<String, Value> = serde_json::from_str(&raw).unwrap();

    let contract = decode_contract("AssetIssueContract", &payload).unwrap();
    let Contract::AssetIssue(issue) = contract else {
        panic!("expected AssetIssue");
    };
    assert_eq!(
        issue.total_supply,
        BigInt::from_str(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        )
        .unwrap()
    );
    // Optional fields were absent, not errors
    assert_eq!(issue.frozen_supply, None);
    assert_eq!(issue.description, None);
    assert_eq!(issue.order, None);
}

#[test]
fn test_string_amounts_are_accepted() {
    let payload = object(json!({
        "owner_address": addr("ab"),
        "to_address": addr("cd"),
        "amount": "9223372036854775808",
    }));

    let contract = decode_contract("TransferContract", &payload).unwrap();
    let Contract::Transfer(transfer) = contract else {
        panic!("expected Transfer");
    };
    assert_eq!(
        transfer.amount,
        BigInt::from_str("9223372036854775808").unwrap()
    );
}

#[test]
fn test_malformed_amount_is_field_scoped() {
    let payload = object(json!({
        "owner_address": addr("ab"),
        "to_address": addr("cd"),
        "amount": "a lot",
    }));

    let err = decode_contract("TransferContract", &payload).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedNumber {
            contract: "TransferContract",
            field: "amount",
        }
    );
}

#[test]
fn test_bad_address_is_field_scoped() {
    let payload = object(json!({
        "owner_address": addr("ab"),
        "to_address": "41short",
        "amount": 1,
    }));

    match decode_contract("TransferContract", &payload).unwrap_err() {
        DecodeError::Address {
            contract, field, ..
        } => {
            assert_eq!(contract, "TransferContract");
            assert_eq!(field, "to_address");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_votes_decode_in_order() {
    let payload = object(json!({
        "owner_address": addr("ab"),
        "votes": [
            { "vote_address": addr("cd"), "vote_count": 3 },
            { "vote_address": addr("ef"), "vote_count": 1 },
        ],
    }));

    let contract = decode_contract("VoteWitnessContract", &payload).unwrap();
    let Contract::VoteWitness(vote) = contract else {
        panic!("expected VoteWitness");
    };
    assert_eq!(vote.votes.len(), 2);
    assert_eq!(vote.votes[0].vote_count, 3);
    assert_eq!(vote.votes[0].vote_address.to_hex(), addr("cd"));
    assert_eq!(vote.votes[1].vote_count, 1);
}

#[test]
fn test_trigger_optionals_absent_and_present() {
    let minimal = object(json!({
        "owner_address": addr("ab"),
        "contract_address": addr("cd"),
        "data": "a9059cbb",
    }));
    let contract = decode_contract("TriggerSmartContract", &minimal).unwrap();
    let Contract::TriggerSmartContract(trigger) = contract else {
        panic!("expected TriggerSmartContract");
    };
    assert_eq!(trigger.call_value, None);
    assert_eq!(trigger.call_token_value, None);
    assert_eq!(trigger.token_id, None);

    let full = object(json!({
        "owner_address": addr("ab"),
        "contract_address": addr("cd"),
        "data": "a9059cbb",
        "call_value": 500,
        "call_token_value": 7,
        "token_id": 1002000,
    }));
    let contract = decode_contract("TriggerSmartContract", &full).unwrap();
    let Contract::TriggerSmartContract(trigger) = contract else {
        panic!("expected TriggerSmartContract");
    };
    assert_eq!(trigger.call_value, Some(BigInt::from(500)));
    assert_eq!(trigger.token_id, Some(1_002_000));
}

#[test]
fn test_one_bad_mapping_does_not_poison_a_batch() {
    let good = object(json!({
        "owner_address": addr("ab"),
        "to_address": addr("cd"),
        "amount": 10,
    }));
    let bad = object(json!({ "owner_address": addr("ab") }));

    let batch = [
        ("TransferContract", &good),
        ("TransferContract", &bad),
        ("SomeFutureContract", &bad),
    ];
    let results: Vec<_> = batch
        .iter()
        .map(|(tag, payload)| decode_contract(tag, payload))
        .collect();

    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok(), "unknown tags are never errors");
}

#[test]
fn test_known_tag_set_matches_dispatch() {
    assert_eq!(KNOWN_TYPE_TAGS.len(), 33);
    for tag in KNOWN_TYPE_TAGS {
        assert!(tron_contracts::is_known_type_tag(tag));
    }
}

#[test]
fn test_decoded_contracts_serialize() {
    let payload = object(json!({
        "owner_address": addr("ab"),
        "to_address": addr("cd"),
        "amount": 1_000_000,
    }));
    let contract = decode_contract("TransferContract", &payload).unwrap();

    let json = serde_json::to_value(&contract).unwrap();
    assert_eq!(json["Transfer"]["owner_address"], json!(addr("ab")));
}
