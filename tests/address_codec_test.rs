//! End-to-end checks for the address codec

use tron_contracts::{Address, AddressError, ADDRESS_LEN, ADDRESS_PREFIX};

const USDT_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";
const USDT_BASE58: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

#[test]
fn test_base58_round_trip_over_payload_space() {
    // A spread of payloads: all-zero hash, all-ff hash, patterned bytes
    let mut payloads: Vec<[u8; ADDRESS_LEN]> = vec![[0u8; ADDRESS_LEN], [0xffu8; ADDRESS_LEN]];
    for seed in [1u8, 0x5a, 0xa5, 0xfe] {
        let mut raw = [0u8; ADDRESS_LEN];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = seed.wrapping_mul(i as u8).wrapping_add(seed);
        }
        payloads.push(raw);
    }

    for mut raw in payloads {
        raw[0] = ADDRESS_PREFIX;
        let address = Address::from_bytes(&raw).unwrap();
        let decoded = Address::from_base58(&address.to_base58()).unwrap();
        assert_eq!(decoded, address);
        assert_eq!(decoded.as_bytes(), &raw);
    }
}

#[test]
fn test_hex_round_trip_is_canonical() {
    for input in [
        USDT_HEX.to_string(),
        format!("0x{USDT_HEX}"),
        USDT_HEX[2..].to_string(),
        USDT_HEX.to_uppercase().replace("41A", "41a"),
    ] {
        let address = Address::from_hex(&input).unwrap();
        // Re-encoding always yields the canonical lowercase 41-prefixed form
        assert_eq!(address.to_hex().to_lowercase(), USDT_HEX);
    }
}

#[test]
fn test_cross_format_agreement() {
    let from_hex = Address::from_hex(USDT_HEX).unwrap();
    let from_base58 = Address::from_base58(USDT_BASE58).unwrap();

    assert_eq!(from_hex, from_base58);
    assert_eq!(from_hex.to_base58(), USDT_BASE58);
    assert_eq!(from_base58.to_hex(), USDT_HEX);
    assert_eq!(from_hex.to_string(), USDT_BASE58);
}

#[test]
fn test_wrong_lengths_are_malformed() {
    assert!(matches!(
        Address::from_bytes(&[ADDRESS_PREFIX; 20]),
        Err(AddressError::Malformed(_))
    ));
    assert!(matches!(
        Address::from_bytes(&[ADDRESS_PREFIX; 22]),
        Err(AddressError::Malformed(_))
    ));
    assert!(matches!(
        Address::from_hex("41a614"),
        Err(AddressError::Malformed(_))
    ));
}

#[test]
fn test_checksum_corruption_is_detected() {
    // Rebuild the Base58Check string with each checksum byte disturbed
    let address = Address::from_hex(USDT_HEX).unwrap();
    let encoded = address.to_base58();
    let raw = bs58::decode(&encoded).into_vec().unwrap();
    assert_eq!(raw.len(), ADDRESS_LEN + 4);

    for i in ADDRESS_LEN..raw.len() {
        for flip in [0x01u8, 0x80u8] {
            let mut corrupted = raw.clone();
            corrupted[i] ^= flip;
            let text = bs58::encode(corrupted).into_string();
            assert!(
                matches!(
                    Address::from_base58(&text),
                    Err(AddressError::ChecksumMismatch(_))
                ),
                "corruption of byte {i} went undetected"
            );
        }
    }
}

#[test]
fn test_payload_corruption_is_detected() {
    // Disturbing the payload region invalidates the checksum too
    let raw = bs58::decode(USDT_BASE58).into_vec().unwrap();
    let mut corrupted = raw.clone();
    corrupted[10] ^= 0x01;
    let text = bs58::encode(corrupted).into_string();
    assert!(matches!(
        Address::from_base58(&text),
        Err(AddressError::ChecksumMismatch(_))
    ));
}
