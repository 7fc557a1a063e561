//! Tron address value object and its hex / Base58Check codecs
//!
//! A Tron address is 21 bytes on the wire: one network prefix byte (0x41 on
//! mainnet) followed by a 20-byte account hash. The hex form is what node
//! APIs emit inside contract payloads; the Base58Check form is what users
//! see and paste, with a 4-byte double-SHA256 checksum appended so that a
//! corrupted character is caught before the address is ever compared or
//! displayed.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Total byte length of an address: prefix byte + 20-byte hash
pub const ADDRESS_LEN: usize = 21;

/// Network prefix byte for Tron mainnet addresses
pub const ADDRESS_PREFIX: u8 = 0x41;

/// Errors produced while decoding address text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input is not decodable to the 21-byte binary form
    #[error("malformed address: {0:?}")]
    Malformed(String),

    /// The Base58Check checksum does not match the recomputed value
    #[error("address checksum mismatch: {0:?}")]
    ChecksumMismatch(String),
}

/// A validated 21-byte Tron address
///
/// Equality, ordering and hashing are byte-wise; ownership checks on decoded
/// contracts reduce to `==` on this type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Construct from the raw 21-byte form
    ///
    /// Fails unless the slice is exactly 21 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let raw: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::Malformed(hex::encode(bytes)))?;
        Ok(Self(raw))
    }

    /// Decode the hex textual form
    ///
    /// Accepts `41`-prefixed hex (42 chars), the same with a leading `0x`,
    /// or the bare 40-char hash. After stripping prefixes the remainder must
    /// be exactly 40 hex characters.
    pub fn from_hex(text: &str) -> Result<Self, AddressError> {
        let stripped = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let stripped = match stripped.len() {
            42 => stripped
                .strip_prefix("41")
                .ok_or_else(|| AddressError::Malformed(text.to_string()))?,
            _ => stripped,
        };

        if stripped.len() != 40 {
            return Err(AddressError::Malformed(text.to_string()));
        }
        let hash = hex::decode(stripped).map_err(|_| AddressError::Malformed(text.to_string()))?;

        let mut raw = [0u8; ADDRESS_LEN];
        raw[0] = ADDRESS_PREFIX;
        raw[1..].copy_from_slice(&hash);
        Ok(Self(raw))
    }

    /// Decode the Base58Check textual form
    ///
    /// The decoded bytes must be the 21-byte payload followed by a 4-byte
    /// checksum equal to the first 4 bytes of SHA256(SHA256(payload)).
    pub fn from_base58(text: &str) -> Result<Self, AddressError> {
        let decoded = bs58::decode(text)
            .into_vec()
            .map_err(|_| AddressError::Malformed(text.to_string()))?;
        if decoded.len() != ADDRESS_LEN + 4 {
            return Err(AddressError::Malformed(text.to_string()));
        }

        let (payload, checksum) = decoded.split_at(ADDRESS_LEN);
        if base58_checksum(payload) != checksum {
            return Err(AddressError::ChecksumMismatch(text.to_string()));
        }
        Self::from_bytes(payload)
    }

    /// Hex form, always 42 characters starting with the `41` prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Base58Check form (mainnet addresses start with `T`)
    pub fn to_base58(&self) -> String {
        let mut payload = Vec::with_capacity(ADDRESS_LEN + 4);
        payload.extend_from_slice(&self.0);
        payload.extend_from_slice(&base58_checksum(&self.0));
        bs58::encode(payload).into_string()
    }

    /// The full 21-byte form
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The 20-byte account hash, without the network prefix
    pub fn hash(&self) -> &[u8] {
        &self.0[1..]
    }
}

/// First 4 bytes of SHA256(SHA256(payload))
fn base58_checksum(payload: &[u8]) -> [u8; 4] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&digest[..4]);
    checksum
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Address::from_hex(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // USDT TRC-20 contract address, both textual forms
    const USDT_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";
    const USDT_BASE58: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

    #[test]
    fn test_hex_forms() {
        let plain = Address::from_hex(USDT_HEX).unwrap();
        let prefixed = Address::from_hex(&format!("0x{USDT_HEX}")).unwrap();
        let bare = Address::from_hex(&USDT_HEX[2..]).unwrap();

        assert_eq!(plain, prefixed);
        assert_eq!(plain, bare);
        assert_eq!(plain.to_hex(), USDT_HEX);
        assert_eq!(plain.as_bytes()[0], ADDRESS_PREFIX);
    }

    #[test]
    fn test_base58_cross_form() {
        let from_hex = Address::from_hex(USDT_HEX).unwrap();
        let from_base58 = Address::from_base58(USDT_BASE58).unwrap();

        assert_eq!(from_hex, from_base58);
        assert_eq!(from_hex.to_base58(), USDT_BASE58);
        assert_eq!(from_base58.to_hex(), USDT_HEX);
    }

    #[test]
    fn test_base58_round_trip() {
        let mut raw = [0u8; ADDRESS_LEN];
        raw[0] = ADDRESS_PREFIX;
        for (i, byte) in raw.iter_mut().enumerate().skip(1) {
            *byte = i as u8;
        }
        let address = Address::from_bytes(&raw).unwrap();

        let encoded = address.to_base58();
        let decoded = Address::from_base58(&encoded).unwrap();
        assert_eq!(address, decoded);
    }

    #[test]
    fn test_malformed_hex() {
        // Too short, too long, non-hex characters
        let too_long = format!("{USDT_HEX}00");
        for input in [
            "41abcd",
            too_long.as_str(),
            "41zz14f803b6fd780986a42c78ec9c7f77e6ded13c",
        ] {
            assert!(matches!(
                Address::from_hex(input),
                Err(AddressError::Malformed(_))
            ));
        }
    }

    #[test]
    fn test_malformed_base58() {
        // '0' is not in the Base58 alphabet
        assert!(matches!(
            Address::from_base58("T0000"),
            Err(AddressError::Malformed(_))
        ));
        // Valid Base58 but not 25 bytes once decoded
        assert!(matches!(
            Address::from_base58("TR7N"),
            Err(AddressError::Malformed(_))
        ));
    }

    #[test]
    fn test_checksum_byte_corruption() {
        let address = Address::from_hex(USDT_HEX).unwrap();
        let mut payload = Vec::from(address.as_bytes().as_slice());
        payload.extend_from_slice(&base58_checksum(address.as_bytes()));

        // Flip one bit in each checksum byte in turn
        for i in ADDRESS_LEN..ADDRESS_LEN + 4 {
            let mut corrupted = payload.clone();
            corrupted[i] ^= 0x01;
            let text = bs58::encode(corrupted).into_string();
            assert!(matches!(
                Address::from_base58(&text),
                Err(AddressError::ChecksumMismatch(_))
            ));
        }
    }

    #[test]
    fn test_checksum_char_corruption() {
        let encoded = Address::from_hex(USDT_HEX).unwrap().to_base58();
        let last = encoded.chars().last().unwrap();
        let replacement = if last == 'x' { 'y' } else { 'x' };
        let mut corrupted = encoded[..encoded.len() - 1].to_string();
        corrupted.push(replacement);

        assert!(Address::from_base58(&corrupted).is_err());
    }

    #[test]
    fn test_byte_wise_ordering() {
        let low = Address::from_hex("410000000000000000000000000000000000000001").unwrap();
        let high = Address::from_hex("410000000000000000000000000000000000000002").unwrap();
        assert!(low < high);
        assert_ne!(low, high);
    }

    #[test]
    fn test_serde_hex_round_trip() {
        let address = Address::from_hex(USDT_HEX).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{USDT_HEX}\""));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
