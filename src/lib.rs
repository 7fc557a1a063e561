//! Typed decoding of Tron transaction contracts
//!
//! A Tron transaction carries one "contract": a discriminated payload
//! describing a single on-chain action. Node APIs deliver it as a type-tag
//! string plus a loosely-typed JSON object. This crate classifies that pair
//! into a closed set of strongly-typed variants, validating addresses
//! (hex and Base58Check with checksum) and decoding amounts at arbitrary
//! precision, and answers the one question a wallet asks before signing or
//! display: does this transaction belong to a given address?
//!
//! Type-tags unknown at build time never fail: they decode to
//! [`Contract::Unknown`] with the raw payload preserved, so newer chain
//! versions degrade gracefully instead of breaking the decode pipeline.
//!
//! ```
//! use serde_json::json;
//! use tron_contracts::{decode_contract, Address, Contract};
//!
//! let payload = json!({
//!     "owner_address": "41a614f803b6fd780986a42c78ec9c7f77e6ded13c",
//!     "to_address": "410000000000000000000000000000000000000000",
//!     "amount": 1_000_000,
//! });
//! let contract = decode_contract("TransferContract", payload.as_object().unwrap()).unwrap();
//!
//! let me = Address::from_base58("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t").unwrap();
//! assert!(matches!(contract, Contract::Transfer(_)));
//! assert!(contract.own_transaction(&me));
//! ```

pub mod domain;

pub use domain::address::{Address, AddressError, ADDRESS_LEN, ADDRESS_PREFIX};
pub use domain::contract::{
    decode_contract, is_known_type_tag, Contract, DecodeError, FrozenSupply, UnknownContract,
    Vote, KNOWN_TYPE_TAGS,
};
