//! The known contract variants and their field schemas
//!
//! Each struct mirrors one wire contract kind: a `TYPE_TAG` matching the
//! wire discriminator and a `decode` that validates every required field
//! through the typed accessors in [`crate::domain::fields`]. Amount-like
//! fields are arbitrary precision; bounded protocol fields are `i64`.

use num_bigint::BigInt;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::address::Address;
use crate::domain::fields::{DecodeError, Fields};

/// One witness vote inside a `VoteWitnessContract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub vote_address: Address,
    pub vote_count: i64,
}

impl Vote {
    fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(VoteWitnessContract::TYPE_TAG, map);
        Ok(Self {
            vote_address: f.address("vote_address")?,
            vote_count: f.int("vote_count")?,
        })
    }
}

/// Supply frozen at issuance time inside an `AssetIssueContract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrozenSupply {
    pub frozen_amount: BigInt,
    pub frozen_days: i64,
}

impl FrozenSupply {
    fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(AssetIssueContract::TYPE_TAG, map);
        Ok(Self {
            frozen_amount: f.amount("frozen_amount")?,
            frozen_days: f.int("frozen_days")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountCreateContract {
    pub owner_address: Address,
    pub account_address: Address,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl AccountCreateContract {
    pub const TYPE_TAG: &'static str = "AccountCreateContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            account_address: f.address("account_address")?,
            account_type: f.string("type")?,
        })
    }
}

/// Plain TRX transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferContract {
    pub amount: BigInt,
    pub owner_address: Address,
    pub to_address: Address,
}

impl TransferContract {
    pub const TYPE_TAG: &'static str = "TransferContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            amount: f.amount("amount")?,
            owner_address: f.address("owner_address")?,
            to_address: f.address("to_address")?,
        })
    }
}

/// TRC-10 asset transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferAssetContract {
    pub amount: BigInt,
    pub asset_name: String,
    pub owner_address: Address,
    pub to_address: Address,
}

impl TransferAssetContract {
    pub const TYPE_TAG: &'static str = "TransferAssetContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            amount: f.amount("amount")?,
            asset_name: f.string("asset_name")?,
            owner_address: f.address("owner_address")?,
            to_address: f.address("to_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteWitnessContract {
    pub owner_address: Address,
    pub votes: Vec<Vote>,
}

impl VoteWitnessContract {
    pub const TYPE_TAG: &'static str = "VoteWitnessContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        let votes = f
            .list("votes")?
            .iter()
            .map(|value| Vote::decode(f.element("votes", value)?))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            owner_address: f.address("owner_address")?,
            votes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WitnessCreateContract {
    pub owner_address: Address,
    pub url: String,
}

impl WitnessCreateContract {
    pub const TYPE_TAG: &'static str = "WitnessCreateContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            url: f.string("url")?,
        })
    }
}

/// TRC-10 asset issuance
///
/// `total_supply` is precision-scaled and may exceed the signed 64-bit
/// range, so it decodes as an arbitrary-precision amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetIssueContract {
    pub owner_address: Address,
    pub name: String,
    pub abbr: String,
    pub precision: i64,
    pub total_supply: BigInt,
    pub frozen_supply: Option<FrozenSupply>,
    pub trx_num: i64,
    pub num: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub order: Option<i64>,
    pub vote_score: Option<i64>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub free_asset_net_limit: Option<i64>,
    pub public_free_asset_net_limit: Option<i64>,
    pub public_free_asset_net_usage: Option<i64>,
    pub public_latest_free_net_time: Option<i64>,
}

impl AssetIssueContract {
    pub const TYPE_TAG: &'static str = "AssetIssueContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            name: f.string("name")?,
            abbr: f.string("abbr")?,
            precision: f.int("precision")?,
            total_supply: f.amount("total_supply")?,
            frozen_supply: f
                .opt_nested("frozen_supply")?
                .map(FrozenSupply::decode)
                .transpose()?,
            trx_num: f.int("trx_num")?,
            num: f.int("num")?,
            start_time: f.int("start_time")?,
            end_time: f.int("end_time")?,
            order: f.opt_int("order")?,
            vote_score: f.opt_int("vote_score")?,
            description: f.opt_string("description")?,
            url: f.opt_string("url")?,
            free_asset_net_limit: f.opt_int("free_asset_net_limit")?,
            public_free_asset_net_limit: f.opt_int("public_free_asset_net_limit")?,
            public_free_asset_net_usage: f.opt_int("public_free_asset_net_usage")?,
            public_latest_free_net_time: f.opt_int("public_latest_free_net_time")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WitnessUpdateContract {
    pub owner_address: Address,
    pub update_url: String,
}

impl WitnessUpdateContract {
    pub const TYPE_TAG: &'static str = "WitnessUpdateContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            update_url: f.string("update_url")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipateAssetIssueContract {
    pub owner_address: Address,
    pub to_address: Address,
    pub asset_name: String,
    pub amount: BigInt,
}

impl ParticipateAssetIssueContract {
    pub const TYPE_TAG: &'static str = "ParticipateAssetIssueContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            to_address: f.address("to_address")?,
            asset_name: f.string("asset_name")?,
            amount: f.amount("amount")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountUpdateContract {
    pub owner_address: Address,
    pub account_name: String,
}

impl AccountUpdateContract {
    pub const TYPE_TAG: &'static str = "AccountUpdateContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            account_name: f.string("account_name")?,
        })
    }
}

/// Stake-1.0 balance freeze
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezeBalanceContract {
    pub owner_address: Address,
    pub frozen_balance: BigInt,
    pub frozen_duration: i64,
    pub resource: String,
    pub receiver_address: Address,
}

impl FreezeBalanceContract {
    pub const TYPE_TAG: &'static str = "FreezeBalanceContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            frozen_balance: f.amount("frozen_balance")?,
            frozen_duration: f.int("frozen_duration")?,
            resource: f.string("resource")?,
            receiver_address: f.address("receiver_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfreezeBalanceContract {
    pub owner_address: Address,
    pub resource: String,
    pub receiver_address: Address,
}

impl UnfreezeBalanceContract {
    pub const TYPE_TAG: &'static str = "UnfreezeBalanceContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            resource: f.string("resource")?,
            receiver_address: f.address("receiver_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawBalanceContract {
    pub owner_address: Address,
}

impl WithdrawBalanceContract {
    pub const TYPE_TAG: &'static str = "WithdrawBalanceContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfreezeAssetContract {
    pub owner_address: Address,
}

impl UnfreezeAssetContract {
    pub const TYPE_TAG: &'static str = "UnfreezeAssetContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateAssetContract {
    pub owner_address: Address,
    pub description: String,
    pub url: String,
    pub new_limit: i64,
    pub new_public_limit: i64,
}

impl UpdateAssetContract {
    pub const TYPE_TAG: &'static str = "UpdateAssetContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            description: f.string("description")?,
            url: f.string("url")?,
            new_limit: f.int("new_limit")?,
            new_public_limit: f.int("new_public_limit")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalCreateContract {
    pub owner_address: Address,
}

impl ProposalCreateContract {
    pub const TYPE_TAG: &'static str = "ProposalCreateContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalApproveContract {
    pub owner_address: Address,
    pub proposal_id: i64,
    pub is_add_approval: bool,
}

impl ProposalApproveContract {
    pub const TYPE_TAG: &'static str = "ProposalApproveContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            proposal_id: f.int("proposal_id")?,
            is_add_approval: f.boolean("is_add_approval")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalDeleteContract {
    pub owner_address: Address,
    pub proposal_id: i64,
}

impl ProposalDeleteContract {
    pub const TYPE_TAG: &'static str = "ProposalDeleteContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            proposal_id: f.int("proposal_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetAccountIdContract {
    pub owner_address: Address,
    pub account_id: String,
}

impl SetAccountIdContract {
    pub const TYPE_TAG: &'static str = "SetAccountIdContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            account_id: f.string("account_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSmartContract {
    pub owner_address: Address,
}

impl CreateSmartContract {
    pub const TYPE_TAG: &'static str = "CreateSmartContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

/// Smart contract call, TRC-20 transfers included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerSmartContract {
    pub data: String,
    pub owner_address: Address,
    pub contract_address: Address,
    pub call_value: Option<BigInt>,
    pub call_token_value: Option<BigInt>,
    pub token_id: Option<i64>,
}

impl TriggerSmartContract {
    pub const TYPE_TAG: &'static str = "TriggerSmartContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            data: f.string("data")?,
            owner_address: f.address("owner_address")?,
            contract_address: f.address("contract_address")?,
            call_value: f.opt_amount("call_value")?,
            call_token_value: f.opt_amount("call_token_value")?,
            token_id: f.opt_int("token_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateSettingContract {
    pub owner_address: Address,
    pub contract_address: Address,
    pub consume_user_resource_percent: i64,
}

impl UpdateSettingContract {
    pub const TYPE_TAG: &'static str = "UpdateSettingContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            contract_address: f.address("contract_address")?,
            consume_user_resource_percent: f.int("consume_user_resource_percent")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeCreateContract {
    pub owner_address: Address,
}

impl ExchangeCreateContract {
    pub const TYPE_TAG: &'static str = "ExchangeCreateContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeInjectContract {
    pub owner_address: Address,
}

impl ExchangeInjectContract {
    pub const TYPE_TAG: &'static str = "ExchangeInjectContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeWithdrawContract {
    pub owner_address: Address,
}

impl ExchangeWithdrawContract {
    pub const TYPE_TAG: &'static str = "ExchangeWithdrawContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeTransactionContract {
    pub owner_address: Address,
}

impl ExchangeTransactionContract {
    pub const TYPE_TAG: &'static str = "ExchangeTransactionContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearAbiContract {
    pub owner_address: Address,
    pub contract_address: Address,
}

impl ClearAbiContract {
    pub const TYPE_TAG: &'static str = "ClearABIContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            contract_address: f.address("contract_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateBrokerageContract {
    pub owner_address: Address,
    pub brokerage: i64,
}

impl UpdateBrokerageContract {
    pub const TYPE_TAG: &'static str = "UpdateBrokerageContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            brokerage: f.int("brokerage")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEnergyLimitContract {
    pub owner_address: Address,
    pub contract_address: Address,
    pub origin_energy_limit: i64,
}

impl UpdateEnergyLimitContract {
    pub const TYPE_TAG: &'static str = "UpdateEnergyLimitContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            contract_address: f.address("contract_address")?,
            origin_energy_limit: f.int("origin_energy_limit")?,
        })
    }
}

/// Stake-2.0 balance freeze
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezeBalanceV2Contract {
    pub resource: String,
    pub frozen_balance: BigInt,
    pub owner_address: Address,
}

impl FreezeBalanceV2Contract {
    pub const TYPE_TAG: &'static str = "FreezeBalanceV2Contract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            resource: f.string("resource")?,
            frozen_balance: f.amount("frozen_balance")?,
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfreezeBalanceV2Contract {
    pub owner_address: Address,
    pub unfreeze_balance: BigInt,
    pub resource: String,
}

impl UnfreezeBalanceV2Contract {
    pub const TYPE_TAG: &'static str = "UnfreezeBalanceV2Contract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            unfreeze_balance: f.amount("unfreeze_balance")?,
            resource: f.string("resource")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawExpireUnfreezeContract {
    pub owner_address: Address,
}

impl WithdrawExpireUnfreezeContract {
    pub const TYPE_TAG: &'static str = "WithdrawExpireUnfreezeContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegateResourceContract {
    pub owner_address: Address,
    pub resource: String,
    pub balance: BigInt,
    pub receiver_address: Address,
    pub lock: bool,
}

impl DelegateResourceContract {
    pub const TYPE_TAG: &'static str = "DelegateResourceContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            resource: f.string("resource")?,
            balance: f.amount("balance")?,
            receiver_address: f.address("receiver_address")?,
            lock: f.boolean("lock")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnDelegateResourceContract {
    pub owner_address: Address,
    pub resource: String,
    pub balance: BigInt,
    pub receiver_address: Address,
}

impl UnDelegateResourceContract {
    pub const TYPE_TAG: &'static str = "UnDelegateResourceContract";

    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::TYPE_TAG, map);
        Ok(Self {
            owner_address: f.address("owner_address")?,
            resource: f.string("resource")?,
            balance: f.amount("balance")?,
            receiver_address: f.address("receiver_address")?,
        })
    }
}

/// Fallback for contract kinds unknown at build time
///
/// Keeps the wire type-tag and the raw mapping verbatim so nothing is lost;
/// never claims ownership because its owner field location is not known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownContract {
    pub type_tag: String,
    pub payload: Map<String, Value>,
}

impl UnknownContract {
    /// Always succeeds; there is nothing to validate
    pub fn decode(type_tag: &str, map: &Map<String, Value>) -> Self {
        Self {
            type_tag: type_tag.to_string(),
            payload: map.clone(),
        }
    }
}
