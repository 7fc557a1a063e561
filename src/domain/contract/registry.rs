//! Type-tag dispatch from wire mappings to typed contracts
//!
//! The dispatch table is fixed at build time and covers every known variant.
//! An unrecognized tag is not an error: it decodes to `Contract::Unknown`
//! with the payload preserved, which is the crate's forward-compatibility
//! contract with newer chain versions.

use serde_json::{Map, Value};
use tracing::debug;

use super::variants::*;
use super::Contract;
use crate::domain::fields::DecodeError;

/// Every type-tag with a dedicated decoder, in wire order
pub const KNOWN_TYPE_TAGS: [&str; 33] = [
    AccountCreateContract::TYPE_TAG,
    TransferContract::TYPE_TAG,
    TransferAssetContract::TYPE_TAG,
    VoteWitnessContract::TYPE_TAG,
    WitnessCreateContract::TYPE_TAG,
    AssetIssueContract::TYPE_TAG,
    WitnessUpdateContract::TYPE_TAG,
    ParticipateAssetIssueContract::TYPE_TAG,
    AccountUpdateContract::TYPE_TAG,
    FreezeBalanceContract::TYPE_TAG,
    UnfreezeBalanceContract::TYPE_TAG,
    WithdrawBalanceContract::TYPE_TAG,
    UnfreezeAssetContract::TYPE_TAG,
    UpdateAssetContract::TYPE_TAG,
    ProposalCreateContract::TYPE_TAG,
    ProposalApproveContract::TYPE_TAG,
    ProposalDeleteContract::TYPE_TAG,
    SetAccountIdContract::TYPE_TAG,
    CreateSmartContract::TYPE_TAG,
    TriggerSmartContract::TYPE_TAG,
    UpdateSettingContract::TYPE_TAG,
    ExchangeCreateContract::TYPE_TAG,
    ExchangeInjectContract::TYPE_TAG,
    ExchangeWithdrawContract::TYPE_TAG,
    ExchangeTransactionContract::TYPE_TAG,
    ClearAbiContract::TYPE_TAG,
    UpdateBrokerageContract::TYPE_TAG,
    UpdateEnergyLimitContract::TYPE_TAG,
    FreezeBalanceV2Contract::TYPE_TAG,
    UnfreezeBalanceV2Contract::TYPE_TAG,
    WithdrawExpireUnfreezeContract::TYPE_TAG,
    DelegateResourceContract::TYPE_TAG,
    UnDelegateResourceContract::TYPE_TAG,
];

/// Whether a decoder exists for `type_tag`
pub fn is_known_type_tag(type_tag: &str) -> bool {
    KNOWN_TYPE_TAGS.contains(&type_tag)
}

/// Decode one contract payload by its wire type-tag
///
/// A recognized tag propagates its variant's decode result unchanged, so a
/// failure always names a specific field of a specific variant. An
/// unrecognized tag always succeeds as `Contract::Unknown`.
pub fn decode_contract(
    type_tag: &str,
    payload: &Map<String, Value>,
) -> Result<Contract, DecodeError> {
    match type_tag {
        AccountCreateContract::TYPE_TAG => {
            AccountCreateContract::decode(payload).map(Contract::AccountCreate)
        }
        TransferContract::TYPE_TAG => TransferContract::decode(payload).map(Contract::Transfer),
        TransferAssetContract::TYPE_TAG => {
            TransferAssetContract::decode(payload).map(Contract::TransferAsset)
        }
        VoteWitnessContract::TYPE_TAG => {
            VoteWitnessContract::decode(payload).map(Contract::VoteWitness)
        }
        WitnessCreateContract::TYPE_TAG => {
            WitnessCreateContract::decode(payload).map(Contract::WitnessCreate)
        }
        AssetIssueContract::TYPE_TAG => {
            AssetIssueContract::decode(payload).map(Contract::AssetIssue)
        }
        WitnessUpdateContract::TYPE_TAG => {
            WitnessUpdateContract::decode(payload).map(Contract::WitnessUpdate)
        }
        ParticipateAssetIssueContract::TYPE_TAG => {
            ParticipateAssetIssueContract::decode(payload).map(Contract::ParticipateAssetIssue)
        }
        AccountUpdateContract::TYPE_TAG => {
            AccountUpdateContract::decode(payload).map(Contract::AccountUpdate)
        }
        FreezeBalanceContract::TYPE_TAG => {
            FreezeBalanceContract::decode(payload).map(Contract::FreezeBalance)
        }
        UnfreezeBalanceContract::TYPE_TAG => {
            UnfreezeBalanceContract::decode(payload).map(Contract::UnfreezeBalance)
        }
        WithdrawBalanceContract::TYPE_TAG => {
            WithdrawBalanceContract::decode(payload).map(Contract::WithdrawBalance)
        }
        UnfreezeAssetContract::TYPE_TAG => {
            UnfreezeAssetContract::decode(payload).map(Contract::UnfreezeAsset)
        }
        UpdateAssetContract::TYPE_TAG => {
            UpdateAssetContract::decode(payload).map(Contract::UpdateAsset)
        }
        ProposalCreateContract::TYPE_TAG => {
            ProposalCreateContract::decode(payload).map(Contract::ProposalCreate)
        }
        ProposalApproveContract::TYPE_TAG => {
            ProposalApproveContract::decode(payload).map(Contract::ProposalApprove)
        }
        ProposalDeleteContract::TYPE_TAG => {
            ProposalDeleteContract::decode(payload).map(Contract::ProposalDelete)
        }
        SetAccountIdContract::TYPE_TAG => {
            SetAccountIdContract::decode(payload).map(Contract::SetAccountId)
        }
        CreateSmartContract::TYPE_TAG => {
            CreateSmartContract::decode(payload).map(Contract::CreateSmartContract)
        }
        TriggerSmartContract::TYPE_TAG => {
            TriggerSmartContract::decode(payload).map(Contract::TriggerSmartContract)
        }
        UpdateSettingContract::TYPE_TAG => {
            UpdateSettingContract::decode(payload).map(Contract::UpdateSetting)
        }
        ExchangeCreateContract::TYPE_TAG => {
            ExchangeCreateContract::decode(payload).map(Contract::ExchangeCreate)
        }
        ExchangeInjectContract::TYPE_TAG => {
            ExchangeInjectContract::decode(payload).map(Contract::ExchangeInject)
        }
        ExchangeWithdrawContract::TYPE_TAG => {
            ExchangeWithdrawContract::decode(payload).map(Contract::ExchangeWithdraw)
        }
        ExchangeTransactionContract::TYPE_TAG => {
            ExchangeTransactionContract::decode(payload).map(Contract::ExchangeTransaction)
        }
        ClearAbiContract::TYPE_TAG => ClearAbiContract::decode(payload).map(Contract::ClearAbi),
        UpdateBrokerageContract::TYPE_TAG => {
            UpdateBrokerageContract::decode(payload).map(Contract::UpdateBrokerage)
        }
        UpdateEnergyLimitContract::TYPE_TAG => {
            UpdateEnergyLimitContract::decode(payload).map(Contract::UpdateEnergyLimit)
        }
        FreezeBalanceV2Contract::TYPE_TAG => {
            FreezeBalanceV2Contract::decode(payload).map(Contract::FreezeBalanceV2)
        }
        UnfreezeBalanceV2Contract::TYPE_TAG => {
            UnfreezeBalanceV2Contract::decode(payload).map(Contract::UnfreezeBalanceV2)
        }
        WithdrawExpireUnfreezeContract::TYPE_TAG => {
            WithdrawExpireUnfreezeContract::decode(payload).map(Contract::WithdrawExpireUnfreeze)
        }
        DelegateResourceContract::TYPE_TAG => {
            DelegateResourceContract::decode(payload).map(Contract::DelegateResource)
        }
        UnDelegateResourceContract::TYPE_TAG => {
            UnDelegateResourceContract::decode(payload).map(Contract::UnDelegateResource)
        }
        _ => {
            debug!(type_tag, "unrecognized contract type, keeping raw payload");
            Ok(Contract::Unknown(UnknownContract::decode(
                type_tag, payload,
            )))
        }
    }
}
