//! Contract domain models
//!
//! This module defines the closed set of typed contract variants, the
//! ownership predicate over them, and the type-tag dispatcher that turns a
//! raw wire mapping into one of them without ever failing on a tag unknown
//! at build time.

mod registry;
mod variants;

pub use registry::{decode_contract, is_known_type_tag, KNOWN_TYPE_TAGS};
pub use variants::{
    AccountCreateContract, AccountUpdateContract, AssetIssueContract, ClearAbiContract,
    CreateSmartContract, DelegateResourceContract, ExchangeCreateContract,
    ExchangeInjectContract, ExchangeTransactionContract, ExchangeWithdrawContract,
    FreezeBalanceContract, FreezeBalanceV2Contract, FrozenSupply, ParticipateAssetIssueContract,
    ProposalApproveContract, ProposalCreateContract, ProposalDeleteContract, SetAccountIdContract,
    TransferAssetContract, TransferContract, TriggerSmartContract, UnDelegateResourceContract,
    UnfreezeAssetContract, UnfreezeBalanceContract, UnfreezeBalanceV2Contract, UnknownContract,
    UpdateAssetContract, UpdateBrokerageContract, UpdateEnergyLimitContract,
    UpdateSettingContract, Vote, VoteWitnessContract, WithdrawBalanceContract,
    WithdrawExpireUnfreezeContract, WitnessCreateContract, WitnessUpdateContract,
};

pub use crate::domain::fields::DecodeError;

use serde::Serialize;

use crate::domain::address::Address;

/// One decoded transaction contract
///
/// Every variant except `Unknown` was validated field by field against its
/// wire schema; `Unknown` is the forward-compatibility fallback carrying the
/// raw payload verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Contract {
    AccountCreate(AccountCreateContract),
    Transfer(TransferContract),
    TransferAsset(TransferAssetContract),
    VoteWitness(VoteWitnessContract),
    WitnessCreate(WitnessCreateContract),
    AssetIssue(AssetIssueContract),
    WitnessUpdate(WitnessUpdateContract),
    ParticipateAssetIssue(ParticipateAssetIssueContract),
    AccountUpdate(AccountUpdateContract),
    FreezeBalance(FreezeBalanceContract),
    UnfreezeBalance(UnfreezeBalanceContract),
    WithdrawBalance(WithdrawBalanceContract),
    UnfreezeAsset(UnfreezeAssetContract),
    UpdateAsset(UpdateAssetContract),
    ProposalCreate(ProposalCreateContract),
    ProposalApprove(ProposalApproveContract),
    ProposalDelete(ProposalDeleteContract),
    SetAccountId(SetAccountIdContract),
    CreateSmartContract(CreateSmartContract),
    TriggerSmartContract(TriggerSmartContract),
    UpdateSetting(UpdateSettingContract),
    ExchangeCreate(ExchangeCreateContract),
    ExchangeInject(ExchangeInjectContract),
    ExchangeWithdraw(ExchangeWithdrawContract),
    ExchangeTransaction(ExchangeTransactionContract),
    ClearAbi(ClearAbiContract),
    UpdateBrokerage(UpdateBrokerageContract),
    UpdateEnergyLimit(UpdateEnergyLimitContract),
    FreezeBalanceV2(FreezeBalanceV2Contract),
    UnfreezeBalanceV2(UnfreezeBalanceV2Contract),
    WithdrawExpireUnfreeze(WithdrawExpireUnfreezeContract),
    DelegateResource(DelegateResourceContract),
    UnDelegateResource(UnDelegateResourceContract),
    Unknown(UnknownContract),
}

impl Contract {
    /// The wire type-tag this contract was decoded from
    pub fn type_tag(&self) -> &str {
        match self {
            Self::AccountCreate(_) => AccountCreateContract::TYPE_TAG,
            Self::Transfer(_) => TransferContract::TYPE_TAG,
            Self::TransferAsset(_) => TransferAssetContract::TYPE_TAG,
            Self::VoteWitness(_) => VoteWitnessContract::TYPE_TAG,
            Self::WitnessCreate(_) => WitnessCreateContract::TYPE_TAG,
            Self::AssetIssue(_) => AssetIssueContract::TYPE_TAG,
            Self::WitnessUpdate(_) => WitnessUpdateContract::TYPE_TAG,
            Self::ParticipateAssetIssue(_) => ParticipateAssetIssueContract::TYPE_TAG,
            Self::AccountUpdate(_) => AccountUpdateContract::TYPE_TAG,
            Self::FreezeBalance(_) => FreezeBalanceContract::TYPE_TAG,
            Self::UnfreezeBalance(_) => UnfreezeBalanceContract::TYPE_TAG,
            Self::WithdrawBalance(_) => WithdrawBalanceContract::TYPE_TAG,
            Self::UnfreezeAsset(_) => UnfreezeAssetContract::TYPE_TAG,
            Self::UpdateAsset(_) => UpdateAssetContract::TYPE_TAG,
            Self::ProposalCreate(_) => ProposalCreateContract::TYPE_TAG,
            Self::ProposalApprove(_) => ProposalApproveContract::TYPE_TAG,
            Self::ProposalDelete(_) => ProposalDeleteContract::TYPE_TAG,
            Self::SetAccountId(_) => SetAccountIdContract::TYPE_TAG,
            Self::CreateSmartContract(_) => CreateSmartContract::TYPE_TAG,
            Self::TriggerSmartContract(_) => TriggerSmartContract::TYPE_TAG,
            Self::UpdateSetting(_) => UpdateSettingContract::TYPE_TAG,
            Self::ExchangeCreate(_) => ExchangeCreateContract::TYPE_TAG,
            Self::ExchangeInject(_) => ExchangeInjectContract::TYPE_TAG,
            Self::ExchangeWithdraw(_) => ExchangeWithdrawContract::TYPE_TAG,
            Self::ExchangeTransaction(_) => ExchangeTransactionContract::TYPE_TAG,
            Self::ClearAbi(_) => ClearAbiContract::TYPE_TAG,
            Self::UpdateBrokerage(_) => UpdateBrokerageContract::TYPE_TAG,
            Self::UpdateEnergyLimit(_) => UpdateEnergyLimitContract::TYPE_TAG,
            Self::FreezeBalanceV2(_) => FreezeBalanceV2Contract::TYPE_TAG,
            Self::UnfreezeBalanceV2(_) => UnfreezeBalanceV2Contract::TYPE_TAG,
            Self::WithdrawExpireUnfreeze(_) => WithdrawExpireUnfreezeContract::TYPE_TAG,
            Self::DelegateResource(_) => DelegateResourceContract::TYPE_TAG,
            Self::UnDelegateResource(_) => UnDelegateResourceContract::TYPE_TAG,
            Self::Unknown(contract) => &contract.type_tag,
        }
    }

    /// The address that initiated this contract, if its schema is known
    pub fn owner_address(&self) -> Option<&Address> {
        match self {
            Self::AccountCreate(c) => Some(&c.owner_address),
            Self::Transfer(c) => Some(&c.owner_address),
            Self::TransferAsset(c) => Some(&c.owner_address),
            Self::VoteWitness(c) => Some(&c.owner_address),
            Self::WitnessCreate(c) => Some(&c.owner_address),
            Self::AssetIssue(c) => Some(&c.owner_address),
            Self::WitnessUpdate(c) => Some(&c.owner_address),
            Self::ParticipateAssetIssue(c) => Some(&c.owner_address),
            Self::AccountUpdate(c) => Some(&c.owner_address),
            Self::FreezeBalance(c) => Some(&c.owner_address),
            Self::UnfreezeBalance(c) => Some(&c.owner_address),
            Self::WithdrawBalance(c) => Some(&c.owner_address),
            Self::UnfreezeAsset(c) => Some(&c.owner_address),
            Self::UpdateAsset(c) => Some(&c.owner_address),
            Self::ProposalCreate(c) => Some(&c.owner_address),
            Self::ProposalApprove(c) => Some(&c.owner_address),
            Self::ProposalDelete(c) => Some(&c.owner_address),
            Self::SetAccountId(c) => Some(&c.owner_address),
            Self::CreateSmartContract(c) => Some(&c.owner_address),
            Self::TriggerSmartContract(c) => Some(&c.owner_address),
            Self::UpdateSetting(c) => Some(&c.owner_address),
            Self::ExchangeCreate(c) => Some(&c.owner_address),
            Self::ExchangeInject(c) => Some(&c.owner_address),
            Self::ExchangeWithdraw(c) => Some(&c.owner_address),
            Self::ExchangeTransaction(c) => Some(&c.owner_address),
            Self::ClearAbi(c) => Some(&c.owner_address),
            Self::UpdateBrokerage(c) => Some(&c.owner_address),
            Self::UpdateEnergyLimit(c) => Some(&c.owner_address),
            Self::FreezeBalanceV2(c) => Some(&c.owner_address),
            Self::UnfreezeBalanceV2(c) => Some(&c.owner_address),
            Self::WithdrawExpireUnfreeze(c) => Some(&c.owner_address),
            Self::DelegateResource(c) => Some(&c.owner_address),
            Self::UnDelegateResource(c) => Some(&c.owner_address),
            Self::Unknown(_) => None,
        }
    }

    /// Whether `own_address` initiated this contract
    ///
    /// Compares the stored owner address byte-wise. Receiver and recipient
    /// addresses are deliberately not consulted: a transaction is owned by
    /// whoever signed for it, not by whoever it pays. Unknown contracts are
    /// never owned.
    pub fn own_transaction(&self, own_address: &Address) -> bool {
        self.owner_address()
            .is_some_and(|owner| owner == own_address)
    }
}
