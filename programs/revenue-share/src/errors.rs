use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Global config already initialized")]
    AlreadyInitialized,

    #[msg("NFT already registered")]
    AlreadyRegistered,

    #[msg("NFT is not a verified member of the collection")]
    NotCollectionMember,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Nothing to claim")]
    NonClaimable,

    #[msg("Marketing and LP beneficiaries must differ")]
    DuplicateBeneficiary,

    #[msg("Beneficiary address cannot be zero")]
    ZeroAddress,

    #[msg("Share pool exhausted")]
    SharePoolExhausted,

    #[msg("Invalid holding account")]
    InvalidHoldingAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
