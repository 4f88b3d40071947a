use anchor_lang::prelude::*;

#[event]
pub struct GlobalInitialized {
    pub authority: Pubkey,
    pub marketing: Pubkey,
    pub lp: Pubkey,
    pub collection: Pubkey,
    pub mint: Pubkey,
    pub holding_account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct NftRegistered {
    pub claim_account: Pubkey,
    pub nft_token: Pubkey,
    pub nft_mint: Pubkey,
    pub holder: Pubkey,
    pub shares: u64,
    pub registered_nft_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct RevenueClaimed {
    pub claim_account: Pubkey,
    pub owner: Pubkey,
    pub signer: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub lifetime_total: u64,
    pub timestamp: i64,
}
