use anchor_lang::prelude::*;

use crate::{
    constants::{
        CLAIM_ACCOUNT_SIZE, GLOBAL_SIZE, LP_SHARES, MARKETING_SHARES, NFT_SHARES,
        SHARE_DENOMINATOR,
    },
    errors::ErrorCode,
    utils::calculate_entitlement,
};

/// Global revenue-share configuration (single instance)
#[account]
#[derive(InitSpace)]
pub struct Global {
    /// Upgrade authority that performed initialization
    pub authority: Pubkey,
    /// Marketing wallet (static beneficiary)
    pub marketing: Pubkey,
    /// Liquidity wallet (static beneficiary)
    pub lp: Pubkey,
    /// NFT collection whose verified members may register
    pub collection: Pubkey,
    /// Fee-bearing token the revenue is paid in
    pub mint: Pubkey,
    /// Token account pooling harvested, not-yet-claimed revenue
    pub holding_account: Pubkey,
    /// Scale for all share weights
    pub share_denominator: u64,
    /// Sum of every share weight granted so far
    pub allocated_shares: u64,
    /// Number of NFTs that registered a claim
    pub registered_nft_count: u64,
    /// Gross amount paid out of the holding account over its lifetime
    pub total_released: u64,
    /// Bump seed for the global PDA
    pub bump: u8,
    /// Bump seed for the holding account authority PDA
    pub token_authority_bump: u8,
}

impl Global {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        marketing: Pubkey,
        lp: Pubkey,
        collection: Pubkey,
        mint: Pubkey,
        holding_account: Pubkey,
        bump: u8,
        token_authority_bump: u8,
    ) {
        self.authority = authority;
        self.marketing = marketing;
        self.lp = lp;
        self.collection = collection;
        self.mint = mint;
        self.holding_account = holding_account;
        self.share_denominator = SHARE_DENOMINATOR;
        self.allocated_shares = MARKETING_SHARES + LP_SHARES;
        self.registered_nft_count = 0;
        self.total_released = 0;
        self.bump = bump;
        self.token_authority_bump = token_authority_bump;
    }

    /// Every unit ever swept into the holding account: what is still there
    /// plus what has already been paid out of it.
    pub fn lifetime_total(&self, holding_balance: u64) -> Result<u64> {
        Ok(self
            .total_released
            .checked_add(holding_balance)
            .ok_or(ErrorCode::MathOverflow)?)
    }

    pub fn record_release(&mut self, amount: u64) -> Result<()> {
        self.total_released = self
            .total_released
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Reserves one NFT share unit from the unallocated remainder.
    /// Returns the number of shares granted.
    pub fn allocate_nft_shares(&mut self) -> Result<u64> {
        let allocated = self
            .allocated_shares
            .checked_add(NFT_SHARES)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(
            allocated <= self.share_denominator,
            ErrorCode::SharePoolExhausted
        );

        self.allocated_shares = allocated;
        self.registered_nft_count = self
            .registered_nft_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(NFT_SHARES)
    }
}

/// Per-beneficiary claim ledger entry
#[account]
#[derive(InitSpace, Debug)]
pub struct ClaimAccount {
    /// Wallet (static beneficiary) or NFT token account entitled to this claim
    pub owner: Pubkey,
    /// Weight out of `Global::share_denominator`, fixed at creation
    pub shares: u64,
    /// Cumulative gross amount settled to this beneficiary
    pub total_claimed: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Result of settling a claim against the lifetime harvested total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Absolute entitlement at this lifetime total
    pub entitled: u64,
    /// Amount to pay out now
    pub owed: u64,
}

impl ClaimAccount {
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn initialize(&mut self, owner: Pubkey, shares: u64, bump: u8) {
        self.owner = owner;
        self.shares = shares;
        self.total_claimed = 0;
        self.bump = bump;
    }

    pub fn entitlement(&self, lifetime_total: u64, share_denominator: u64) -> Result<u64> {
        Ok(calculate_entitlement(lifetime_total, self.shares, share_denominator)
            .ok_or(ErrorCode::MathOverflow)?)
    }

    /// Amount claimable right now, zero when nothing new has accrued
    pub fn owed(&self, lifetime_total: u64, share_denominator: u64) -> Result<u64> {
        Ok(self
            .entitlement(lifetime_total, share_denominator)?
            .saturating_sub(self.total_claimed))
    }

    /// Settles against the absolute entitlement and moves the watermark to it.
    /// Floor remainders stay unclaimed until the lifetime total grows.
    pub fn settle(&mut self, lifetime_total: u64, share_denominator: u64) -> Result<Settlement> {
        let entitled = self.entitlement(lifetime_total, share_denominator)?;
        let owed = entitled.saturating_sub(self.total_claimed);
        require!(owed > 0, ErrorCode::NonClaimable);

        self.total_claimed = entitled;

        Ok(Settlement { entitled, owed })
    }
}

const _: () = assert!(8 + Global::INIT_SPACE == GLOBAL_SIZE);
const _: () = assert!(8 + ClaimAccount::INIT_SPACE == CLAIM_ACCOUNT_SIZE);
