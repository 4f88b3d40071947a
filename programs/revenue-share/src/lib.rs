use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod verification;
mod utils;

use instructions::*;

declare_id!("37ZbjmAMyk7HsaevQQaR97aN6LsbnMnqF4GrdHxWM1yN");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Revenue Share",
    project_url: "https://github.com/revenue-share/revenue-share",
    contacts: "link:https://github.com/revenue-share/revenue-share/security",
    policy: "https://github.com/revenue-share/revenue-share/blob/main/SECURITY.md",
    source_code: "https://github.com/revenue-share/revenue-share",
    source_release: "v0.1.0"
}

#[program]
pub mod revenue_share {
    use super::*;

    /// Creates the global config, the marketing and LP claim accounts and the
    /// holding account
    /// Can only be called once by the program's upgrade authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Registers a verified collection NFT for a fixed revenue share
    pub fn register(ctx: Context<Register>) -> Result<()> {
        instructions::register::handler(ctx)
    }

    /// Claims accrued revenue for a static beneficiary (signer's own wallet)
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Claims accrued revenue for a registered NFT
    /// Only the NFT's current holder may claim
    pub fn claim_with_nft(ctx: Context<ClaimWithNft>) -> Result<()> {
        instructions::claim_with_nft::handler(ctx)
    }
}
