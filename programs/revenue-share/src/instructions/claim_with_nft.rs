use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{MasterEditionAccount, MetadataAccount},
    token::{Mint as NftMintAccount, TokenAccount as NftTokenAccount},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{CLAIM_SEED, GLOBAL_SEED, TOKEN_AUTHORITY_SEED},
    errors::ErrorCode,
    instructions::claim::settle_claim,
    state::Global,
    verification::{verify_nft_ownership, NftEdition, NftHolding, NftMetadata, NftMint},
};

#[derive(Accounts)]
pub struct ClaimWithNft<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global.bump
    )]
    pub global: Account<'info, Global>,

    /// CHECK: Deserialized in handler - an empty account means the NFT never registered
    #[account(
        mut,
        seeds = [CLAIM_SEED, nft_token.key().as_ref()],
        bump
    )]
    pub claim_account: UncheckedAccount<'info>,

    pub nft_mint: Account<'info, NftMintAccount>,

    pub nft_token: Account<'info, NftTokenAccount>,

    pub nft_metadata: Box<Account<'info, MetadataAccount>>,

    pub nft_edition: Box<Account<'info, MasterEditionAccount>>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = signer,
        associated_token::token_program = token_program,
    )]
    pub claim_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = token_account.key() == global.holding_account @ ErrorCode::InvalidHoldingAccount
    )]
    pub token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Data-less PDA that signs for the holding account
    #[account(
        seeds = [TOKEN_AUTHORITY_SEED],
        bump = global.token_authority_bump
    )]
    pub token_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        constraint = mint.key() == global.mint @ ErrorCode::InvalidHoldingAccount
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Pays the current holder of a registered NFT everything accrued since the
/// NFT's last claim
/// Ownership is re-verified because the NFT may have changed hands
pub fn handler(ctx: Context<ClaimWithNft>) -> Result<()> {
    let proof = verify_nft_ownership(
        &ctx.accounts.signer.key(),
        &ctx.accounts.global.collection,
        &NftHolding::from_account(&ctx.accounts.nft_token),
        &NftMint::from_account(&ctx.accounts.nft_mint),
        &NftMetadata::from_account(&ctx.accounts.nft_metadata),
        &NftEdition::from_account(&ctx.accounts.nft_edition),
    )?;

    settle_claim(
        &mut ctx.accounts.global,
        &ctx.accounts.claim_account,
        ErrorCode::NotCollectionMember,
        &ctx.accounts.token_account,
        &ctx.accounts.claim_token_account,
        &ctx.accounts.mint,
        &ctx.accounts.token_authority,
        &ctx.accounts.token_program,
        proof.holder,
    )
}
