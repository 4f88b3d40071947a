use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{MasterEditionAccount, MetadataAccount},
    token::{Mint, TokenAccount},
};

use crate::{
    constants::{CLAIM_ACCOUNT_SIZE, CLAIM_SEED, GLOBAL_SEED},
    errors::ErrorCode,
    events::NftRegistered,
    state::{ClaimAccount, Global},
    verification::{verify_nft_ownership, NftEdition, NftHolding, NftMetadata, NftMint},
};

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global.bump
    )]
    pub global: Account<'info, Global>,

    #[account(
        init_if_needed,
        payer = signer,
        space = CLAIM_ACCOUNT_SIZE,
        seeds = [CLAIM_SEED, nft_token.key().as_ref()],
        bump
    )]
    pub claim_account: Account<'info, ClaimAccount>,

    pub nft_mint: Account<'info, Mint>,

    pub nft_token: Account<'info, TokenAccount>,

    pub nft_metadata: Box<Account<'info, MetadataAccount>>,

    pub nft_edition: Box<Account<'info, MasterEditionAccount>>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Grants a fixed share to a verified collection NFT
/// One claim account per NFT token account, ever
pub fn handler(ctx: Context<Register>) -> Result<()> {
    require!(
        !ctx.accounts.claim_account.is_initialized(),
        ErrorCode::AlreadyRegistered
    );

    let proof = verify_nft_ownership(
        &ctx.accounts.signer.key(),
        &ctx.accounts.global.collection,
        &NftHolding::from_account(&ctx.accounts.nft_token),
        &NftMint::from_account(&ctx.accounts.nft_mint),
        &NftMetadata::from_account(&ctx.accounts.nft_metadata),
        &NftEdition::from_account(&ctx.accounts.nft_edition),
    )?;

    let global = &mut ctx.accounts.global;
    let shares = global.allocate_nft_shares()?;
    let registered_nft_count = global.registered_nft_count;

    ctx.accounts
        .claim_account
        .initialize(proof.token, shares, ctx.bumps.claim_account);

    #[cfg(feature = "verbose")]
    msg!(
        "Registered NFT {} held in {} ({} registered)",
        proof.mint,
        proof.token,
        registered_nft_count
    );

    emit!(NftRegistered {
        claim_account: ctx.accounts.claim_account.key(),
        nft_token: proof.token,
        nft_mint: proof.mint,
        holder: proof.holder,
        shares,
        registered_nft_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
