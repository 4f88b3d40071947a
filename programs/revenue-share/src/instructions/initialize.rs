use anchor_lang::{prelude::*, solana_program::bpf_loader_upgradeable};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::Mint as CollectionMint,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{
        CLAIM_ACCOUNT_SIZE, CLAIM_SEED, GLOBAL_SEED, GLOBAL_SIZE, LP_SHARES, MARKETING_SHARES,
        TOKEN_AUTHORITY_SEED,
    },
    errors::ErrorCode,
    events::GlobalInitialized,
    state::{ClaimAccount, Global},
    utils::verify_upgrade_authority,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    // Init fields are created in field order, so the beneficiary checks sit
    // here, ahead of the two claim accounts derived from them
    #[account(
        init_if_needed,
        payer = authority,
        space = GLOBAL_SIZE,
        seeds = [GLOBAL_SEED],
        bump,
        constraint = marketing.key() != Pubkey::default() @ ErrorCode::ZeroAddress,
        constraint = lp.key() != Pubkey::default() @ ErrorCode::ZeroAddress,
        constraint = marketing.key() != lp.key() @ ErrorCode::DuplicateBeneficiary
    )]
    pub global: Account<'info, Global>,

    #[account(
        init_if_needed,
        payer = authority,
        space = CLAIM_ACCOUNT_SIZE,
        seeds = [CLAIM_SEED, marketing.key().as_ref()],
        bump
    )]
    pub marketing_claim: Account<'info, ClaimAccount>,

    #[account(
        init_if_needed,
        payer = authority,
        space = CLAIM_ACCOUNT_SIZE,
        seeds = [CLAIM_SEED, lp.key().as_ref()],
        bump
    )]
    pub lp_claim: Account<'info, ClaimAccount>,

    /// Holding account: ATA of the token-authority PDA
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = token_authority,
        associated_token::token_program = token_program,
    )]
    pub token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Data-less PDA that signs for the holding account
    #[account(seeds = [TOKEN_AUTHORITY_SEED], bump)]
    pub token_authority: UncheckedAccount<'info>,

    /// CHECK: Beneficiary wallet, only its key is recorded
    pub marketing: UncheckedAccount<'info>,

    /// CHECK: Beneficiary wallet, only its key is recorded
    pub lp: UncheckedAccount<'info>,

    #[account(mint::decimals = 0)]
    pub collection: Account<'info, CollectionMint>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: The program's executable data account - validated in handler
    #[account(
        constraint = program_data.owner == &bpf_loader_upgradeable::id() @ ErrorCode::Unauthorized
    )]
    pub program_data: AccountInfo<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Creates the global config and the two static claim accounts
/// Can only be called once by the program's upgrade authority
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    require!(!ctx.accounts.global.is_initialized(), ErrorCode::AlreadyInitialized);
    require!(
        !ctx.accounts.marketing_claim.is_initialized() && !ctx.accounts.lp_claim.is_initialized(),
        ErrorCode::AlreadyInitialized
    );

    let authority = ctx.accounts.authority.key();
    verify_upgrade_authority(&ctx.accounts.program_data, &authority)?;

    let marketing = ctx.accounts.marketing.key();
    let lp = ctx.accounts.lp.key();

    let collection = ctx.accounts.collection.key();
    let mint = ctx.accounts.mint.key();
    let holding_account = ctx.accounts.token_account.key();

    ctx.accounts.global.initialize(
        authority,
        marketing,
        lp,
        collection,
        mint,
        holding_account,
        ctx.bumps.global,
        ctx.bumps.token_authority,
    );
    ctx.accounts
        .marketing_claim
        .initialize(marketing, MARKETING_SHARES, ctx.bumps.marketing_claim);
    ctx.accounts
        .lp_claim
        .initialize(lp, LP_SHARES, ctx.bumps.lp_claim);

    emit!(GlobalInitialized {
        authority,
        marketing,
        lp,
        collection,
        mint,
        holding_account,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
