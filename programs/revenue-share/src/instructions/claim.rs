use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{CLAIM_SEED, GLOBAL_SEED, TOKEN_AUTHORITY_SEED},
    errors::ErrorCode,
    events::RevenueClaimed,
    state::Global,
    utils::{load_claim_account, pay_from_holding, store_claim_account},
};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global.bump
    )]
    pub global: Account<'info, Global>,

    /// CHECK: Deserialized in handler - an empty account means the signer is no beneficiary
    #[account(
        mut,
        seeds = [CLAIM_SEED, signer.key().as_ref()],
        bump
    )]
    pub claim_account: UncheckedAccount<'info>,

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

/// Pays a static beneficiary everything accrued since its last claim
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let signer = ctx.accounts.signer.key();

    // NFT entries are only reachable through claim_with_nft
    require!(
        signer == ctx.accounts.global.marketing || signer == ctx.accounts.global.lp,
        ErrorCode::Unauthorized
    );

    settle_claim(
        &mut ctx.accounts.global,
        &ctx.accounts.claim_account,
        ErrorCode::Unauthorized,
        &ctx.accounts.token_account,
        &ctx.accounts.claim_token_account,
        &ctx.accounts.mint,
        &ctx.accounts.token_authority,
        &ctx.accounts.token_program,
        signer,
    )
}

/// Settles `claim_info` against the lifetime harvested total and pays the
/// difference out of the holding account
///
/// Callers derive `claim_info` from the identity being paid, which binds the
/// entry to its owner. `missing` is raised when no entry exists there.
#[allow(clippy::too_many_arguments)]
pub(crate) fn settle_claim<'info>(
    global: &mut Account<'info, Global>,
    claim_info: &AccountInfo<'info>,
    missing: ErrorCode,
    holding: &InterfaceAccount<'info, TokenAccount>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_authority: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer: Pubkey,
) -> Result<()> {
    let mut claim_account = load_claim_account(claim_info, missing)?;

    let lifetime_total = global.lifetime_total(holding.amount)?;
    let settlement = claim_account.settle(lifetime_total, global.share_denominator)?;

    global.record_release(settlement.owed)?;
    store_claim_account(claim_info, &claim_account)?;

    pay_from_holding(
        holding,
        destination,
        mint,
        token_authority,
        token_program,
        global.token_authority_bump,
        settlement.owed,
    )?;

    #[cfg(feature = "verbose")]
    msg!(
        "Claimed {} for {} (entitled {} of {})",
        settlement.owed,
        claim_account.owner,
        settlement.entitled,
        lifetime_total
    );

    emit!(RevenueClaimed {
        claim_account: claim_info.key(),
        owner: claim_account.owner,
        signer,
        destination: destination.key(),
        amount: settlement.owed,
        total_claimed: claim_account.total_claimed,
        lifetime_total,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
