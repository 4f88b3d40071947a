use anchor_lang::{prelude::*, solana_program::bpf_loader_upgradeable};
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{constants::TOKEN_AUTHORITY_SEED, errors::ErrorCode, state::ClaimAccount, ID};

/// Beneficiary's absolute entitlement at a given lifetime total, rounded down
/// Returns None on overflow or a zero denominator
pub fn calculate_entitlement(lifetime_total: u64, shares: u64, share_denominator: u64) -> Option<u64> {
    (lifetime_total as u128)
        .checked_mul(shares as u128)?
        .checked_div(share_denominator as u128)?
        .try_into()
        .ok()
}

/// Verifies `authority` is the upgrade authority recorded in the program's
/// BPF upgradeable loader program-data account
pub fn verify_upgrade_authority(program_data: &AccountInfo, authority: &Pubkey) -> Result<()> {
    let (expected_program_data, _) =
        Pubkey::find_program_address(&[ID.as_ref()], &bpf_loader_upgradeable::id());
    require_keys_eq!(program_data.key(), expected_program_data, ErrorCode::Unauthorized);

    let data = program_data.try_borrow_data()?;

    // UpgradeableLoaderState::ProgramData layout:
    // - 4 bytes: discriminant
    // - 8 bytes: slot
    // - 1 byte: Option discriminant for upgrade_authority
    // - 32 bytes: upgrade_authority pubkey (if Some)
    require!(data.len() >= 45, ErrorCode::Unauthorized);
    require!(data[12] == 1, ErrorCode::Unauthorized); // Immutable programs cannot initialize

    let upgrade_authority =
        Pubkey::try_from(&data[13..45]).map_err(|_| ErrorCode::Unauthorized)?;
    require_keys_eq!(upgrade_authority, *authority, ErrorCode::Unauthorized);

    Ok(())
}

/// Reads a claim ledger entry, failing with `missing` when no entry exists
/// at the derived address
pub fn load_claim_account(info: &AccountInfo, missing: ErrorCode) -> Result<ClaimAccount> {
    if info.data_is_empty() || info.owner != &ID {
        return Err(missing.into());
    }

    ClaimAccount::try_deserialize(&mut &info.try_borrow_data()?[..])
}

/// Writes a claim ledger entry back to its account
pub fn store_claim_account(info: &AccountInfo, claim_account: &ClaimAccount) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    claim_account.try_serialize(&mut writer)
}

/// Transfers `amount` out of the holding account, signed by the token-authority PDA
pub fn pay_from_holding<'info>(
    holding: &InterfaceAccount<'info, TokenAccount>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_authority: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    token_authority_bump: u8,
    amount: u64,
) -> Result<()> {
    let seeds = &[TOKEN_AUTHORITY_SEED, &[token_authority_bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: holding.to_account_info(),
        mint: mint.to_account_info(),
        to: destination.to_account_info(),
        authority: token_authority.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}
