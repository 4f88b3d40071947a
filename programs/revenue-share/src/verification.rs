//! NFT holder verification
//!
//! Registration and NFT claims both reduce the four NFT accounts to typed
//! views and run them through [`verify_nft_ownership`]. A successful check
//! yields an [`NftOwnership`] proof; anything else is a typed error.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address,
    metadata::{MasterEditionAccount, Metadata, MetadataAccount},
    token::{Mint, TokenAccount},
};

use crate::errors::ErrorCode;

/// Token account expected to hold the NFT
#[derive(Debug, Clone, Copy)]
pub struct NftHolding {
    pub address: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

/// NFT mint
#[derive(Debug, Clone, Copy)]
pub struct NftMint {
    pub address: Pubkey,
    pub supply: u64,
    pub decimals: u8,
}

/// Collection reference carried by the NFT's metadata
#[derive(Debug, Clone, Copy)]
pub struct CollectionRef {
    pub key: Pubkey,
    pub verified: bool,
}

/// Metaplex metadata of the NFT
#[derive(Debug, Clone, Copy)]
pub struct NftMetadata {
    pub mint: Pubkey,
    pub collection: Option<CollectionRef>,
}

/// Master edition account of the NFT
#[derive(Debug, Clone, Copy)]
pub struct NftEdition {
    pub address: Pubkey,
}

/// Proof that `holder` currently holds the single unit of `mint` in `token`,
/// and that `mint` is a verified member of the configured collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NftOwnership {
    pub holder: Pubkey,
    pub token: Pubkey,
    pub mint: Pubkey,
}

impl NftHolding {
    pub fn from_account(account: &Account<TokenAccount>) -> Self {
        Self {
            address: account.key(),
            owner: account.owner,
            mint: account.mint,
            amount: account.amount,
        }
    }
}

impl NftMint {
    pub fn from_account(account: &Account<Mint>) -> Self {
        Self {
            address: account.key(),
            supply: account.supply,
            decimals: account.decimals,
        }
    }
}

impl NftMetadata {
    pub fn from_account(account: &Account<MetadataAccount>) -> Self {
        Self {
            mint: account.mint,
            collection: account.collection.as_ref().map(|c| CollectionRef {
                key: c.key,
                verified: c.verified,
            }),
        }
    }
}

impl NftEdition {
    pub fn from_account(account: &Account<MasterEditionAccount>) -> Self {
        Self { address: account.key() }
    }
}

/// Master edition PDA of a mint under the Token Metadata program
pub fn master_edition_address(mint: &Pubkey) -> Pubkey {
    let metadata_program = Metadata::id();
    Pubkey::find_program_address(
        &[
            b"metadata",
            metadata_program.as_ref(),
            mint.as_ref(),
            b"edition",
        ],
        &metadata_program,
    )
    .0
}

/// Checks that `signer` holds an NFT of `collection`
///
/// The NFT must sit in the signer's associated token account, so each
/// wallet has a single registrable account per NFT and that account can
/// never sign for itself.
///
/// Fails with `Unauthorized` when someone else holds the token account or
/// it is not the signer's associated token account, and with
/// `NotCollectionMember` for every other mismatch.
pub fn verify_nft_ownership(
    signer: &Pubkey,
    collection: &Pubkey,
    holding: &NftHolding,
    mint: &NftMint,
    metadata: &NftMetadata,
    edition: &NftEdition,
) -> Result<NftOwnership> {
    require_keys_eq!(holding.owner, *signer, ErrorCode::Unauthorized);

    // Exactly one unit of a non-fungible mint
    require_keys_eq!(holding.mint, mint.address, ErrorCode::NotCollectionMember);
    require_keys_eq!(
        holding.address,
        get_associated_token_address(signer, &mint.address),
        ErrorCode::Unauthorized
    );
    require!(holding.amount == 1, ErrorCode::NotCollectionMember);
    require!(
        mint.supply == 1 && mint.decimals == 0,
        ErrorCode::NotCollectionMember
    );

    // Metadata and edition must describe this mint
    require_keys_eq!(metadata.mint, mint.address, ErrorCode::NotCollectionMember);
    require_keys_eq!(
        edition.address,
        master_edition_address(&mint.address),
        ErrorCode::NotCollectionMember
    );

    let member = metadata
        .collection
        .is_some_and(|c| c.verified && c.key == *collection);
    require!(member, ErrorCode::NotCollectionMember);

    Ok(NftOwnership {
        holder: *signer,
        token: holding.address,
        mint: mint.address,
    })
}
