// PDA seeds
pub const GLOBAL_SEED: &[u8] = b"global";
pub const CLAIM_SEED: &[u8] = b"claim";
pub const TOKEN_AUTHORITY_SEED: &[u8] = b"token-authority";

// Share configuration
pub const SHARE_DENOMINATOR: u64 = 10_000;
pub const MARKETING_SHARES: u64 = 3_500; // 35%
pub const LP_SHARES: u64 = 5_000;        // 50%
pub const NFT_SHARES: u64 = 3;           // 0.03% per registered NFT

// Account sizes (Borsh layout)
// Global: discriminator (8) + 6 pubkeys (192) + 4 u64 (32) + 2 bumps (2)
pub const GLOBAL_SIZE: usize = 8 + 32 * 6 + 8 * 4 + 1 + 1; // 234 bytes

// ClaimAccount: discriminator (8) + owner (32) + shares (8) + total_claimed (8) + bump (1)
pub const CLAIM_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 1; // 57 bytes
