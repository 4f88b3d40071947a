#![allow(ambiguous_glob_reexports)]

pub mod claim;
pub mod claim_with_nft;
pub mod initialize;
pub mod register;

pub use claim::*;
pub use claim_with_nft::*;
pub use initialize::*;
pub use register::*;
