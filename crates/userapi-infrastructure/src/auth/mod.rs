//! Token issuance and verification

pub mod token;

pub use token::TokenCodec;
