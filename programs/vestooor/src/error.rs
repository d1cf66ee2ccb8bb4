use anchor_lang::prelude::*;

/// Custom error codes for the vestooor program and its client helpers.
#[error_code]
pub enum VestooorError {
    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Duplicate vestee wallet")]
    DuplicateVestee,

    #[msg("Vestee not found")]
    VesteeNotFound,

    #[msg("Vestee list is full")]
    VesteeListFull,

    #[msg("Vestee list is empty")]
    EmptyVesteeList,

    #[msg("Invalid decimal string")]
    InvalidDecimalString,

    #[msg("Too many fractional digits for token decimals")]
    TooManyDecimals,

    #[msg("Instance registry is full")]
    RegistryFull,

    #[msg("Instance registry is corrupted")]
    RegistryCorrupted,

    #[msg("Malformed VestingContractCreated event")]
    InvalidEvent,

    #[msg("Math overflow")]
    MathOverflow,
}
