//! Deterministic per-token factory addresses.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;

/// A listed wrapper token as reported by the token list query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedToken {
    pub address: Pubkey,
    /// Wrapped mint; the default key marks a native/pure token with nothing to wrap.
    pub underlying: Pubkey,
    pub symbol: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenFactoryInfo {
    pub factory: Pubkey,
    pub symbol: String,
    pub name: String,
}

/// Factory PDA owned by `creator_program` for `mint`.
pub fn factory_address(creator_program: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FACTORY_SEED, mint.as_ref()], creator_program)
}

/// Token address -> factory info for every wrapper token in `listed`.
pub fn token_factory_map(
    listed: &[ListedToken],
    creator_program: &Pubkey,
) -> BTreeMap<Pubkey, TokenFactoryInfo> {
    listed
        .iter()
        .filter(|t| t.underlying != Pubkey::default())
        .map(|t| {
            let (factory, _) = factory_address(creator_program, &t.address);
            (
                t.address,
                TokenFactoryInfo {
                    factory,
                    symbol: t.symbol.clone(),
                    name: t.name.clone(),
                },
            )
        })
        .collect()
}
