//! Program-wide constants.

/// Seconds the UI clock advances per tick.
pub const TICK_SECONDS: i64 = 1;

/// Max vestees accepted in a single vesting request.
pub const MAX_VESTEES: usize = 35;

/// Largest decimals value `format_units`/`parse_units` accept (10^38 fits in i128).
pub const MAX_DECIMALS: u8 = 38;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// PDA seed for the per-token vestooor factory.
pub const FACTORY_SEED: &[u8] = b"vestooor_factory";

/// Max instance addresses kept in the registry.
pub const MAX_INSTANCES: usize = 1024;

/// Instance registry blob magic.
pub const REGISTRY_MAGIC: [u8; 8] = *b"VESTOOOR";

/// Instance registry blob format version.
pub const REGISTRY_VERSION: u32 = 1;
