use anchor_lang::prelude::*;

/// Balance observed on-chain at a known instant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceSnapshot {
    /// Balance in token base units.
    pub balance: i128,
    /// Observation time (Unix seconds).
    pub timestamp: i64,
}

impl BalanceSnapshot {
    pub fn new(balance: i128, timestamp: i64) -> Self {
        Self { balance, timestamp }
    }
}

/// Base units per second. Positive rates drain the projected balance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowRate(pub i128);

impl FlowRate {
    pub const ZERO: FlowRate = FlowRate(0);

    pub fn per_second(&self) -> i128 {
        self.0
    }

    pub fn is_draining(&self) -> bool {
        self.0 > 0
    }
}

impl From<i128> for FlowRate {
    fn from(rate: i128) -> Self {
        FlowRate(rate)
    }
}

/// A projected balance together with the instant it was evaluated at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projection {
    pub eval_ts: i64,
    pub projected: i128,
}
