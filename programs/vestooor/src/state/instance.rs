use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::state::{BalanceSnapshot, FlowRate};
use crate::utils::projection::{clamp_for_display, project_flow};
use crate::utils::time::format_utc;
use crate::utils::units::format_units;

/// Instance balance and outgoing flow as read at one block.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowingBalanceDetails {
    /// Available balance of the instance (base units).
    pub balance: i128,
    /// Block timestamp the balance was read at.
    pub balance_timestamp: i64,
    /// Instance -> vestee flow rate (base units per second).
    pub flow_rate: i128,
}

impl FlowingBalanceDetails {
    pub fn snapshot(&self) -> BalanceSnapshot {
        BalanceSnapshot::new(self.balance, self.balance_timestamp)
    }

    pub fn flow_rate(&self) -> FlowRate {
        FlowRate(self.flow_rate)
    }

    /// Unclamped remaining balance at `now`.
    pub fn remaining_at(&self, now: i64) -> i128 {
        project_flow(&self.snapshot(), self.flow_rate(), now)
    }
}

/// Everything the instance view shows for one deployed vesting contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingInstanceDetails {
    pub instance: Pubkey,
    pub vestee: Pubkey,
    pub amount_to_vest: u128,
    pub vesting_end_ts: i64,
    pub token_symbol: String,
    pub token_name: String,
    pub flowing_balance: FlowingBalanceDetails,
}

impl VestingInstanceDetails {
    pub fn remaining_vest_amount(&self, now: i64) -> i128 {
        self.flowing_balance.remaining_at(now)
    }

    /// Remaining amount clamped at zero and scaled by `decimals`.
    pub fn remaining_display(&self, now: i64, decimals: u8) -> String {
        let remaining = clamp_for_display(self.remaining_vest_amount(now));
        format_units(i128::try_from(remaining).unwrap_or(i128::MAX), decimals)
    }

    pub fn flow_rate_display(&self, decimals: u8) -> String {
        format!(
            "{} {}/s",
            format_units(self.flowing_balance.flow_rate, decimals),
            self.token_symbol
        )
    }

    pub fn amount_to_vest_display(&self, decimals: u8) -> String {
        format_units(
            i128::try_from(self.amount_to_vest).unwrap_or(i128::MAX),
            decimals,
        )
    }

    pub fn vesting_end_display(&self) -> String {
        format_utc(self.vesting_end_ts)
    }

    /// The vestee's associated token account for `mint`.
    pub fn vestee_token_account(&self, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(&self.vestee, mint)
    }
}

/// Connected user's balances for the selected token (base units).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserTokenInfo {
    pub user_balance: u128,
    pub underlying_balance: u128,
    /// Amount approved to the factory.
    pub available_to_vest: u128,
}

impl UserTokenInfo {
    /// Whether the current approval covers `amount`.
    pub fn covers(&self, amount: u128) -> bool {
        self.available_to_vest >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> VestingInstanceDetails {
        VestingInstanceDetails {
            instance: Pubkey::new_unique(),
            vestee: Pubkey::new_unique(),
            amount_to_vest: 1_000_000_000_000_000_000_000,
            vesting_end_ts: 1_661_990_400,
            token_symbol: "fDAIx".to_string(),
            token_name: "Super fDAI Fake Token".to_string(),
            flowing_balance: FlowingBalanceDetails {
                balance: 1_000_000_000_000_000_000,
                balance_timestamp: 1_000_000,
                flow_rate: 10_000_000_000_000_000,
            },
        }
    }

    #[test]
    fn remaining_counts_down_with_time() {
        let d = details();
        assert_eq!(d.remaining_vest_amount(1_000_000), 1_000_000_000_000_000_000);
        assert_eq!(d.remaining_vest_amount(1_000_050), 500_000_000_000_000_000);
        assert_eq!(d.remaining_display(1_000_050, 18), "0.5");
    }

    #[test]
    fn display_clamps_past_depletion_but_value_does_not() {
        let d = details();
        assert_eq!(d.remaining_vest_amount(1_000_200), -1_000_000_000_000_000_000);
        assert_eq!(d.remaining_display(1_000_200, 18), "0.0");
    }

    #[test]
    fn renders_rate_amount_and_end_date() {
        let d = details();
        assert_eq!(d.flow_rate_display(18), "0.01 fDAIx/s");
        assert_eq!(d.amount_to_vest_display(18), "1000.0");
        assert_eq!(d.vesting_end_display(), "2022-09-01 00:00:00 UTC");
    }

    #[test]
    fn vestee_token_account_is_deterministic() {
        let d = details();
        let mint = Pubkey::new_unique();
        assert_eq!(d.vestee_token_account(&mint), d.vestee_token_account(&mint));
        assert_ne!(d.vestee_token_account(&mint), d.vestee);
    }

    #[test]
    fn approval_coverage() {
        let info = UserTokenInfo {
            available_to_vest: 100,
            ..UserTokenInfo::default()
        };
        assert!(info.covers(100));
        assert!(!info.covers(101));
    }
}
