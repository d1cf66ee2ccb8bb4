use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::state::FlowingBalanceDetails;
use crate::utils::clock::{NowSource, SysvarClock};
use crate::utils::projection::{clamp_for_display, depleted_at};
use crate::utils::units::format_units;

pub fn emit_remaining_vest_amount(
    ctx: Context<EmitRemainingVestAmount>,
    details: FlowingBalanceDetails,
) -> Result<()> {
    let now = SysvarClock.now()?;
    let quote = remaining_vest_quote(&details, ctx.accounts.mint.decimals, now);
    msg!("remaining to vest at {}: {}", now, quote.remaining_display);
    emit!(quote);
    Ok(())
}

pub fn remaining_vest_quote(
    details: &FlowingBalanceDetails,
    decimals: u8,
    now: i64,
) -> RemainingVestAmountQuoted {
    let projected = details.remaining_at(now);
    let remaining = clamp_for_display(projected);
    RemainingVestAmountQuoted {
        projected,
        remaining,
        remaining_display: format_units(i128::try_from(remaining).unwrap_or(i128::MAX), decimals),
        decimals,
        eval_ts: now,
        depleted_at: depleted_at(&details.snapshot(), details.flow_rate()),
    }
}

#[derive(Accounts)]
pub struct EmitRemainingVestAmount<'info> {
    /// Vested token mint; only its decimals are read.
    pub mint: Account<'info, Mint>,
}

#[event]
pub struct RemainingVestAmountQuoted {
    /// Unclamped projection.
    pub projected: i128,
    /// Projection clamped at zero.
    pub remaining: u128,
    pub remaining_display: String,
    pub decimals: u8,
    pub eval_ts: i64,
    pub depleted_at: Option<i64>,
}
