use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{BalanceSnapshot, FlowRate, FlowingBalanceDetails};

declare_id!("BjQGGeE49jd77Wx5NAw5QZaFN6J1sq1QhdKw39ttqyDB");

#[program]
pub mod vestooor {
    use super::*;

    pub fn emit_flow_projection(
        ctx: Context<EmitFlowProjection>,
        snapshot: BalanceSnapshot,
        flow_rate: FlowRate,
        eval_ts: Option<i64>,
    ) -> Result<()> {
        instructions::emit_flow_projection::emit_flow_projection(
            ctx, snapshot, flow_rate, eval_ts,
        )
    }

    pub fn emit_remaining_vest_amount(
        ctx: Context<EmitRemainingVestAmount>,
        details: FlowingBalanceDetails,
    ) -> Result<()> {
        instructions::emit_remaining_vest_amount::emit_remaining_vest_amount(ctx, details)
    }
}
