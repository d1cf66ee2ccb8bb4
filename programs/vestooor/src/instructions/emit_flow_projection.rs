use anchor_lang::prelude::*;

use crate::state::{BalanceSnapshot, FlowRate};
use crate::utils::clock::{NowSource, SysvarClock};
use crate::utils::projection::{depleted_at, project_flow};

/// Projects `snapshot` to `eval_ts` (cluster time when omitted) and emits the result.
pub fn emit_flow_projection(
    _ctx: Context<EmitFlowProjection>,
    snapshot: BalanceSnapshot,
    flow_rate: FlowRate,
    eval_ts: Option<i64>,
) -> Result<()> {
    let eval_ts = match eval_ts {
        Some(ts) => ts,
        None => SysvarClock.now()?,
    };
    let projected = flow_projected(&snapshot, flow_rate, eval_ts);
    msg!(
        "flow projection: {} -> {} over {}s",
        snapshot.balance,
        projected.projected,
        eval_ts as i128 - snapshot.timestamp as i128
    );
    emit!(projected);
    Ok(())
}

pub fn flow_projected(snapshot: &BalanceSnapshot, flow_rate: FlowRate, eval_ts: i64) -> FlowProjected {
    FlowProjected {
        balance: snapshot.balance,
        snapshot_ts: snapshot.timestamp,
        flow_rate: flow_rate.per_second(),
        eval_ts,
        projected: project_flow(snapshot, flow_rate, eval_ts),
        depleted_at: depleted_at(snapshot, flow_rate),
    }
}

#[derive(Accounts)]
pub struct EmitFlowProjection {}

#[event]
pub struct FlowProjected {
    pub balance: i128,
    pub snapshot_ts: i64,
    pub flow_rate: i128,
    pub eval_ts: i64,
    pub projected: i128,
    pub depleted_at: Option<i64>,
}
