//! Linear projection of a flowing balance.
//!
//! projected(t) = snapshot.balance - (t - snapshot.timestamp) * rate
//!
//! Evaluating before the snapshot rewinds the flow. Results are never clamped: a negative value
//! means the balance has been fully drained since `depleted_at`.

use crate::error::VestooorError;
use crate::state::{BalanceSnapshot, FlowRate, Projection};
use crate::utils::clock::{NowSource, TickingClock};

/// Projects `snapshot` to `eval_ts` under a constant `flow_rate`.
///
/// Exact whenever the true result fits in `i128`; otherwise saturates toward the overflow side.
pub fn project_flow(snapshot: &BalanceSnapshot, flow_rate: FlowRate, eval_ts: i64) -> i128 {
    // i64 - i64 always fits in i128.
    let elapsed = eval_ts as i128 - snapshot.timestamp as i128;
    let rate = flow_rate.per_second();
    let balance = snapshot.balance;

    if let Some(flowed) = elapsed.checked_mul(rate) {
        return balance.saturating_sub(flowed);
    }

    // |elapsed * rate| > i128::MAX, but balance - elapsed * rate may still fit.
    let drained = (elapsed < 0) == (rate < 0);
    let headroom = if drained {
        // balance - i128::MIN
        (balance as u128).wrapping_add(1u128 << 127)
    } else {
        // i128::MAX - balance
        (i128::MAX as u128).wrapping_sub(balance as u128)
    };
    match elapsed.unsigned_abs().checked_mul(rate.unsigned_abs()) {
        // Two's complement arithmetic is exact mod 2^128 once the result is known to fit.
        Some(flowed) if flowed <= headroom => {
            if drained {
                balance.wrapping_sub(flowed as i128)
            } else {
                balance.wrapping_add(flowed as i128)
            }
        }
        _ if drained => i128::MIN,
        _ => i128::MAX,
    }
}

/// Host-float rendition. Non-finite inputs propagate as NaN/inf.
pub fn project_flow_f64(balance: f64, snapshot_ts: f64, flow_rate: f64, eval_ts: f64) -> f64 {
    balance - (eval_ts - snapshot_ts) * flow_rate
}

/// First whole second at which the projection reaches zero or below.
/// `None` when the flow never drains the balance.
pub fn depleted_at(snapshot: &BalanceSnapshot, flow_rate: FlowRate) -> Option<i64> {
    let rate = flow_rate.per_second();
    if rate <= 0 {
        return None;
    }
    // ceil(balance / rate) for rate > 0
    let mut secs = snapshot.balance / rate;
    if snapshot.balance % rate > 0 {
        secs += 1;
    }
    let at = (snapshot.timestamp as i128).checked_add(secs)?;
    i64::try_from(at).ok()
}

/// Display-only clamp; projections themselves stay signed.
pub fn clamp_for_display(projected: i128) -> u128 {
    if projected < 0 {
        0
    } else {
        projected as u128
    }
}

/// Re-evaluates the projection once per clock tick against the latest snapshot/rate pair.
#[derive(Clone, Debug)]
pub struct ProjectionTicker {
    snapshot: BalanceSnapshot,
    flow_rate: FlowRate,
    clock: TickingClock,
}

impl ProjectionTicker {
    pub fn new(snapshot: BalanceSnapshot, flow_rate: FlowRate, clock: TickingClock) -> Self {
        Self {
            snapshot,
            flow_rate,
            clock,
        }
    }

    /// Supersedes the snapshot/rate pair; the next tick projects from the new pair.
    pub fn refresh(&mut self, snapshot: BalanceSnapshot, flow_rate: FlowRate) {
        self.snapshot = snapshot;
        self.flow_rate = flow_rate;
    }

    pub fn snapshot(&self) -> &BalanceSnapshot {
        &self.snapshot
    }

    pub fn flow_rate(&self) -> FlowRate {
        self.flow_rate
    }

    /// Projection at the clock's current instant, without advancing it.
    pub fn current(&self) -> Result<Projection, VestooorError> {
        let eval_ts = self.clock.now()?;
        Ok(Projection {
            eval_ts,
            projected: project_flow(&self.snapshot, self.flow_rate, eval_ts),
        })
    }
}

impl Iterator for ProjectionTicker {
    type Item = Projection;

    fn next(&mut self) -> Option<Projection> {
        let eval_ts = self.clock.tick().ok()?;
        Some(Projection {
            eval_ts,
            projected: project_flow(&self.snapshot, self.flow_rate, eval_ts),
        })
    }
}
