pub mod emit_flow_projection;
pub mod emit_remaining_vest_amount;

pub use emit_flow_projection::*;
pub use emit_remaining_vest_amount::*;
