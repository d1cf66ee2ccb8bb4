pub mod clock;
pub mod factory;
pub mod projection;
pub mod time;
pub mod units;
