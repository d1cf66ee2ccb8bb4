pub mod flow;
pub mod instance;
pub mod registry;
pub mod vestee;

pub use flow::*;
pub use instance::*;
pub use registry::*;
pub use vestee::*;
