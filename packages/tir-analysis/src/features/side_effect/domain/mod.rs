/// Side-effect analysis domain models
pub mod effect_kind;
pub mod ports;
pub mod scan_state;

pub use effect_kind::*;
pub use ports::*;
pub use scan_state::*;
