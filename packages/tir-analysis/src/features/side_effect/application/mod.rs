/// Side-effect analysis application layer
pub mod has_side_effect;
pub mod side_effect_service;

pub use has_side_effect::*;
pub use side_effect_service::SideEffectAnalysisService;
