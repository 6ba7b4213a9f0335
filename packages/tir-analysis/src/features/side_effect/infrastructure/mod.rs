/// Side-effect analysis infrastructure
pub mod builtin_ops;
pub mod effect_level_visitor;
pub mod op_registry;
pub mod side_effect_visitor;

pub use builtin_ops::*;
pub use effect_level_visitor::*;
pub use op_registry::*;
pub use side_effect_visitor::*;
