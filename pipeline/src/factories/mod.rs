//! The built-in factories of the standard programming model.

mod companion;
mod constraint;
mod nature;
mod order;
mod publishing;
mod semantics;
mod visibility;

pub use companion::*;
pub use constraint::*;
pub use nature::*;
pub use order::*;
pub use publishing::*;
pub use semantics::*;
pub use visibility::*;
