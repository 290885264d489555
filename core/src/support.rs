//! Support method bodies.
//!
//! Domain types can declare convention-named companion methods (`hideX`,
//! `disableX`, `validateX`, `defaultX`, `choicesX`) whose behavior the host
//! application supplies as a closure. The resolution pipeline binds these
//! bodies into facets; at evaluation time a body receives the attribute map
//! of the instance under inspection plus any positional arguments.

use crate::{Attributes, Value};
use std::sync::Arc;

/// A host-supplied body for a support method.
pub type SupportBody = Arc<dyn Fn(&Attributes, &[Value]) -> Value + Send + Sync>;

/// A support body that ignores its inputs and returns a fixed value.
pub fn constant(value: Value) -> SupportBody {
    Arc::new(move |_, _| value.clone())
}
