//! Option groups: the declared options owned by one command node.
//!
//! ```text
//! Handler::options() → OptionGroup::scan (validate) → OptionGroup
//! ```

mod option;
mod scan;

pub use option::{Arity, OptionDef};
pub use scan::{OptionGroup, ScanError};
