pub mod common;
pub mod entry;
pub mod period;

pub use common::{Displayable, Identifiable};
pub use entry::{Entry, EntryKind};
pub use period::Period;
