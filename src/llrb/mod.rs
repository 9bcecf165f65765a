//! Module implement Left leaning red black tree.
//!
//! Single threaded, owned variant. Mutations walk down recursively and
//! restore the 2-3 tree invariants on the way up.

mod index;
mod node;

pub use index::Llrb;
pub use node::Node;
