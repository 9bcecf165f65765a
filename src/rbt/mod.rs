//! Module implement a classic red-black tree with top-down mutations.
//!
//! Both insert and delete restructure the tree in a single pass from root
//! to leaf. Insert flips colors and rotates on the way down, delete pushes
//! a red node down the search path and replaces the found key with its
//! in-order neighbour before unlinking the neighbour's node. Snapshots of
//! this tree are what oracle streams carry by default.
//!
//! Nodes are kept in a slab and linked by index.

mod index;
mod node;

pub use index::Rbt;
pub use node::NodeRef;
use node::{Node, LEFT, RIGHT};
