#![doc = r"Node tree, lifecycle and ownership core for Trellis."]

pub mod collections;
mod error;
mod script;
mod shared;
mod tree;

pub use error::NodeError;
pub use script::NodeScript;
pub use shared::Shared;
pub use tree::{Ancestors, NodeId, NodeTree};

pub mod prelude {
    pub use crate::error::NodeError;
    pub use crate::script::NodeScript;
    pub use crate::shared::Shared;
    pub use crate::tree::{NodeId, NodeTree};
}
