//! Relink Core — node/graph data model for rand-linked lists

pub mod list;
pub mod model;


pub use list::{Chain, RandList, same_shape};
pub use model::{LinkKind, Node, NodeId};
