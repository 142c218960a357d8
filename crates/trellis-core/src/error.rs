use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    Missing { id: NodeId },
    TypeMismatch { id: NodeId, expected: &'static str },
    Cycle { parent: NodeId, child: NodeId },
    RootImmutable,
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id:?} missing"),
            NodeError::TypeMismatch { id, expected } => {
                write!(f, "node {id:?} type mismatch; expected {expected}")
            }
            NodeError::Cycle { parent, child } => {
                write!(f, "cannot add {child:?} under its own descendant {parent:?}")
            }
            NodeError::RootImmutable => write!(f, "the root node cannot be moved or destroyed"),
        }
    }
}

impl std::error::Error for NodeError {}
