use crate::node::NodeId;
use thiserror::Error;

/// Errors raised by the filter engine.
///
/// Everything else the engine encounters (empty matches, dangling parent
/// references) is a valid outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A node's parent chain loops back onto itself.
    #[error("parent cycle detected through node {id}")]
    ParentCycle { id: NodeId },

    /// Ancestor closure kept adding nodes past its pass bound.
    #[error("ancestor closure did not converge after {passes} passes")]
    ClosureDidNotConverge { passes: usize },
}
