use crate::galaxy::SystemId;

/// Star map lookup errors. A malformed map is a collaborator contract
/// violation, not a recoverable runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("unknown system: {id}")]
    UnknownSystem { id: SystemId },

    #[error("dangling link: {from} -> {to}")]
    DanglingLink { from: SystemId, to: SystemId },
}
