pub mod config_error;
pub mod graph_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;

/// Umbrella error for the Starlane workspace.
#[derive(Debug, thiserror::Error)]
pub enum StarlaneError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Workspace-wide result alias.
pub type StarlaneResult<T> = Result<T, StarlaneError>;
