use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("canvas not found: {0}")]
    CanvasNotFound(String),
    #[error("WebGL2 context unavailable")]
    ContextUnavailable,
    #[error("shader compile failed: {0}")]
    ShaderCompile(String),
    #[error("program link failed: {0}")]
    ProgramLink(String),
    #[error("unknown page namespace `{0}`")]
    UnknownPage(String),
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
