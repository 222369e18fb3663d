use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphicsError {
    #[error("unable to create GL context: {0}")]
    Context(String),

    #[error("unable to create shader object: {0}")]
    ShaderCreate(String),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("unable to create program object: {0}")]
    ProgramCreate(String),

    #[error("program failed to link: {0}")]
    ProgramLink(String),

    #[error("unable to create vertex buffer: {0}")]
    Buffer(String),
}

pub type GraphicsResult<T> = Result<T, GraphicsError>;
