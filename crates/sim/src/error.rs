/// Errors from host-side argument handling.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("--{0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value for --{0}")]
    InvalidValue(&'static str),

    #[error("unknown option: {0}")]
    UnknownOption(String),
}
