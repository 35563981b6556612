use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid target: {spec}. Expected RATIO=WxH, e.g. 4:5=16x20")]
    InvalidTarget { spec: String },

    #[error("No print targets given. Pass --target or --classic")]
    NoTargets,

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lib(#[from] printcrop::Error),
}
