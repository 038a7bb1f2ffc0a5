use tierforge_core::InvalidInput;

/// Everything that can stop a `tierforge` invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line was not usable at all.
    #[error("usage: {0}")]
    Usage(String),

    /// A unit token was not an integer or comma-separated integer list.
    #[error("invalid unit count '{token}': expected an integer or a comma-separated list of integers")]
    Malformed { token: String },

    /// The counts parsed but the converter refused them.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Malformed { .. } => 2,
            CliError::Invalid(_) | CliError::Json(_) => 1,
        }
    }
}
