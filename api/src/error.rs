use thiserror::Error;

/// Everything that can go wrong between picking a file and holding a decoded payload.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Unsupported file '{name}': only .xes event logs can be analyzed")]
    UnsupportedFile { name: String },
    #[error("File '{name}' is empty")]
    EmptyFile { name: String },
    #[error("Request to the analysis service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Analysis service replied {status}: {message}")]
    Service { status: u16, message: String },
    #[error("Malformed analysis payload: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// Short advisory text for the upload panel.
    pub fn advisory(&self) -> String {
        match self {
            Self::UnsupportedFile { .. } | Self::EmptyFile { .. } => self.to_string(),
            Self::Service { message, .. } => message.clone(),
            Self::Transport(_) | Self::Decode { .. } => {
                "An error occurred while analyzing the file.".to_string()
            }
        }
    }
}
