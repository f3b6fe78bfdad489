use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read definition file '{path}'")]
    DefinitionFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("knob '{knob}' derived an invalid match pattern '{pattern}'")]
    InvalidKnobPattern {
        knob: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
