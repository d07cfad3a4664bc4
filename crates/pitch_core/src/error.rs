use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Shape mismatch for {input}: expected {expected_cols} columns, found {found_cols}")]
    ShapeMismatch {
        input: &'static str,
        expected_cols: usize,
        found_cols: usize,
    },

    #[error("Length mismatch: expected {expected} agent rows, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Voronoi diagram has not been computed yet")]
    NotComputed,

    #[error("Insufficient points: need at least {required} inside the field, found {found}")]
    InsufficientPoints { required: usize, found: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl MetricsError {
    /// Every variant is a violated precondition; nothing here is worth retrying.
    pub fn is_caller_error(&self) -> bool {
        match self {
            MetricsError::ShapeMismatch { .. } => true,
            MetricsError::LengthMismatch { .. } => true,
            MetricsError::NotComputed => true,
            MetricsError::InsufficientPoints { .. } => true,
            MetricsError::InvalidParameter(_) => true,
        }
    }
}

impl From<serde_json::Error> for MetricsError {
    fn from(err: serde_json::Error) -> Self {
        MetricsError::InvalidParameter(format!("config parse error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
