use thiserror::Error;

/// Errors produced while parsing chord specifications.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyTokenError {
    /// The specification contained no keys at all.
    #[error("Empty chord spec")]
    Empty,
    /// A `+`-separated component was blank, e.g. `ctrl++k` or `ctrl+`.
    #[error("Empty key in chord spec '{spec}'")]
    EmptyComponent {
        /// The offending specification.
        spec: String,
    },
}
