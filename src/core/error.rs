//! Error types for expression construction and analysis

use thiserror::Error;

/// Errors surfaced by the node model's collaborators and the analyses built on it.
///
/// "Nothing found" is never an error: a missing symbol, a zero coefficient or an
/// empty symbol set are ordinary results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// A power with zero base and negative exponent was evaluated, typically
    /// while substituting a symbol by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation that needs a symbol was handed some other kind of node.
    #[error("expected a symbol, got {0}")]
    NotASymbol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ExprError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            ExprError::NotASymbol("Integer".to_string()).to_string(),
            "expected a symbol, got Integer"
        );
    }
}
