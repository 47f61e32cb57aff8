//! Strategy contract for producing plain text codes.

/// A strategy producing a plain text verification code
///
/// Implementations must return a non-empty code of the requested shape for
/// any length; the registry rejects strategies that cannot.
pub trait CodeGenerator: std::fmt::Debug + Send + Sync {
    /// Draws a fresh code of the given length
    fn generate(&self, length: usize) -> String;
}
