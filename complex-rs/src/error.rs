use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexError {
    #[error("polar form takes exactly 2 components (magnitude, phase), got {0}")]
    PolarArity(usize),
}
