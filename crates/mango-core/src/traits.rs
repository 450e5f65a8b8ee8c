use crate::error::Result;

/// Validate structural integrity of a value before it is consumed.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
