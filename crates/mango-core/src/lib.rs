//! Mango surface core: shared error type and traits.

pub mod error;
pub mod traits;

pub use error::{MangoError, Result};
pub use traits::Validate;
