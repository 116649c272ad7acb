//! MaveDB model types.

mod licence;

pub use licence::*;
