pub mod binding;
pub mod email;
pub mod error;

pub use error::*;
