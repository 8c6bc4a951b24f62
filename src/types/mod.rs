pub mod error;
pub mod form;

pub use error::Error;
pub use form::{FormKind, ValidatedForm};
