mod email;
mod length;
mod required;

pub use email::{validate_email, EMAIL_MAX, EMAIL_LOCAL_MAX};
pub use length::validate_length;
pub use required::validate_required;
