mod user_delegate;

pub use user_delegate::{HttpUserDelegate, PASSWORD_HEADER, USERNAME_HEADER};
