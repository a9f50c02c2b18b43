//! App - Access Component と request handler

pub mod access;
pub mod handler;
mod stream;

pub use self::access::BlogPostAccess;
pub use self::handler::{GetPostRequest, handle};
