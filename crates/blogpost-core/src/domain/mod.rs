//! Domain model (object request/response, blog posts, errors).

pub mod blog_post;
pub mod errors;
pub mod object;

pub use self::blog_post::{BlogPost, ERROR_POST_CONTENTS, ERROR_POST_ID, ERROR_POST_TITLE};
pub use self::errors::{AccessError, ErrorKind, FetchError};
pub use self::object::{ContentStream, ObjectRequest, ObjectResponse};
