pub mod html;
pub mod url_validator;

pub use url_validator::{UrlValidationError, parse_http_url, redact_query, validate_url};
