pub mod orders;

use crate::error::json_error_handler;
use actix_web::web;

/// JSON extractor settings shared by every route that accepts a body.
///
/// Bodies are decoded as JSON whatever `Content-Type` the client sends; only
/// malformed JSON is rejected.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(json_error_handler)
}
