//! Output rendering for extracted catalogs.

mod json;

pub use json::{to_json, to_json_default, JsonFormat};
