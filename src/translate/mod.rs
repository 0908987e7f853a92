//! Wire format of the Apertium translate endpoint.
//!
//! `request` builds query strings and checks inputs; `response` pulls the
//! translated text out of the JSON envelope. Both are pure (no I/O).

pub mod request;
pub mod response;

pub use request::{join_quoted, TranslationRequest, MAX_TEXT_BYTES};
pub use response::{
    extract_nested_string, extract_nested_string_array, RESPONSE_LABEL, TRANSLATION_LABEL,
};
