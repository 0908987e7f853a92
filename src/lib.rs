pub mod client;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod translate;
pub mod transport;

pub use client::Translator;
pub use config::TranslatorConfig;
pub use error::{Result, TranslateError};
pub use language::Language;
pub use logging::SharedLogger;
pub use transport::{HttpTransport, Transport};
