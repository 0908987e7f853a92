use crate::config::TranslatorConfig;
use crate::error::{Result, TranslateError};
use crate::language::Language;
use crate::logging::SharedLogger;
use crate::transport::{read_body, HttpRequest, HttpTransport, Transport};
use crate::translate::request::{
    batch_query, check_text_size, single_query, zip_requests, TranslationRequest,
};
use crate::translate::response::{
    extract_nested_string, extract_nested_string_array, RESPONSE_LABEL, TRANSLATION_LABEL,
};

use serde_json::json;
use tracing::{debug, warn};

/// Client for the Apertium translate endpoint.
///
/// Each instance owns its configuration, so clients with different keys can
/// be used side by side. The transport is generic to allow swapping the HTTP
/// layer out in tests.
pub struct Translator<T = HttpTransport> {
    config: TranslatorConfig,
    transport: T,
    logger: Option<SharedLogger>,
}

impl Translator<HttpTransport> {
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Translator<T> {
    pub fn with_transport(config: TranslatorConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            logger: None,
        }
    }

    #[must_use]
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = Some(api_key.into());
    }

    pub fn set_http_referrer(&mut self, referrer: impl Into<String>) {
        self.config.referrer = Some(referrer.into());
    }

    /// Translate one text. The result is trimmed.
    ///
    /// # Errors
    /// `TextTooLarge` if `text` is over 10 240 bytes, `Config` if no usable
    /// key is set, otherwise whatever the request or parse step reports.
    pub async fn translate_one(&self, text: &str, from: Language, to: Language) -> Result<String> {
        check_text_size([text])?;
        let api_key = self.config.validate_configured()?;

        let req = TranslationRequest::new(text, from, to);
        let url = self.request_url(&single_query(api_key, &req));

        let result = async {
            let body = self.fetch(&url).await?;
            extract_nested_string(&body, RESPONSE_LABEL, TRANSLATION_LABEL)
        }
        .await
        .map(|translated| translated.trim().to_string());

        self.record(
            "translate_one",
            json!({ "langpair": format!("{from}|{to}"), "bytes": text.len() }),
            &result,
        );
        result
    }

    /// Translate several texts in one request. `texts`, `from` and `to` are
    /// parallel; results come back in the same order.
    ///
    /// # Errors
    /// `ArgumentMismatch` if the slices differ in length, `TextTooLarge` if
    /// the texts add up to more than 10 240 bytes, `Config` if no usable key
    /// is set. Any element that cannot be parsed fails the whole batch.
    pub async fn translate_many<S: AsRef<str>>(
        &self,
        texts: &[S],
        from: &[Language],
        to: &[Language],
    ) -> Result<Vec<String>> {
        let reqs = zip_requests(texts, from, to)?;
        check_text_size(reqs.iter().map(|r| r.text))?;
        let api_key = self.config.validate_configured()?;

        let url = self.request_url(&batch_query(api_key, &reqs));

        let result = async {
            let body = self.fetch(&url).await?;
            extract_nested_string_array(&body, RESPONSE_LABEL, TRANSLATION_LABEL)
        }
        .await;

        if let Ok(translations) = &result {
            if translations.len() != reqs.len() {
                warn!(
                    sent = reqs.len(),
                    received = translations.len(),
                    "Batch response size differs from request"
                );
            }
        }

        self.record(
            "translate_many",
            json!({
                "count": reqs.len(),
                "bytes": reqs.iter().map(|r| r.text.len()).sum::<usize>(),
            }),
            &result,
        );
        result
    }

    /// GET `url` and return the decoded body. Anything but 200 is a
    /// `Service` error carrying the body.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let request = HttpRequest::get(url, self.config.referrer.as_deref());

        debug!(url = %redact_key(url), "GET");

        let raw = self.transport.get(&request).await?;
        let body = read_body(raw.body.as_slice())?;

        debug!(status = raw.status, body_len = body.len(), "Response");

        if raw.status != 200 {
            warn!(status = raw.status, "Apertium returned an error");
            return Err(TranslateError::service(raw.status, body));
        }
        Ok(body)
    }

    fn request_url(&self, query: &str) -> String {
        format!("{}?{}", self.config.service_url.trim_end_matches('?'), query)
    }

    fn record<R>(&self, operation: &str, context: serde_json::Value, result: &Result<R>) {
        let Some(logger) = &self.logger else {
            return;
        };
        match result {
            Ok(_) => logger.info(operation, "ok", context),
            Err(e) => logger.error(operation, e.to_string(), context),
        }
    }
}

/// `url` with the value of its `key` parameter masked.
fn redact_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let params: Vec<&str> = query
        .split('&')
        .map(|param| if param.starts_with("key=") { "key=***" } else { param })
        .collect();
    format!("{base}?{}", params.join("&"))
}
