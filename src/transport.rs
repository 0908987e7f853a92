//! HTTP plumbing: the request shape the client sends, the transport seam,
//! and decoding of the raw response body.

use crate::config::TranslatorConfig;
use crate::error::{Result, TranslateError};
use std::future::Future;
use std::io::BufRead;
use std::time::Duration;

const ENCODING: &str = "UTF-8";

/// Zero-width no-break space the upstream service leaves in its bodies.
const BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    /// A GET carrying the charset headers and, if given, a referer.
    pub fn get(url: impl Into<String>, referrer: Option<&str>) -> Self {
        let mut headers = Vec::with_capacity(3);
        if let Some(referrer) = referrer {
            headers.push(("referer", referrer.to_string()));
        }
        headers.push(("Content-Type", format!("text/plain; charset={ENCODING}")));
        headers.push(("Accept-Charset", ENCODING.to_string()));
        Self {
            url: url.into(),
            headers,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one GET and hands back status and body. The response is owned by
/// the call, so the connection is released on every return path.
pub trait Transport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> impl Future<Output = Result<RawResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &HttpRequest) -> Result<RawResponse> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TranslateError::stream(format!("Failed to read response body: {e}")))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Read a body line by line, dropping line terminators and every stray BOM.
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
pub fn read_body(mut reader: impl BufRead) -> Result<String> {
    let mut output = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| TranslateError::stream(e.to_string()))?;
        if read == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&line);
        let text = text.trim_end_matches('\n').trim_end_matches('\r');
        output.extend(text.chars().filter(|&c| c != BOM));
    }
    Ok(output)
}
