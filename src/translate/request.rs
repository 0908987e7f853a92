use crate::error::{Result, TranslateError};
use crate::language::Language;
use url::form_urlencoded;

/// Upper bound on the UTF-8 size of the text sent in one request.
pub const MAX_TEXT_BYTES: usize = 10_240;

const PARAM_API_KEY: &str = "key=";
const PARAM_LANG_PAIR: &str = "&langpair=";
const PARAM_TEXT: &str = "&q=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    pub from: Language,
    pub to: Language,
}

impl<'a> TranslationRequest<'a> {
    pub fn new(text: &'a str, from: Language, to: Language) -> Self {
        Self { text, from, to }
    }

    fn lang_pair(&self) -> String {
        format!(
            "{}{}{}",
            encode(self.from.code()),
            encode("|"),
            encode(self.to.code())
        )
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `key=..&langpair=..&q=..`
pub fn single_query(api_key: &str, req: &TranslationRequest<'_>) -> String {
    format!(
        "{PARAM_API_KEY}{}{PARAM_LANG_PAIR}{}{PARAM_TEXT}{}",
        encode(api_key),
        req.lang_pair(),
        encode(req.text)
    )
}

/// `key=..` then one `&q=..&langpair=..` group per request, in order.
pub fn batch_query(api_key: &str, reqs: &[TranslationRequest<'_>]) -> String {
    let mut query = format!("{PARAM_API_KEY}{}", encode(api_key));
    for req in reqs {
        query.push_str(PARAM_TEXT);
        query.push_str(&encode(req.text));
        query.push_str(PARAM_LANG_PAIR);
        query.push_str(&req.lang_pair());
    }
    query
}

/// Fails when the combined UTF-8 size of `texts` exceeds [`MAX_TEXT_BYTES`].
pub fn check_text_size<'a>(texts: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let size: usize = texts.into_iter().map(str::len).sum();
    if size > MAX_TEXT_BYTES {
        return Err(TranslateError::TextTooLarge {
            size,
            limit: MAX_TEXT_BYTES,
        });
    }
    Ok(())
}

/// Zip parallel slices into requests, failing if their lengths differ.
pub fn zip_requests<'a, S: AsRef<str>>(
    texts: &'a [S],
    from: &[Language],
    to: &[Language],
) -> Result<Vec<TranslationRequest<'a>>> {
    if texts.len() != from.len() || texts.len() != to.len() {
        return Err(TranslateError::argument_mismatch(format!(
            "Source/target language array sizes ({}, {}) do not match text array size ({})",
            from.len(),
            to.len(),
            texts.len()
        )));
    }
    Ok(texts
        .iter()
        .zip(from)
        .zip(to)
        .map(|((text, &from), &to)| TranslationRequest::new(text.as_ref(), from, to))
        .collect())
}

/// Render values as a JSON-style array literal, `["a","b"]`, skipping
/// missing and empty entries. Values are neither escaped nor URL-encoded.
pub fn join_quoted<I, S>(values: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let items: Vec<String> = values
        .into_iter()
        .flatten()
        .filter(|v| !v.as_ref().is_empty())
        .map(|v| format!("\"{}\"", v.as_ref()))
        .collect();
    format!("[{}]", items.join(","))
}
