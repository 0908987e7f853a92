use apertium_translator::{Language, TranslateError, Translator, TranslatorConfig};
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const KEY: &str = "abcdefghijklmnopqrstuvwxyz0";

#[derive(Default)]
struct MockApertium {
    hits: AtomicUsize,
    last_referer: Mutex<Option<String>>,
    last_content_type: Mutex<Option<String>>,
}

fn lookup(text: &str, pair: &str) -> Option<&'static str> {
    match (text, pair) {
        ("Hello", "en|es") => Some("Hola"),
        ("Fox", "en|ca") => Some("Guineu"),
        ("The quick brown fox", "en|es") => Some(" El zorro marrón rápido "),
        _ => None,
    }
}

fn fragment(translated: &str) -> serde_json::Value {
    serde_json::json!({
        "responseData": { "translatedText": translated },
        "responseDetails": null,
        "responseStatus": 200
    })
}

async fn handle_translate(
    State(mock): State<Arc<MockApertium>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> (StatusCode, String) {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_referer.lock().unwrap() = headers
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *mock.last_content_type.lock().unwrap() = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let query = query.unwrap_or_default();
    let mut key = None;
    let mut texts = Vec::new();
    let mut pairs = Vec::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match name.as_ref() {
            "key" => key = Some(value.into_owned()),
            "q" => texts.push(value.into_owned()),
            "langpair" => pairs.push(value.into_owned()),
            _ => {}
        }
    }

    if key.as_deref() != Some(KEY) {
        return (StatusCode::FORBIDDEN, "quota exceeded".to_string());
    }

    let mut fragments = Vec::new();
    for (text, pair) in texts.iter().zip(&pairs) {
        match lookup(text, pair) {
            Some(translated) => fragments.push(fragment(translated)),
            None => return (StatusCode::BAD_REQUEST, format!("unsupported pair {pair}")),
        }
    }

    // The service prefixes its bodies with a zero-width no-break space.
    let body = if fragments.len() == 1 {
        fragments.remove(0)
    } else {
        serde_json::json!({ "responseData": fragments, "responseStatus": 200 })
    };
    (StatusCode::OK, format!("\u{FEFF}{body}\n"))
}

async fn spawn_mock() -> (String, Arc<MockApertium>) {
    let mock = Arc::new(MockApertium::default());
    let app = Router::new()
        .route("/json/translate", get(handle_translate))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/json/translate"), mock)
}

fn config_for(service_url: &str, api_key: &str) -> TranslatorConfig {
    TranslatorConfig {
        service_url: service_url.to_string(),
        timeout_secs: Some(10),
        ..TranslatorConfig::configure(api_key, Some("http://example.org/app".to_string()))
    }
}

#[tokio::test]
async fn test_translate_one_over_http() {
    let (url, mock) = spawn_mock().await;
    let translator = Translator::new(config_for(&url, KEY)).unwrap();

    let out = translator
        .translate_one("The quick brown fox", Language::English, Language::Spanish)
        .await
        .unwrap();

    assert_eq!(out, "El zorro marrón rápido");
    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        mock.last_referer.lock().unwrap().as_deref(),
        Some("http://example.org/app")
    );
    assert_eq!(
        mock.last_content_type.lock().unwrap().as_deref(),
        Some("text/plain; charset=UTF-8")
    );
}

#[tokio::test]
async fn test_translate_many_over_http() {
    let (url, mock) = spawn_mock().await;
    let translator = Translator::new(config_for(&url, KEY)).unwrap();

    let out = translator
        .translate_many(
            &["Hello", "Fox"],
            &[Language::English, Language::English],
            &[Language::Spanish, Language::Catalan],
        )
        .await
        .unwrap();

    assert_eq!(out, vec!["Hola", "Guineu"]);
    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_service_error_over_http() {
    let (url, mock) = spawn_mock().await;
    let translator = Translator::new(config_for(&url, "zyxwvutsrqponmlkjihgfedcba9")).unwrap();

    let err = translator
        .translate_one("Hello", Language::English, Language::Spanish)
        .await
        .unwrap_err();

    match &err {
        TranslateError::Service { status, body } => {
            assert_eq!(*status, 403);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_validation_failures_never_reach_server() {
    let (url, mock) = spawn_mock().await;

    let unconfigured = Translator::new(TranslatorConfig {
        service_url: url.clone(),
        ..TranslatorConfig::default()
    })
    .unwrap();
    let err = unconfigured
        .translate_one("Hello", Language::English, Language::Spanish)
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Config { .. }));

    let translator = Translator::new(config_for(&url, KEY)).unwrap();
    let too_big = "x".repeat(10_241);
    let err = translator
        .translate_one(&too_big, Language::English, Language::Spanish)
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::TextTooLarge { .. }));

    let err = translator
        .translate_many(&["Hello"], &[Language::English], &[])
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::ArgumentMismatch { .. }));

    assert_eq!(mock.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let translator =
        Translator::new(config_for(&format!("http://{addr}/json/translate"), KEY)).unwrap();
    let err = translator
        .translate_one("Hello", Language::English, Language::Spanish)
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::Http(_)));
}

// ────────────────────────────────────────────────────────────────
// Live test (needs APERTIUM_API_KEY)
// ────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore = "requires APERTIUM_API_KEY"]
async fn test_live_translate_one() {
    let key = std::env::var("APERTIUM_API_KEY").expect("APERTIUM_API_KEY not set");
    let translator = Translator::new(TranslatorConfig::configure(key, None)).unwrap();

    let out = translator
        .translate_one(
            "The quick brown fox jumps over the lazy dog.",
            Language::English,
            Language::Spanish,
        )
        .await
        .unwrap();

    println!("Translation: {out}");
    assert!(!out.is_empty());
}
