//! HTTP API tests driving the router in-process

use std::sync::Arc;

use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use emolex::api::build_app;
use emolex::api::AppState;
use emolex::Emotion;
use emolex::Lexicon;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "emolex-test-boundary";
const BODY_LIMIT: usize = 1024 * 1024;

fn test_app(upload_dir: &std::path::Path) -> Router {
    let lexicon = Lexicon::from_entries([
        ('怒', vec![Emotion::Anger]),
        ('喜', vec![Emotion::Joy, Emotion::Trust]),
    ]);
    build_app(AppState::new(Arc::new(lexicon), upload_dir), BODY_LIMIT, false)
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_form(app: Router, parts: &[Part<'_>]) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::get("/api/health").body(Body::empty()).unwrap();
    let (status, json) = send(test_app(dir.path()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "healthy");
    assert_eq!(json["data"]["lexicon_loaded"], true);
}

#[tokio::test]
async fn test_index_page() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::get("/").body(Body::empty()).unwrap();
    let response = test_app(dir.path()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_json_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::post("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text": "我很怒，也很喜悅！"}"#))
        .unwrap();
    let (status, json) = send(test_app(dir.path()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["emotions"],
        serde_json::json!({ "anger": 1, "joy": 1, "trust": 1 })
    );
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["characters_analyzed"], 7);
    assert_eq!(json["data"]["source"], "text");
    assert!(json["data"].get("message").is_none());
}

#[tokio::test]
async fn test_json_analyze_blank_text_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::post("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text": "   "}"#))
        .unwrap();
    let (status, json) = send(test_app(dir.path()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_form_text() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(test_app(dir.path()), &[Part::Text("text", "怒怒喜")]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["emotions"]["anger"], 2);
    assert_eq!(json["data"]["emotions"]["joy"], 1);
}

#[tokio::test]
async fn test_form_text_without_emotions_has_message() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(test_app(dir.path()), &[Part::Text("text", "Hello 123!")]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["emotions"], serde_json::json!({}));
    assert!(json["data"]["message"].is_string());
}

#[tokio::test]
async fn test_form_without_input_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(test_app(dir.path()), &[Part::Text("text", "  ")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_form_txt_upload_is_analyzed_and_removed() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(
        test_app(dir.path()),
        &[
            Part::Text("text", "喜"),
            Part::File("file", "mood.txt", "今天很怒".as_bytes()),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["source"], "file");
    assert_eq!(json["data"]["emotions"], serde_json::json!({ "anger": 1 }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_form_empty_filename_falls_back_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(
        test_app(dir.path()),
        &[Part::File("file", "", b""), Part::Text("text", "喜")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["source"], "text");
    assert_eq!(json["data"]["emotions"]["trust"], 1);
}

#[tokio::test]
async fn test_form_unsupported_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(
        test_app(dir.path()),
        &[Part::File("file", "report.pdf", b"%PDF-1.4")],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_form_corrupt_docx_is_server_error_and_removed() {
    let dir = tempfile::tempdir().unwrap();
    let (status, json) = post_form(
        test_app(dir.path()),
        &[Part::File("file", "broken.docx", b"not a zip archive")],
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_lexicon_stats() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::get("/api/lexicon").body(Body::empty()).unwrap();
    let (status, json) = send(test_app(dir.path()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["characters"], 2);
    assert_eq!(json["data"]["label_assignments"], 3);
    assert_eq!(json["data"]["characters_per_emotion"]["trust"], 1);
}
