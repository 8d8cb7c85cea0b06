/// Analysis API handlers
use std::io::Write;
use std::path::Path;

use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::reject;
use super::ApiResult;
use super::AppState;
use crate::analyzer::analyze_detailed;
use crate::api::types::*;
use crate::document::extract_text;
use crate::document::sanitize_filename;
use crate::document::DocumentKind;
use crate::Result;

const MSG_UNSUPPORTED: &str = "不支援的檔案格式，請上傳 .docx 或 .txt 檔案。";
const MSG_MISSING_INPUT: &str = "請輸入文字或選擇一個檔案。";

/// An uploaded file part
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Analyze JSON text (POST /api/analyze)
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<AnalyzeResponse> {
    info!("POST /api/analyze - {} bytes", req.text.len());

    if req.text.trim().is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, MSG_MISSING_INPUT));
    }

    let analysis = analyze_detailed(&req.text, &state.lexicon);
    Ok(Json(ApiResponse::success(AnalyzeResponse::new(
        analysis,
        AnalysisSource::Text,
    ))))
}

/// Analyze an uploaded file or form text (POST /analyze)
///
/// A non-empty `file` part takes precedence over the `text` part.
pub async fn analyze_form(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<AnalyzeResponse> {
    let mut upload: Option<Upload> = None;
    let mut text: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart request: {}", e);
                return Err(reject(StatusCode::BAD_REQUEST, format!("無效的表單資料: {e}")));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    reject::<AnalyzeResponse>(StatusCode::BAD_REQUEST, format!("無法讀取上傳檔案: {e}"))
                })?;
                if !filename.is_empty() {
                    upload = Some(Upload {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "text" => {
                let value = field.text().await.map_err(|e| {
                    reject::<AnalyzeResponse>(StatusCode::BAD_REQUEST, format!("無法讀取輸入文字: {e}"))
                })?;
                text = Some(value);
            }
            _ => {}
        }
    }

    if let Some(upload) = upload {
        return analyze_upload(&state, upload).await;
    }

    match text {
        Some(text) if !text.trim().is_empty() => {
            info!("POST /analyze - text, {} bytes", text.len());
            let analysis = analyze_detailed(&text, &state.lexicon);
            Ok(Json(ApiResponse::success(AnalyzeResponse::new(
                analysis,
                AnalysisSource::Text,
            ))))
        }
        _ => Err(reject(StatusCode::BAD_REQUEST, MSG_MISSING_INPUT)),
    }
}

async fn analyze_upload(state: &AppState, upload: Upload) -> ApiResult<AnalyzeResponse> {
    info!(
        "POST /analyze - file '{}', {} bytes",
        upload.filename,
        upload.bytes.len()
    );

    let Some(kind) = DocumentKind::from_filename(&upload.filename) else {
        warn!("Rejected upload with unsupported type: {}", upload.filename);
        return Err(reject(StatusCode::BAD_REQUEST, MSG_UNSUPPORTED));
    };

    let upload_dir = state.upload_dir.clone();
    let extracted =
        tokio::task::spawn_blocking(move || extract_upload(&upload_dir, &upload, kind)).await;

    let text = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            error!("Failed to process upload: {}", e);
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            return Err(reject(status, format!("檔案處理時發生錯誤: {e}")));
        }
        Err(e) => {
            error!("Upload processing task failed: {}", e);
            return Err(reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("檔案處理時發生錯誤: {e}"),
            ));
        }
    };

    let analysis = analyze_detailed(&text, &state.lexicon);
    Ok(Json(ApiResponse::success(AnalyzeResponse::new(
        analysis,
        AnalysisSource::File,
    ))))
}

/// Persist the upload to a temporary file, extract its text and delete it again
fn extract_upload(upload_dir: &Path, upload: &Upload, kind: DocumentKind) -> Result<String> {
    std::fs::create_dir_all(upload_dir)?;

    let stem = sanitize_filename(&upload.filename);
    let mut file = tempfile::Builder::new()
        .prefix(&format!("{stem}-"))
        .suffix(&format!(".{}", kind.extension()))
        .tempfile_in(upload_dir)?;
    file.write_all(&upload.bytes)?;
    file.flush()?;

    let result = extract_text(file.path(), kind);
    if let Err(e) = file.close() {
        warn!("Failed to delete temporary upload: {}", e);
    }
    result
}
