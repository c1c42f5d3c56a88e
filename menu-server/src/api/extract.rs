//! 请求体提取器
//!
//! [`ValidJson`] 包装 axum 的 `Json`：请求体错误返回统一的
//! [`AppError`] (400 + `{code, message, details}`)，而不是 axum 默认的
//! 纯文本 415/422。

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};

/// JSON body whose rejections use the unified error body
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => data_error(&err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            AppError::with_message(ErrorCode::InvalidFormat, err.body_text())
        }
        other => AppError::invalid_request(other.body_text()),
    }
}

/// Classify a deserialization failure.
///
/// axum renders these as `<prefix>: <path>: <serde message>`, the path being
/// absent for errors at the document root (e.g. a missing field).
fn data_error(text: &str) -> AppError {
    let detail = text.split_once(": ").map_or(text, |(_, rest)| rest);
    let (path, reason) = match detail.split_once(": ") {
        Some((path, reason)) if !path.contains(' ') => (Some(path), reason),
        _ => (None, detail),
    };

    if reason.starts_with("missing field") {
        let field = quoted(reason).unwrap_or_default();
        return AppError::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field);
    }

    let field = path.map(field_name);
    let code = match field {
        Some("category") => ErrorCode::ProductCategoryInvalid,
        _ => ErrorCode::ValidationFailed,
    };
    let err = AppError::with_message(code, reason.to_string());
    match field {
        Some(field) => err.with_detail("field", field),
        None => err,
    }
}

/// `days[0]` → `days`, `a.b` → `a`
fn field_name(path: &str) -> &str {
    path.split(['[', '.']).next().unwrap_or(path)
}

/// First backtick-quoted token in a serde message
fn quoted(reason: &str) -> Option<&str> {
    let (_, rest) = reason.split_once('`')?;
    rest.split_once('`').map(|(token, _)| token)
}
