//! JSON response envelope shared by the assessment endpoints.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::input::InputError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// `{success, data}` on success, `{success, error, timestamp}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success {
        success: bool,
        data: T,
    },
    Failure {
        success: bool,
        error: ErrorBody,
        timestamp: String,
    },
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            success: true,
            data,
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            success: false,
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn from_result(result: Result<T, InputError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.code(), err.to_string()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
