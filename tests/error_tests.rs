// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use pocketfit::error::AppError;

#[test]
fn test_error_codes() {
    assert_eq!(AppError::NotFound("x".to_string()).code(), "not_found");
    assert_eq!(AppError::BadRequest("x".to_string()).code(), "bad_request");
    assert_eq!(
        AppError::Internal(anyhow::anyhow!("boom")).code(),
        "internal_error"
    );
}

#[tokio::test]
async fn test_error_status_and_body() {
    let response = AppError::NotFound("Activity 7 not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "Activity 7 not found");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let response = AppError::Internal(anyhow::anyhow!("secret")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}
