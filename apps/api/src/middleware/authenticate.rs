//! # 認証ゲート
//!
//! `Authorization: Bearer <token>` を検証し、成功時は [`AuthUser`] を
//! リクエスト extensions に格納して次段へ渡す。失敗時は 401 の `AppError` で
//! 終端し、ハンドラは呼ばれない。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! Router::new()
//!     .route("/api/v1/carts", get(show_cart))
//!     .route_layer(from_fn_with_state(gate_state, authenticate))
//! ```
//!
//! `route_layer` で組み込むため、パスやメソッドが一致しないリクエストには適用されない。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use sushee_shared::AppError;

use crate::{
    auth_util::{AuthUser, AuthUtil},
    error::abort_with_error,
};

/// 認証ゲートの状態
#[derive(Clone)]
pub struct AuthGateState {
    pub auth_util: Arc<dyn AuthUtil>,
}

/// Authorization ヘッダーから Bearer トークンを取り出す
///
/// ヘッダーがない、形式が違う、トークンが空の場合は `None` を返す。
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// 認証ゲート
pub async fn authenticate(
    State(state): State<AuthGateState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(request.headers()) else {
        return abort_with_error(AppError::unauthorized(
            "missing or malformed authorization header",
        ));
    };

    let user: AuthUser = match state.auth_util.verify(&token).await {
        Ok(user) => user,
        Err(error) => {
            tracing::debug!(status = error.status_code, "認証ゲートで拒否しました");
            return abort_with_error(error);
        }
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sushee_domain::user::UserId;
    use tower::ServiceExt;

    use super::*;
    use crate::response::success_data;

    const VALID_TOKEN: &str = "valid-token";

    /// 固定トークンだけを受け付けるスタブ
    struct StubAuthUtil;

    #[async_trait]
    impl AuthUtil for StubAuthUtil {
        async fn verify(&self, access_token: &str) -> Result<AuthUser, AppError> {
            if access_token == VALID_TOKEN {
                Ok(AuthUser {
                    user_id:      UserId::new(7),
                    access_token: access_token.to_string(),
                })
            } else {
                Err(AppError::unauthorized("invalid or expired token"))
            }
        }
    }

    fn create_test_app(calls: Arc<AtomicUsize>) -> Router {
        let state = AuthGateState {
            auth_util: Arc::new(StubAuthUtil),
        };

        Router::new()
            .route(
                "/test",
                get(move |user: AuthUser| {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        success_data(user.user_id)
                    }
                }),
            )
            .route_layer(from_fn_with_state(state, authenticate))
    }

    fn request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::GET).uri("/test");
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_有効なトークンはハンドラに到達しユーザーが渡される() {
        // Given
        let calls = Arc::new(AtomicUsize::new(0));
        let sut = create_test_app(calls.clone());

        // When
        let response = sut
            .oneshot(request(Some("Bearer valid-token")))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"data":7}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[case::ヘッダーなし(None, "missing or malformed authorization header")]
    #[case::basic認証(Some("Basic dXNlcjpwYXNz"), "missing or malformed authorization header")]
    #[case::空トークン(Some("Bearer "), "missing or malformed authorization header")]
    #[case::不正トークン(Some("Bearer forged"), "invalid or expired token")]
    #[tokio::test]
    async fn test_認証に失敗するとハンドラを呼ばず401を返す(
        #[case] authorization: Option<&str>,
        #[case] message: &str,
    ) {
        // Given
        let calls = Arc::new(AtomicUsize::new(0));
        let sut = create_test_app(calls.clone());

        // When
        let response = sut.oneshot(request(authorization)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: AppError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error, AppError::unauthorized(message));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_extract_bearer_tokenは前後の空白を除く() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer  abc ".parse().unwrap());

        assert_eq!(extract_bearer_token(&headers), Some("abc".to_string()));
    }
}
