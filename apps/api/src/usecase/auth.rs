//! 認証ユースケース

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sushee_domain::{
    DomainError,
    clock::Clock,
    user::{Email, User},
};
use sushee_shared::AppError;

use super::{
    password::{MIN_PASSWORD_LENGTH, hash_password, verify_password},
    store::UserStore,
};
use crate::{
    auth_util::{AuthUser, AuthUtil},
    error::Failure,
};

/// ログインの入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub email:    String,
    pub password: String,
}

/// ユーザー登録の入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email:     String,
    pub username:  String,
    pub full_name: String,
    #[serde(default)]
    pub phone:     Option<String>,
    pub password:  String,
}

/// トークン更新の入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshInput {
    pub refresh_token: String,
}

/// 発行したトークンの組
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token:  String,
    pub refresh_token: String,
}

/// 認証ユースケース
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    async fn login(&self, input: LoginInput) -> Result<TokenPair, Failure>;

    async fn register(&self, input: RegisterInput) -> Result<User, Failure>;

    async fn logout(&self, user: &AuthUser) -> Result<(), Failure>;

    async fn refresh(&self, user: &AuthUser, input: RefreshInput) -> Result<TokenPair, Failure>;
}

/// インメモリの認証ユースケース
pub struct AuthUseCaseImpl {
    users: Arc<UserStore>,
    clock: Arc<dyn Clock>,
}

impl AuthUseCaseImpl {
    pub fn new(users: Arc<UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }
}

fn invalid_credentials() -> Failure {
    DomainError::Unauthorized("invalid email or password".to_string()).into()
}

#[async_trait]
impl AuthUseCase for AuthUseCaseImpl {
    /// メールアドレスとパスワードで認証し、トークンを発行する
    ///
    /// ユーザーが存在しない場合とパスワード不一致は同じエラーにする。
    async fn login(&self, input: LoginInput) -> Result<TokenPair, Failure> {
        let email = Email::new(input.email).map_err(|_| invalid_credentials())?;

        let Some((user, password_hash)) = self.users.find_by_email(&email).await else {
            return Err(invalid_credentials());
        };

        if !verify_password(&input.password, &password_hash)? {
            return Err(invalid_credentials());
        }

        tracing::info!(user_id = %user.id, "ログインしました");
        Ok(self.users.issue_tokens(user.id).await)
    }

    /// ユーザーを登録する
    ///
    /// 1. メールアドレスとパスワード長を検証
    /// 2. User ドメインオブジェクト作成
    /// 3. パスワードをハッシュ化して保存（メールアドレス重複は Conflict）
    async fn register(&self, input: RegisterInput) -> Result<User, Failure> {
        let email = Email::new(input.email)?;

        if input.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            ))
            .into());
        }

        let user = User::new(
            self.users.next_id(),
            email,
            &input.username,
            &input.full_name,
            input.phone,
            self.clock.now(),
        )?;
        let password_hash = hash_password(&input.password)?;

        let user = self.users.insert(user, password_hash).await?;
        tracing::info!(user_id = %user.id, "ユーザーを登録しました");
        Ok(user)
    }

    async fn logout(&self, user: &AuthUser) -> Result<(), Failure> {
        self.users
            .revoke_tokens(user.user_id, &user.access_token)
            .await;
        Ok(())
    }

    /// リフレッシュトークンを消費して新しいトークンを発行する
    async fn refresh(&self, user: &AuthUser, input: RefreshInput) -> Result<TokenPair, Failure> {
        self.users
            .rotate_tokens(user.user_id, &user.access_token, &input.refresh_token)
            .await
            .ok_or_else(|| AppError::unauthorized("invalid refresh token").into())
    }
}

/// アクセストークンを [`UserStore`] で検証する認証ユーティリティ
pub struct SessionAuthUtil {
    users: Arc<UserStore>,
}

impl SessionAuthUtil {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthUtil for SessionAuthUtil {
    async fn verify(&self, access_token: &str) -> Result<AuthUser, AppError> {
        let user_id = self
            .users
            .user_for_access_token(access_token)
            .await
            .ok_or_else(|| AppError::unauthorized("invalid or expired token"))?;

        Ok(AuthUser {
            user_id,
            access_token: access_token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use sushee_domain::clock::FixedClock;

    use super::*;

    fn setup() -> (AuthUseCaseImpl, SessionAuthUtil) {
        let users = Arc::new(UserStore::new());
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
        ));
        (
            AuthUseCaseImpl::new(users.clone(), clock),
            SessionAuthUtil::new(users),
        )
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            email:     email.to_string(),
            username:  "taro".to_string(),
            full_name: "Taro Yamada".to_string(),
            phone:     None,
            password:  "password123".to_string(),
        }
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email:    email.to_string(),
            password: password.to_string(),
        }
    }

    async fn login(sut: &AuthUseCaseImpl, auth_util: &SessionAuthUtil) -> (AuthUser, TokenPair) {
        sut.register(register_input("taro@example.com"))
            .await
            .unwrap();
        let pair = sut
            .login(login_input("taro@example.com", "password123"))
            .await
            .unwrap();
        let user = auth_util.verify(&pair.access_token).await.unwrap();
        (user, pair)
    }

    #[tokio::test]
    async fn test_登録したユーザーでログインするとトークンが検証できる() {
        let (sut, auth_util) = setup();

        let (user, pair) = login(&sut, &auth_util).await;

        assert_eq!(user.access_token, pair.access_token);
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[tokio::test]
    async fn test_登録済みのメールアドレスは409() {
        let (sut, _) = setup();
        sut.register(register_input("taro@example.com"))
            .await
            .unwrap();

        let error = sut
            .register(register_input("TARO@example.com"))
            .await
            .unwrap_err()
            .into_app_error();

        assert_eq!(error, AppError::conflict("email is already registered"));
    }

    #[tokio::test]
    async fn test_短いパスワードは400() {
        let (sut, _) = setup();
        let input = RegisterInput {
            password: "short".to_string(),
            ..register_input("taro@example.com")
        };

        let error = sut.register(input).await.unwrap_err().into_app_error();

        assert_eq!(
            error,
            AppError::bad_request("password must be at least 8 characters")
        );
    }

    #[tokio::test]
    async fn test_パスワード不一致と未登録は同じ401() {
        let (sut, _) = setup();
        sut.register(register_input("taro@example.com"))
            .await
            .unwrap();

        let wrong_password = sut
            .login(login_input("taro@example.com", "wrongpassword"))
            .await
            .unwrap_err()
            .into_app_error();
        let unknown_user = sut
            .login(login_input("hanako@example.com", "password123"))
            .await
            .unwrap_err()
            .into_app_error();

        assert_eq!(wrong_password, AppError::unauthorized("invalid email or password"));
        assert_eq!(wrong_password, unknown_user);
    }

    #[tokio::test]
    async fn test_ログアウト後のトークンは無効() {
        let (sut, auth_util) = setup();
        let (user, pair) = login(&sut, &auth_util).await;

        sut.logout(&user).await.unwrap();

        let error = auth_util.verify(&pair.access_token).await.unwrap_err();
        assert_eq!(error, AppError::unauthorized("invalid or expired token"));
    }

    #[tokio::test]
    async fn test_リフレッシュで新しいトークンに置き換わる() {
        let (sut, auth_util) = setup();
        let (user, pair) = login(&sut, &auth_util).await;

        let refreshed = sut
            .refresh(
                &user,
                RefreshInput {
                    refresh_token: pair.refresh_token.clone(),
                },
            )
            .await
            .unwrap();

        assert!(auth_util.verify(&refreshed.access_token).await.is_ok());
        assert!(auth_util.verify(&pair.access_token).await.is_err());
    }

    #[tokio::test]
    async fn test_不正なリフレッシュトークンは401() {
        let (sut, auth_util) = setup();
        let (user, _) = login(&sut, &auth_util).await;

        let error = sut
            .refresh(
                &user,
                RefreshInput {
                    refresh_token: "forged".to_string(),
                },
            )
            .await
            .unwrap_err()
            .into_app_error();

        assert_eq!(error, AppError::unauthorized("invalid refresh token"));
    }
}
