//! ユーザープロフィールユースケース

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use sushee_domain::{
    DomainError,
    user::{ProfileChanges, User},
};

use super::store::UserStore;
use crate::{auth_util::AuthUser, error::Failure};

/// プロフィール更新の入力
///
/// 指定しなかったフィールドは変更しない。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    #[serde(default)]
    pub full_name:       Option<String>,
    #[serde(default)]
    pub phone:           Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// ユーザープロフィールユースケース
#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn get_profile(&self, user: &AuthUser) -> Result<User, Failure>;

    async fn update_profile(
        &self,
        user: &AuthUser,
        input: UpdateProfileInput,
    ) -> Result<User, Failure>;
}

pub struct UserUseCaseImpl {
    users: Arc<UserStore>,
}

impl UserUseCaseImpl {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self { users }
    }

    async fn find(&self, user: &AuthUser) -> Result<User, DomainError> {
        self.users
            .find(user.user_id)
            .await
            .ok_or_else(|| DomainError::not_found("user", user.user_id))
    }
}

#[async_trait]
impl UserUseCase for UserUseCaseImpl {
    async fn get_profile(&self, user: &AuthUser) -> Result<User, Failure> {
        Ok(self.find(user).await?)
    }

    async fn update_profile(
        &self,
        user: &AuthUser,
        input: UpdateProfileInput,
    ) -> Result<User, Failure> {
        let current = self.find(user).await?;

        let updated = current.with_profile(ProfileChanges {
            full_name:       input.full_name,
            phone:           input.phone,
            profile_picture: input.profile_picture,
        })?;

        Ok(self.users.update(updated).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use sushee_domain::user::{Email, UserId};
    use sushee_shared::AppError;

    use super::*;

    async fn setup() -> (UserUseCaseImpl, AuthUser) {
        let users = Arc::new(UserStore::new());
        let user = User::new(
            users.next_id(),
            Email::new("taro@example.com").unwrap(),
            "taro",
            "Taro Yamada",
            None,
            Utc::now(),
        )
        .unwrap();
        users.insert(user.clone(), String::new()).await.unwrap();

        let auth_user = AuthUser {
            user_id:      user.id,
            access_token: "token".to_string(),
        };
        (UserUseCaseImpl::new(users), auth_user)
    }

    #[tokio::test]
    async fn test_プロフィールを取得できる() {
        let (sut, auth_user) = setup().await;

        let user = sut.get_profile(&auth_user).await.unwrap();

        assert_eq!(user.username, "taro");
    }

    #[tokio::test]
    async fn test_指定したフィールドだけ更新される() {
        let (sut, auth_user) = setup().await;

        let updated = sut
            .update_profile(
                &auth_user,
                UpdateProfileInput {
                    phone: Some("090-0000-0000".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name, "Taro Yamada");
        assert_eq!(updated.phone.as_deref(), Some("090-0000-0000"));
        assert_eq!(sut.get_profile(&auth_user).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_存在しないユーザーは404() {
        let (sut, _) = setup().await;
        let ghost = AuthUser {
            user_id:      UserId::new(999),
            access_token: "token".to_string(),
        };

        let error = sut.get_profile(&ghost).await.unwrap_err().into_app_error();

        assert_eq!(error, AppError::not_found("user not found"));
    }
}
