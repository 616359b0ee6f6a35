//! # パスワードハッシュ
//!
//! Argon2id（crate のデフォルトパラメータ）でハッシュ化と検証を行う。

use anyhow::anyhow;
use argon2::{
    Argon2,
    PasswordHasher as _,
    PasswordVerifier as _,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};

/// 最小パスワード長
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// パスワードをハッシュ化し、PHC 文字列で返す
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("パスワードのハッシュ化に失敗しました: {e}"))?;

    Ok(hash.to_string())
}

/// パスワードがハッシュと一致するか
///
/// # Errors
///
/// - ハッシュが PHC 文字列として不正な場合
pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(hash).map_err(|e| anyhow!("不正なハッシュ形式です: {e}"))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_正しいパスワードで検証が成功する() {
        let hash = hash_password("password123").unwrap();

        assert!(verify_password("password123", &hash).unwrap());
    }

    #[test]
    fn test_誤ったパスワードで検証が失敗する() {
        let hash = hash_password("password123").unwrap();

        assert!(!verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn test_同じパスワードでもハッシュは毎回異なる() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_ハッシュはargon2idのphc文字列になる() {
        let hash = hash_password("password123").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(parsed.salt.is_some());
    }

    #[test]
    fn test_不正なハッシュ形式はエラー() {
        assert!(verify_password("password123", "invalid-hash").is_err());
    }
}
