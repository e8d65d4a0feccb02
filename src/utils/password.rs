//! 密码哈希
//!
//! 服务层只依赖 [`CredentialHasher`]，默认实现为 Argon2id。

use crate::config::Argon2Config;
use crate::errors::{GradebookError, Result};
use crate::utils::random_code::generate_random_code;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 可替换的密码哈希能力
///
/// 实现必须为每次调用生成随机盐，并以常量时间比较哈希结果。
pub trait CredentialHasher: Send + Sync {
    /// 哈希密码
    fn hash(&self, password: &str) -> Result<String>;

    /// 验证密码，哈希格式错误视为不匹配
    fn verify(&self, password: &str, hash: &str) -> bool;

    /// 未知账号时用于验证的占位哈希，使两种失败耗时一致
    fn dummy_hash(&self) -> &str;
}

pub struct Argon2Hasher {
    params: Params,
    dummy_hash: String,
}

impl Argon2Hasher {
    pub fn new(config: &Argon2Config) -> Result<Self> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| GradebookError::validation(format!("Argon2 参数错误: {e}")))?;

        let mut hasher = Self {
            params,
            dummy_hash: String::new(),
        };
        hasher.dummy_hash = hasher.hash(&generate_random_code(32))?;
        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| GradebookError::password_hash(format!("密码哈希失败: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        // 参数从哈希串中读取，调整配置不影响旧密码
        match PasswordHash::new(hash) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }

    fn dummy_hash(&self) -> &str {
        &self.dummy_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_config() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new(&light_config()).unwrap();
        let hash = hasher.hash("pw1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pw1", &hash));
        assert!(!hasher.verify("pw2", &hash));
    }

    #[test]
    fn test_salt_is_random_per_call() {
        let hasher = Argon2Hasher::new(&light_config()).unwrap();
        let first = hasher.hash("pw1").unwrap();
        let second = hasher.hash("pw1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        let hasher = Argon2Hasher::new(&light_config()).unwrap();
        assert!(!hasher.verify("pw1", "not-a-hash"));
    }

    #[test]
    fn test_dummy_hash_is_valid_argon2() {
        let hasher = Argon2Hasher::new(&light_config()).unwrap();
        assert!(PasswordHash::new(hasher.dummy_hash()).is_ok());
        assert!(!hasher.verify("pw1", hasher.dummy_hash()));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = Argon2Config {
            memory_cost: 1,
            time_cost: 0,
            parallelism: 1,
        };
        assert!(Argon2Hasher::new(&config).is_err());
    }
}
