//! 凭据存储接口

use std::collections::HashMap;
use std::sync::Mutex;

use crate::app::error::types::{LauncherError, Result};

/// 服务器凭据的服务名前缀
pub const SERVICE_PREFIX: &str = "FactorioLauncher.server";
/// 凭据属性名
pub const SECRET_ATTRIBUTE: &str = "password";

/// 服务器凭据的服务名：`{前缀}:{服务器名}`
pub fn credential_service(server_name: &str) -> String {
    format!("{SERVICE_PREFIX}:{server_name}")
}

/// 按服务器名读写密码的存储
///
/// 查不到或查询出错都返回 `None`，不视为错误。
pub trait CredentialStore {
    /// 读取密码
    fn get(&self, server_name: &str) -> Option<String>;

    /// 写入或覆盖密码
    fn set(&self, server_name: &str, secret: &str) -> Result<()>;

    /// 删除密码，不存在时也返回成功
    fn delete(&self, server_name: &str) -> Result<()>;
}

/// 内存中的凭据存储
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    secrets: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 已保存的凭据数量
    pub fn len(&self) -> usize {
        self.secrets.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, server_name: &str) -> Option<String> {
        let secrets = self.secrets.lock().ok()?;
        secrets.get(&credential_service(server_name)).cloned()
    }

    fn set(&self, server_name: &str, secret: &str) -> Result<()> {
        let mut secrets = self.secrets.lock().map_err(|_| {
            LauncherError::Credential("store lock poisoned".to_string())
        })?;
        secrets.insert(
            credential_service(server_name),
            secret.to_string(),
        );
        Ok(())
    }

    fn delete(&self, server_name: &str) -> Result<()> {
        let mut secrets = self.secrets.lock().map_err(|_| {
            LauncherError::Credential("store lock poisoned".to_string())
        })?;
        secrets.remove(&credential_service(server_name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_key_format() {
        assert_eq!(
            credential_service("My Server"),
            "FactorioLauncher.server:My Server"
        );
    }

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get("x"), None);

        store.set("x", "p").unwrap();
        store.set("x", "q").unwrap();
        assert_eq!(store.get("x").as_deref(), Some("q"));
        assert_eq!(store.len(), 1);

        store.delete("x").unwrap();
        store.delete("x").unwrap();
        assert_eq!(store.get("x"), None);
        assert!(store.is_empty());
    }
}
