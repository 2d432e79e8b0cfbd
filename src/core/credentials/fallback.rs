//! 带回退的凭据存储

use super::keyring_store::KeyringCredentialStore;
use super::store::{CredentialStore, MemoryCredentialStore};
use crate::app::error::types::Result;

/// 启动时选定的凭据存储
///
/// 钥匙串不可用时（例如没有 Secret Service）退回进程内存储，
/// 此时密码只在本次运行中有效。
#[derive(Debug)]
pub enum SystemCredentialStore {
    /// 系统钥匙串
    Keyring(KeyringCredentialStore),
    /// 进程内存储
    Memory(MemoryCredentialStore),
}

impl SystemCredentialStore {
    /// 探测钥匙串一次并选择存储
    pub fn detect() -> Self {
        let keyring = KeyringCredentialStore::new();
        if keyring.is_available() {
            Self::Keyring(keyring)
        } else {
            tracing::warn!(
                "System keyring unavailable, server passwords will only be kept for this session"
            );
            Self::Memory(MemoryCredentialStore::new())
        }
    }

    /// 是否已退回进程内存储
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Memory(_))
    }

    fn inner(&self) -> &dyn CredentialStore {
        match self {
            Self::Keyring(store) => store,
            Self::Memory(store) => store,
        }
    }
}

impl CredentialStore for SystemCredentialStore {
    fn get(&self, server_name: &str) -> Option<String> {
        self.inner().get(server_name)
    }

    fn set(&self, server_name: &str, secret: &str) -> Result<()> {
        self.inner().set(server_name, secret)
    }

    fn delete(&self, server_name: &str) -> Result<()> {
        self.inner().delete(server_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fallback_delegates() {
        let store =
            SystemCredentialStore::Memory(MemoryCredentialStore::new());
        assert!(store.is_fallback());

        store.set("lan", "p").unwrap();
        assert_eq!(store.get("lan").as_deref(), Some("p"));
        store.delete("lan").unwrap();
        assert_eq!(store.get("lan"), None);
    }

    #[test]
    fn test_keyring_variant_is_not_fallback() {
        let store =
            SystemCredentialStore::Keyring(KeyringCredentialStore::new());
        assert!(!store.is_fallback());
    }
}
