//! 系统钥匙串凭据存储

use keyring::Entry;

use super::store::{credential_service, CredentialStore, SECRET_ATTRIBUTE};
use crate::app::error::types::{LauncherError, Result};

/// 基于 `keyring` 的凭据存储
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringCredentialStore;

impl KeyringCredentialStore {
    /// 创建存储
    pub fn new() -> Self {
        Self
    }

    /// 钥匙串后端是否可用
    ///
    /// 查询一个不存在的条目：返回 `NoEntry` 说明后端正常工作。
    pub fn is_available(&self) -> bool {
        match Self::entry("").and_then(|e| e.get_password()) {
            Ok(_) | Err(keyring::Error::NoEntry) => true,
            Err(e) => {
                tracing::debug!("Keyring backend unavailable: {}", e);
                false
            }
        }
    }

    fn entry(server_name: &str) -> keyring::Result<Entry> {
        Entry::new(&credential_service(server_name), SECRET_ATTRIBUTE)
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self, server_name: &str) -> Option<String> {
        match Self::entry(server_name).and_then(|e| e.get_password()) {
            Ok(secret) => Some(secret),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                tracing::debug!(
                    "Credential lookup for {:?} failed: {}",
                    server_name,
                    e
                );
                None
            }
        }
    }

    fn set(&self, server_name: &str, secret: &str) -> Result<()> {
        Self::entry(server_name)
            .and_then(|e| e.set_password(secret))
            .map_err(|e| LauncherError::Credential(e.to_string()))?;
        tracing::debug!("Stored credential for {:?}", server_name);
        Ok(())
    }

    fn delete(&self, server_name: &str) -> Result<()> {
        match Self::entry(server_name).and_then(|e| e.delete_credential())
        {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(LauncherError::Credential(e.to_string())),
        }
    }
}
