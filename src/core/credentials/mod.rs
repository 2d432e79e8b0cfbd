//! 服务器密码存储
//!
//! - **`KeyringCredentialStore`**: 系统钥匙串（Secret Service / Keychain / 凭据管理器）
//! - **`MemoryCredentialStore`**: 进程内存储，用于测试
//! - **`SystemCredentialStore`**: 优先使用钥匙串，不可用时退回进程内存储

mod fallback;
mod keyring_store;
mod store;

pub use fallback::SystemCredentialStore;
pub use keyring_store::KeyringCredentialStore;
pub use store::{
    credential_service, CredentialStore, MemoryCredentialStore,
    SECRET_ATTRIBUTE, SERVICE_PREFIX,
};
