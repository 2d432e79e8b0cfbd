//! 配置验证模块
//!
//! 负责验证服务器表单

use crate::app::config::types::ServerForm;
use crate::app::error::types::{AppError, Result};

/// 配置验证器
pub struct ConfigValidator;

impl ConfigValidator {
    /// 验证服务器表单
    pub fn validate_server_form(form: &ServerForm) -> Result<()> {
        if form.name.trim().is_empty() {
            return Err(AppError::validation(
                "Name",
                "Server must have a name",
            ));
        }

        if form.host.trim().is_empty() {
            return Err(AppError::validation(
                "Host",
                "Host cannot be empty",
            ));
        }

        if form.port == 0 {
            return Err(AppError::validation(
                "Port",
                "Port must be between 1 and 65535",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ServerForm {
        ServerForm {
            name: "lan".to_string(),
            host: "192.168.0.10".to_string(),
            ..ServerForm::default()
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(ConfigValidator::validate_server_form(&form()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = ServerForm {
            name: "   ".to_string(),
            ..form()
        };
        let err = ConfigValidator::validate_server_form(&form)
            .unwrap_err();
        assert!(err.to_string().contains("Server must have a name"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let form = ServerForm { port: 0, ..form() };
        assert!(ConfigValidator::validate_server_form(&form).is_err());
    }
}
