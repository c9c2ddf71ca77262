//! OTP 邮件投递
//!
//! 通过事务邮件 HTTP API 发送验证码，提供方地址与密钥来自配置。

use once_cell::sync::Lazy;
use serde_json::json;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{ELearnError, Result};

static MAILER: Lazy<MailerService> = Lazy::new(MailerService::new);

/// 获取全局 Mailer 实例
pub fn mailer() -> &'static MailerService {
    &MAILER
}

pub struct MailerService {
    client: reqwest::Client,
}

impl MailerService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// 发送一封邮件
    async fn send(&self, to: &str, subject: &str, text: &str, html: &str) -> Result<()> {
        let config = AppConfig::get();

        let response = self
            .client
            .post(&config.mailer.api_url)
            .bearer_auth(&config.mailer.api_key)
            .json(&json!({
                "from": config.mailer.from,
                "to": [to],
                "subject": subject,
                "text": text,
                "html": html,
            }))
            .send()
            .await?;

        if response.status().is_success() {
            debug!("Mail accepted by provider for recipient: {}", to);
            Ok(())
        } else {
            Err(ELearnError::mail_delivery(format!(
                "Mail provider returned status: {}",
                response.status()
            )))
        }
    }

    /// 发送账户验证 OTP
    pub async fn send_verification_otp(&self, to: &str, code: &str) -> Result<()> {
        let ttl = AppConfig::get().otp.ttl_minutes;
        let text = format!(
            "Your OTP for account verification is: {code}\nThis OTP will expire in {ttl} minutes."
        );
        let html = format!(
            "<div>\
             <h3>Account Verification</h3>\
             <p>Your OTP for account verification is: <strong>{code}</strong></p>\
             <p>This OTP will expire in {ttl} minutes.</p>\
             </div>"
        );
        self.send(to, "Verify Your Student Account", &text, &html)
            .await
    }

    /// 发送密码重置 OTP
    pub async fn send_password_reset_otp(&self, to: &str, code: &str) -> Result<()> {
        let ttl = AppConfig::get().otp.ttl_minutes;
        let text = format!(
            "Your password reset OTP is: {code}\nThis code will expire in {ttl} minutes."
        );
        let html = format!(
            "<div>\
             <h3>Password Reset</h3>\
             <p>Your password reset OTP is: <strong>{code}</strong></p>\
             <p>This code will expire in {ttl} minutes.</p>\
             </div>"
        );
        self.send(to, "Password Reset OTP", &text, &html).await
    }

    /// 发送密码重置完成通知
    pub async fn send_password_changed_notice(&self, to: &str) -> Result<()> {
        let text = "Your account password has been successfully reset.".to_string();
        let html = "<div>\
                    <h3>Password Reset Confirmation</h3>\
                    <p>Your account password has been successfully reset.</p>\
                    </div>"
            .to_string();
        self.send(to, "Your Password Has Been Reset", &text, &html)
            .await
    }
}

impl Default for MailerService {
    fn default() -> Self {
        Self::new()
    }
}
