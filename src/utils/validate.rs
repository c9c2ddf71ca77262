use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

// E.164：必须带国家码前缀，如 +8801712345678
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("Invalid phone regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone must include a country code (e.g. +880)");
    }
    Ok(())
}

/// 姓名必须包含名和姓两部分
pub fn validate_full_name(full_name: &str) -> Result<(), &'static str> {
    if full_name.trim().split_whitespace().count() < 2 {
        return Err("Full name must include first and last name");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

const SPECIAL_CHARS: &str = "!@#$%^&*";

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：数字 + 特殊字符（!@#$%^&*）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 3. 特殊字符检查
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        errors.push("Password must contain at least one special character (!@#$%^&*)");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

/// 验证选择题数据的交叉约束：选项 2-5 个，答案下标必须在选项范围内
pub fn validate_mcq(options: &[String], correct_answer: i32) -> Result<(), &'static str> {
    if options.len() < 2 || options.len() > 5 {
        return Err("MCQ must have between 2 and 5 options");
    }
    if correct_answer < 0 || correct_answer as usize >= options.len() {
        return Err("Correct answer index must be within options range");
    }
    if options.iter().any(|o| o.trim().is_empty()) {
        return Err("MCQ options must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("secure#pass1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("12345678!").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1!");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("abcdefg!");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_no_special_char() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one special character (!@#$%^&*)")
        );
    }

    #[test]
    fn test_phone_requires_country_code() {
        assert!(validate_phone("+8801712345678").is_ok());
        assert!(validate_phone("01712345678").is_err());
        assert!(validate_phone("+0123").is_err());
    }

    #[test]
    fn test_full_name_needs_two_words() {
        assert!(validate_full_name("Ada Lovelace").is_ok());
        assert!(validate_full_name("  Ada   Lovelace  ").is_ok());
        assert!(validate_full_name("Ada").is_err());
    }

    #[test]
    fn test_mcq_option_count() {
        let two = vec!["a".to_string(), "b".to_string()];
        assert!(validate_mcq(&two, 1).is_ok());

        let one = vec!["a".to_string()];
        assert!(validate_mcq(&one, 0).is_err());

        let six: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        assert!(validate_mcq(&six, 0).is_err());
    }

    #[test]
    fn test_mcq_answer_in_range() {
        let options = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(validate_mcq(&options, 2).is_ok());
        assert!(validate_mcq(&options, 3).is_err());
        assert!(validate_mcq(&options, -1).is_err());
    }
}
