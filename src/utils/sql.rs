/// 转义 LIKE 模式中的通配符，防止用户输入干扰模糊搜索
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent_and_underscore() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("a\\b%"), "a\\\\b\\%");
    }

    #[test]
    fn test_plain_input_unchanged() {
        assert_eq!(escape_like_pattern("alice"), "alice");
    }
}
