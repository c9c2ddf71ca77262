use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// 分页查询参数，page/size 允许以字符串形式传入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default = "first_page", deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(default = "default_page_size", deserialize_with = "lenient_i64")]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 查询参数既可能是数字也可能是字符串（表单序列化）
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(|_| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&s),
                &"an integer or a string containing an integer",
            )
        }),
    }
}

fn first_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(flatten)]
        q: PaginationQuery,
    }

    #[test]
    fn accepts_numeric_and_string_pages() {
        let w: Wrapper = serde_json::from_str(r#"{"page": 3, "size": "25"}"#).unwrap();
        assert_eq!(w.q.page, 3);
        assert_eq!(w.q.size, 25);
    }

    #[test]
    fn defaults_apply_when_missing() {
        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(w.q.page, 1);
        assert_eq!(w.q.size, 10);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"page": "abc"}"#).is_err());
    }
}
