use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选择题分类
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub enum McqCategory {
    General,
    Science,
    History,
    Math,
    Programming,
}

impl<'de> Deserialize<'de> for McqCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<McqCategory>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的分类: '{s}'. 支持的分类: General, Science, History, Math, Programming"
            ))
        })
    }
}

impl std::fmt::Display for McqCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            McqCategory::General => write!(f, "General"),
            McqCategory::Science => write!(f, "Science"),
            McqCategory::History => write!(f, "History"),
            McqCategory::Math => write!(f, "Math"),
            McqCategory::Programming => write!(f, "Programming"),
        }
    }
}

impl std::str::FromStr for McqCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(McqCategory::General),
            "Science" => Ok(McqCategory::Science),
            "History" => Ok(McqCategory::History),
            "Math" => Ok(McqCategory::Math),
            "Programming" => Ok(McqCategory::Programming),
            _ => Err(format!("Invalid MCQ category: {s}")),
        }
    }
}

// 选择题难度
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub enum McqDifficulty {
    Easy,
    Medium,
    Hard,
}

impl<'de> Deserialize<'de> for McqDifficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<McqDifficulty>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的难度: '{s}'. 支持的难度: Easy, Medium, Hard"
            ))
        })
    }
}

impl std::fmt::Display for McqDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            McqDifficulty::Easy => write!(f, "Easy"),
            McqDifficulty::Medium => write!(f, "Medium"),
            McqDifficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl std::str::FromStr for McqDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(McqDifficulty::Easy),
            "Medium" => Ok(McqDifficulty::Medium),
            "Hard" => Ok(McqDifficulty::Hard),
            _ => Err(format!("Invalid MCQ difficulty: {s}")),
        }
    }
}

// 选择题实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct Mcq {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    /// 正确选项下标，保证小于 options.len()
    pub correct_answer: i32,
    pub category: Option<McqCategory>,
    pub difficulty: McqDifficulty,
    pub explanation: Option<String>,
    /// 出题教师 ID
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_round_trip() {
        for raw in ["General", "Science", "History", "Math", "Programming"] {
            let category = McqCategory::from_str(raw).unwrap();
            assert_eq!(category.to_string(), raw);
        }
    }

    #[test]
    fn test_difficulty_rejects_unknown() {
        assert!(McqDifficulty::from_str("Impossible").is_err());
        assert!(McqDifficulty::from_str("easy").is_err());
    }
}
