use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 畫面上顯示的固定文字
pub mod text {
    pub const MISSING_INPUT_ALERT: &str = "学部系・課題文・文字数をすべて入力してください";
    pub const GENERATING: &str = "生成中...";
    pub const GENERATION_FAILED: &str = "生成失敗";
    pub const ERROR_PREFIX: &str = "エラー: ";
    pub const ERROR_LABEL: &str = "エラー";
    pub const PREREGISTER_PROMO: &str =
        "正式版の事前登録を受付中です。お名前とメールアドレスを入力してください。";
    pub const PREREGISTER_DONE: &str = "事前登録が完了しました。ありがとうございます！";
    pub const PREREGISTER_FAILED: &str = "事前登録を送信できませんでした。時間をおいて再度お試しください。";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faculty {
    Humanities,
    Science,
    Mixed,
}

impl Faculty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Faculty::Humanities => "humanities",
            Faculty::Science => "science",
            Faculty::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faculty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "humanities" => Ok(Faculty::Humanities),
            "science" => Ok(Faculty::Science),
            "mixed" => Ok(Faculty::Mixed),
            other => Err(format!("unknown faculty: {}", other)),
        }
    }
}

/// `POST /structure` 的請求內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    #[serde(rename = "text")]
    pub theme: String,
    pub faculty: Faculty,
    pub length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub plan1: Option<String>,
    #[serde(default)]
    pub plan2: Option<String>,
    #[serde(default)]
    pub plan3: Option<String>,
}

impl GenerationResult {
    /// 依序取出三個方案，缺少的欄位以失敗字樣代替
    pub fn rendered(&self) -> [String; 3] {
        [&self.plan1, &self.plan2, &self.plan3].map(|plan| {
            plan.clone()
                .unwrap_or_else(|| text::GENERATION_FAILED.to_string())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClickLog {
    #[serde(default)]
    pub clicks: Option<u64>,
}

/// Raw values as they sit in the form controls, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub theme: String,
    pub faculty: String,
    pub length: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleTemplate {
    pub theme: &'static str,
    pub faculty: Faculty,
    pub length: u32,
}

impl ExampleTemplate {
    pub fn to_input(&self) -> FormInput {
        FormInput {
            theme: self.theme.to_string(),
            faculty: self.faculty.as_str().to_string(),
            length: self.length.to_string(),
        }
    }
}

pub const EXAMPLES: [ExampleTemplate; 3] = [
    ExampleTemplate {
        theme: "SNSの普及が現代の若者の価値観と人間関係に与えた変化について具体例を交えて考察しなさい。",
        faculty: Faculty::Humanities,
        length: 1000,
    },
    ExampleTemplate {
        theme: "再生可能エネルギーの導入拡大における技術的課題と解決の方向性について、発電効率・コスト・環境負荷の観点から考察しなさい。",
        faculty: Faculty::Science,
        length: 2000,
    },
    ExampleTemplate {
        theme: "インターネットの発展が、現代の生活・社会・科学技術に与えた影響を整理し、その利点と課題について述べなさい。",
        faculty: Faculty::Mixed,
        length: 500,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanSlot {
    First,
    Second,
    Third,
}

impl PlanSlot {
    pub const ALL: [PlanSlot; 3] = [PlanSlot::First, PlanSlot::Second, PlanSlot::Third];

    pub fn index(&self) -> usize {
        match self {
            PlanSlot::First => 0,
            PlanSlot::Second => 1,
            PlanSlot::Third => 2,
        }
    }
}

/// 表單送出事件，處理器會阻止預設的頁面跳轉
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub time: String,
    pub text: String,
    pub plans: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_request_wire_format() {
        let draft = DraftRequest {
            theme: "x".to_string(),
            faculty: Faculty::Science,
            length: 500,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "x", "faculty": "science", "length": 500})
        );
    }

    #[test]
    fn test_generation_result_missing_and_null_fields() {
        let result: GenerationResult =
            serde_json::from_str(r#"{"plan1": "A", "plan2": null}"#).unwrap();
        assert_eq!(
            result.rendered(),
            [
                "A".to_string(),
                text::GENERATION_FAILED.to_string(),
                text::GENERATION_FAILED.to_string()
            ]
        );
    }

    #[test]
    fn test_faculty_parse() {
        assert_eq!("mixed".parse::<Faculty>().unwrap(), Faculty::Mixed);
        assert!("".parse::<Faculty>().is_err());
        assert!("Science".parse::<Faculty>().is_err());
    }

    #[test]
    fn test_submit_event_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
