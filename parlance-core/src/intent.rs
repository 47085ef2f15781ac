use serde::{Deserialize, Serialize};

/// The classified purpose of a single user turn.
///
/// This set is closed: classification always produces exactly one of these
/// values, with [`Intent::GeneralChat`] as the exhaustive catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    GeneralChat,
    FactCheck,
    Summarize,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::GeneralChat, Intent::FactCheck, Intent::Summarize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::GeneralChat => "general_chat",
            Intent::FactCheck => "fact_check",
            Intent::Summarize => "summarize",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
