// edlp-core/src/domain/policy/schema.rs
//
// Declarative field schema. The validator and the canonicalizer both walk
// `CATEGORIES` so they never disagree about which fields exist, which toggles
// gate which sub-options, or in which order things are reported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker stored for a disabled category.
pub const NOT_APPLICABLE: &str = "N/A";
/// Marker for an enabled category that carries no sub-detail.
pub const ENABLED_MARKER: &str = "已啟用";
/// Marker for simple on/off categories (source code, dedup).
pub const SWITCH_ON_MARKER: &str = "啟用";
/// Placeholder stored when the submitter left their name blank.
pub const ANONYMOUS_SUBMITTER: &str = "未填寫";
/// Full-width semicolon joining rendered sub-options.
pub const ITEM_SEPARATOR: &str = "；";
/// Maximum submitter name length, in characters.
pub const SUBMITTER_NAME_MAX_CHARS: usize = 10;

/// Top-level toggleable concern. Declaration order is the record column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Blacklist,
    Whitelist,
    Sender,
    Keywords,
    Attachment,
    SourceCode,
    Dedup,
    Approval,
    Cc,
    Bcc,
}

impl CategoryKey {
    /// Column name in the persisted record (and JSON key).
    pub fn column(&self) -> &'static str {
        match self {
            Self::Blacklist => "blacklist",
            Self::Whitelist => "whitelist",
            Self::Sender => "sender",
            Self::Keywords => "keywords",
            Self::Attachment => "attachment",
            Self::SourceCode => "sourcecode",
            Self::Dedup => "dedup",
            Self::Approval => "approval",
            Self::Cc => "cc",
            Self::Bcc => "bcc",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Free text, must be non-blank when enabled.
    Text,
    /// Number typed as text; only presence is checked. `unit` is appended verbatim when rendered.
    Number { unit: &'static str },
    /// Self-sufficient boolean, rendered as its bare label.
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubOptionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: OptionKind,
    /// Whether enabling this sub-option satisfies the "choose at least one" rule.
    pub counts_as_scope: bool,
    /// Reported when the sub-option is enabled with a blank value. `None` for flags.
    pub missing_message: Option<&'static str>,
}

impl SubOptionSpec {
    pub fn requires_value(&self) -> bool {
        !matches!(self.kind, OptionKind::Flag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryShape {
    /// Parent toggle gating a list of sub-options, at least one of which must be chosen.
    Group {
        select_one_message: &'static str,
        options: &'static [SubOptionSpec],
    },
    /// Plain on/off toggle.
    Switch,
    /// Mandatory approval with window + timeout strategy.
    Approval,
    /// Toggle gating a single recipient text.
    Recipient { missing_message: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub key: CategoryKey,
    pub title: &'static str,
    pub shape: CategoryShape,
}

const fn text(
    key: &'static str,
    label: &'static str,
    missing_message: &'static str,
) -> SubOptionSpec {
    SubOptionSpec {
        key,
        label,
        kind: OptionKind::Text,
        counts_as_scope: true,
        missing_message: Some(missing_message),
    }
}

const fn number(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    missing_message: &'static str,
) -> SubOptionSpec {
    SubOptionSpec {
        key,
        label,
        kind: OptionKind::Number { unit },
        counts_as_scope: true,
        missing_message: Some(missing_message),
    }
}

const fn flag(key: &'static str, label: &'static str, counts_as_scope: bool) -> SubOptionSpec {
    SubOptionSpec {
        key,
        label,
        kind: OptionKind::Flag,
        counts_as_scope,
        missing_message: None,
    }
}

const BLACKLIST_OPTIONS: [SubOptionSpec; 2] = [
    text("domain", "域名/IP", "黑名單：請填寫「域名/信箱/IP」。"),
    text("regex", "正則", "黑名單：請填寫「正規表達式」。"),
];

const WHITELIST_OPTIONS: [SubOptionSpec; 2] = [
    text("domain", "域名/IP", "白名單：請填寫「域名/信箱/IP」。"),
    text("regex", "正則", "白名單：請填寫「正規表達式」。"),
];

const SENDER_OPTIONS: [SubOptionSpec; 2] = [
    text("domain", "域名/IP", "收/發件人：請填寫「域名/信箱/IP」。"),
    text("regex", "正則", "收/發件人：請填寫「正規表達式」。"),
];

// The sensitivity flag renders first but does not count as a search scope.
const KEYWORD_OPTIONS: [SubOptionSpec; 4] = [
    flag("case_sensitive", "大小寫/繁簡敏感", false),
    text("subject", "主題", "關鍵字：請填寫「主題」關鍵字。"),
    text("content", "內容", "關鍵字：請填寫「內容」關鍵字。"),
    text("attachment", "附件", "關鍵字：請填寫「附件」關鍵字。"),
];

const ATTACHMENT_OPTIONS: [SubOptionSpec; 5] = [
    number("size", "大小", "MB", "附件：請填寫「附件大小」。"),
    number("count", "數量", "個", "附件：請填寫「附件數量」。"),
    flag("compressed", "壓縮檔", true),
    text("extension", "副檔名", "附件：請填寫「副檔名」。"),
    flag("tampered", "被竄改的副檔名", true),
];

pub const CATEGORIES: [CategorySpec; 10] = [
    CategorySpec {
        key: CategoryKey::Blacklist,
        title: "黑名單",
        shape: CategoryShape::Group {
            select_one_message: "勾選「黑名單」後，請至少選擇一種過濾方式。",
            options: &BLACKLIST_OPTIONS,
        },
    },
    CategorySpec {
        key: CategoryKey::Whitelist,
        title: "白名單",
        shape: CategoryShape::Group {
            select_one_message: "勾選「白名單」後，請至少選擇一種過濾方式。",
            options: &WHITELIST_OPTIONS,
        },
    },
    CategorySpec {
        key: CategoryKey::Sender,
        title: "收/發件人",
        shape: CategoryShape::Group {
            select_one_message: "勾選「收/發件人」後，請至少選擇一種過濾方式。",
            options: &SENDER_OPTIONS,
        },
    },
    CategorySpec {
        key: CategoryKey::Keywords,
        title: "關鍵字",
        shape: CategoryShape::Group {
            select_one_message: "勾選「關鍵字」後，請至少選擇一種檢查範圍。",
            options: &KEYWORD_OPTIONS,
        },
    },
    CategorySpec {
        key: CategoryKey::Attachment,
        title: "附件",
        shape: CategoryShape::Group {
            select_one_message: "勾選「附件」後，請至少選擇一種檢查條件。",
            options: &ATTACHMENT_OPTIONS,
        },
    },
    CategorySpec {
        key: CategoryKey::SourceCode,
        title: "源代碼",
        shape: CategoryShape::Switch,
    },
    CategorySpec {
        key: CategoryKey::Dedup,
        title: "文本查重",
        shape: CategoryShape::Switch,
    },
    CategorySpec {
        key: CategoryKey::Approval,
        title: "審批",
        shape: CategoryShape::Approval,
    },
    CategorySpec {
        key: CategoryKey::Cc,
        title: "抄送",
        shape: CategoryShape::Recipient {
            missing_message: "請填寫「抄送」目標用戶。",
        },
    },
    CategorySpec {
        key: CategoryKey::Bcc,
        title: "密送",
        shape: CategoryShape::Recipient {
            missing_message: "請填寫「密送」目標用戶。",
        },
    },
];

/// Looks up the schema entry of a category. Every `CategoryKey` has exactly one entry.
pub fn category(key: CategoryKey) -> &'static CategorySpec {
    match key {
        CategoryKey::Blacklist => &CATEGORIES[0],
        CategoryKey::Whitelist => &CATEGORIES[1],
        CategoryKey::Sender => &CATEGORIES[2],
        CategoryKey::Keywords => &CATEGORIES[3],
        CategoryKey::Attachment => &CATEGORIES[4],
        CategoryKey::SourceCode => &CATEGORIES[5],
        CategoryKey::Dedup => &CATEGORIES[6],
        CategoryKey::Approval => &CATEGORIES[7],
        CategoryKey::Cc => &CATEGORIES[8],
        CategoryKey::Bcc => &CATEGORIES[9],
    }
}
