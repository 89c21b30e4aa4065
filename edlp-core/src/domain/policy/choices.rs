// edlp-core/src/domain/policy/choices.rs

// Closed enumerations of the policy form. The serialized form is the Chinese
// label shown to users, which is also what ends up in the stored record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

fn expected_list(labels: &[&str]) -> String {
    labels.join(", ")
}

// --- SUBMITTER ROLE ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmitterRole {
    #[serde(rename = "部門二級主管")]
    SecondLevelManager,
    #[serde(rename = "部門三級主管")]
    ThirdLevelManager,
    #[serde(rename = "部門四級主管")]
    FourthLevelManager,
}

impl SubmitterRole {
    pub const ALL: [SubmitterRole; 3] = [
        Self::SecondLevelManager,
        Self::ThirdLevelManager,
        Self::FourthLevelManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecondLevelManager => "部門二級主管",
            Self::ThirdLevelManager => "部門三級主管",
            Self::FourthLevelManager => "部門四級主管",
        }
    }
}

impl fmt::Display for SubmitterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmitterRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::UnknownChoice {
                field: "submitter role",
                value: s.to_string(),
                expected: expected_list(&Self::ALL.map(|r| r.as_str())),
            })
    }
}

// --- OFFICE ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Office {
    #[serde(rename = "瑞三office")]
    RuiSan,
    #[serde(rename = "瑞四office")]
    RuiSi,
    #[serde(rename = "台元office")]
    TaiYuan,
    #[serde(rename = "其他office")]
    Other,
}

impl Office {
    pub const ALL: [Office; 4] = [Self::RuiSan, Self::RuiSi, Self::TaiYuan, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuiSan => "瑞三office",
            Self::RuiSi => "瑞四office",
            Self::TaiYuan => "台元office",
            Self::Other => "其他office",
        }
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Office {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|office| office.as_str() == s)
            .ok_or_else(|| DomainError::UnknownChoice {
                field: "office",
                value: s.to_string(),
                expected: expected_list(&Self::ALL.map(|o| o.as_str())),
            })
    }
}

// --- APPROVAL TIMEOUT STRATEGY ---

/// What happens to a held message when nobody approves it in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeoutStrategy {
    #[default]
    #[serde(rename = "自動通過")]
    AutoApprove,
    #[serde(rename = "自動攔截")]
    AutoBlock,
}

impl TimeoutStrategy {
    pub const ALL: [TimeoutStrategy; 2] = [Self::AutoApprove, Self::AutoBlock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoApprove => "自動通過",
            Self::AutoBlock => "自動攔截",
        }
    }
}

impl fmt::Display for TimeoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeoutStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| DomainError::UnknownChoice {
                field: "timeout strategy",
                value: s.to_string(),
                expected: expected_list(&Self::ALL.map(|t| t.as_str())),
            })
    }
}
