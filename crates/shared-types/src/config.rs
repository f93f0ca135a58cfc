use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the persisted session lives on desktop builds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the session files. `None` means the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SidebarConfig {
    /// Start with the icons-only sidebar.
    #[serde(default)]
    pub collapsed: bool,
}

/// Stand-in for the exam service until a real backend exists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExamsConfig {
    /// Pending exam count shown on the student "Exams" entry.
    #[serde(default)]
    pub pending: Option<u32>,
}

/// Top-level structure of `config.toml`.
///
/// Every field defaults so that a missing or partial file still yields a
/// working shell.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShellConfig {
    /// Deployment prefix stripped before route matching, e.g. `/EduApplication`.
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub sidebar: SidebarConfig,
    #[serde(default)]
    pub exams: ExamsConfig,
}
