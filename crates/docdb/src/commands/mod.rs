use crate::config::DocDbConfig;
use crate::key::KeyPath;
use crate::model::StoreInfo;
use serde_json::Value;

pub mod config;
pub mod delete;
pub mod get;
pub mod info;
pub mod set;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The key the command addressed, once parsed.
    pub key: Option<KeyPath>,
    /// For `get`, the value found. For `delete`, the value removed.
    pub value: Option<Value>,
    pub info: Option<StoreInfo>,
    pub config: Option<DocDbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_key(mut self, key: KeyPath) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_value(mut self, value: Option<Value>) -> Self {
        self.value = value;
        self
    }

    pub fn with_info(mut self, info: StoreInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_config(mut self, config: DocDbConfig) -> Self {
        self.config = Some(config);
        self
    }
}
