use serde::{Deserialize, Serialize};

use crate::config::messages;

/// Inbound skill request. Only the callback address is read; every level
/// of nesting is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(default)]
    pub user_request: Option<UserRequest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub callback_url: Option<String>,
}

impl SkillRequest {
    /// Callback address, if the caller asked for asynchronous delivery.
    pub fn callback_url(&self) -> Option<&str> {
        self.user_request
            .as_ref()
            .and_then(|request| request.callback_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Response envelope carrying one plain-text bubble. Used both as the
/// synchronous HTTP body and as the callback payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: SkillTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTemplate {
    pub outputs: Vec<SkillOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOutput {
    #[serde(rename = "simpleText")]
    pub simple_text: SimpleText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleText {
    pub text: String,
}

impl SkillResponse {
    pub fn simple_text(message: impl Into<String>) -> Self {
        Self {
            version: messages::SKILL_VERSION.to_string(),
            template: SkillTemplate {
                outputs: vec![SkillOutput {
                    simple_text: SimpleText {
                        text: message.into(),
                    },
                }],
            },
        }
    }

    /// Text of the first bubble.
    pub fn text(&self) -> Option<&str> {
        self.template
            .outputs
            .first()
            .map(|output| output.simple_text.text.as_str())
    }
}

/// Immediate acknowledgement when the result will arrive by callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackAck {
    pub version: String,
    #[serde(rename = "useCallback")]
    pub use_callback: bool,
    pub data: CallbackData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackData {
    pub text: String,
}

impl CallbackAck {
    pub fn loading() -> Self {
        Self {
            version: messages::SKILL_VERSION.to_string(),
            use_callback: true,
            data: CallbackData {
                text: messages::LOADING.to_string(),
            },
        }
    }
}
