use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub completion_tokens: Option<i64>,
    pub prompt_tokens: Option<i64>,
    pub total_tokens: Option<i64>,
    pub step_count: Option<i64>,
}

impl Usage {
    pub fn new(
        completion_tokens: Option<i64>,
        prompt_tokens: Option<i64>,
        total_tokens: Option<i64>,
        step_count: Option<i64>,
    ) -> Self {
        Self {
            completion_tokens,
            prompt_tokens,
            total_tokens,
            step_count,
        }
    }
}

/// The agent's answer to a single messages request.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    /// Every message the agent produced, as returned by the service
    pub messages: Vec<Value>,
    /// Text of the assistant messages, in order
    pub assistant_text: Vec<String>,
    pub usage: Usage,
}

impl AgentReply {
    pub fn text(&self) -> String {
        self.assistant_text.join("\n")
    }
}
