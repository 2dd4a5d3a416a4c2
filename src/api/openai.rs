use serde_json::json;
use std::io;
use std::time::Duration;
use tracing::debug;

use super::models::ChatCompletion;
use crate::error::AppError;

/// The coach makes a single attempt; anything slower than this is a timeout.
const COACH_TIMEOUT: Duration = Duration::from_secs(25);
const TEMPERATURE: f64 = 0.6;
const USER_AGENT: &str = "draft_coach/0.1.0";

/// One coaching exchange as the backend sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub message: String,
    pub images: Vec<String>,
}

/// A chat model that answers one message. `Ok(None)` means it replied with nothing.
pub trait ChatBackend {
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, AppError>;
}

pub struct OpenAiBackend {
    agent: ureq::Agent,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiBackend {
    pub fn new(api_key: &str, model: &str, url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(COACH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        OpenAiBackend {
            agent,
            api_key: api_key.to_string(),
            model: model.to_string(),
            url: url.to_string(),
        }
    }
}

fn user_content(request: &ChatRequest) -> serde_json::Value {
    if request.images.is_empty() {
        return json!(request.message);
    }

    let mut parts = vec![json!({"type": "text", "text": request.message})];
    parts.extend(
        request
            .images
            .iter()
            .map(|url| json!({"type": "image_url", "image_url": {"url": url}})),
    );
    serde_json::Value::Array(parts)
}

fn is_timeout(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn transport_error(t: ureq::Transport) -> AppError {
    let timed_out = std::error::Error::source(&t)
        .and_then(|s| s.downcast_ref::<io::Error>())
        .is_some_and(is_timeout);
    if timed_out {
        AppError::CoachTimeout
    } else {
        AppError::HttpError(t.to_string())
    }
}

impl ChatBackend for OpenAiBackend {
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, AppError> {
        let payload = json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": user_content(request)},
            ],
        });

        debug!(model = %self.model, images = request.images.len(), "sending coach request");

        let response = self
            .agent
            .post(&self.url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(payload)
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => AppError::CoachError(format!(
                    "chat endpoint returned {}: {}",
                    code,
                    resp.into_string().unwrap_or_default()
                )),
                ureq::Error::Transport(t) => transport_error(t),
            })?;

        let body = response.into_string().map_err(|e| {
            if is_timeout(&e) {
                AppError::CoachTimeout
            } else {
                AppError::HttpError(e.to_string())
            }
        })?;

        let completion: ChatCompletion =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;
        Ok(completion.into_text())
    }
}
