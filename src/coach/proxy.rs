// Request handling for the coach: validate, assemble the prompt, call the
// backend once, and map the outcome to a status plus JSON body.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::api::openai::{ChatBackend, ChatRequest};

/// Characters of serialized context forwarded to the model.
pub const CONTEXT_BUDGET: usize = 9000;
pub const MAX_IMAGES: usize = 3;
const NO_RESPONSE: &str = "No response.";

/// Shown to the user whenever the coach could not answer.
pub const COACH_UNAVAILABLE: &str = "Error reaching coach API. Try again.";

const SYSTEM_PROMPT: &[&str] = &[
    "You are a League of Legends coach.",
    "Be concise, practical, and tailored to the provided app context.",
    "",
    "If screenshots are provided, read the scoreboard and call out: items/levels/sums + the top 2 actionable fixes.",
    "",
    "You will receive APP_CONTEXT containing:",
    "- championKey + championLabel + role",
    "- enemy team list (+ optional enemy top / enemy bot lane)",
    "- detected traits (tanks/AP/AD/flex/CC/healing + pills)",
    "- the app's recommended items + fight rule",
    "",
    "Rules:",
    "1) Use the app context aggressively—reference enemy champs/traits and the proposed build/fight rule.",
    "2) IMPORTANT: Determine the champion from APP_CONTEXT.championKey and ONLY give advice for that champion.",
    "3) If enemy team is empty/unknown, give a general plan for the champion and ask what enemy champs are showing.",
    "4) Output format (unless the user asks otherwise):",
    "   - WIN CONDITION (1 line)",
    "   - EARLY GAME (2–3 bullets)",
    "   - TEAMFIGHTS (2–3 bullets)",
    "   - BUILD/RUNES TWEAKS (1–2 bullets; only small deltas from the app build unless user asks)",
    "   - COMMON MISTAKE (1 line)",
    "5) If playing Master Yi: mention holding Q for key CC and reset logic.",
    "6) If playing Bel'Veth: emphasize skirmish→objective conversion (Herald/Baron form), and timing your entry (E for burst).",
    "7) If playing Volibear top: mention wave plan and R dive windows.",
    "8) If playing Heimerdinger top: emphasize turret setup before fights, E stun punish windows, and objective zone control (R+Q/R+E usage).",
    "9) Never mention 'JSON' or 'context injection'—just act like you already know the draft.",
    "10) If playing Miss Fortune ADC: prioritize clean R angles, track engage CC, and mention lane trading via Q bounce and E slow setups.",
    "11) If playing Lux Support: emphasize Q pick windows, shielding key burst, and using E zoning for wave/brush control; call out anti-hook positioning vs engage supports.",
    "Matchup hint: if APP_CONTEXT.enemyBot is present, use it for lane/wave advice even if enemy team list is incomplete.",
    "",
];

/// Body the CLI sends; the proxy itself reads it as untyped JSON so that
/// malformed fields can be rejected with the right status.
#[derive(Debug, Clone, Serialize)]
pub struct CoachRequest {
    pub message: String,
    pub context: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Value,
}

impl ProxyResponse {
    fn new(status: u16, body: Value) -> Self {
        ProxyResponse { status, body }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn text(&self) -> Option<&str> {
        self.body.get("text").and_then(Value::as_str)
    }
}

/// Compact JSON cut to the character budget; absent or null context is `{}`.
pub fn compact_context(context: Option<&Value>) -> String {
    match context.filter(|ctx| !is_falsy(ctx)) {
        None => "{}".to_string(),
        Some(ctx) => ctx.to_string().chars().take(CONTEXT_BUDGET).collect(),
    }
}

/// Null, false, zero and the empty string carry no context.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub fn system_prompt(context: &str) -> String {
    let mut prompt = SYSTEM_PROMPT.join("\n");
    prompt.push_str("\nAPP_CONTEXT: ");
    prompt.push_str(context);
    prompt
}

fn images_from(body: &Value) -> Vec<String> {
    body.get("images")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .take(MAX_IMAGES)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn handle(method: &str, body: &Value, backend: &dyn ChatBackend) -> ProxyResponse {
    if method != "POST" {
        return ProxyResponse::new(405, json!({"error": "Method not allowed"}));
    }

    let message = match body.get("message").and_then(Value::as_str) {
        Some(m) if !m.is_empty() => m,
        _ => return ProxyResponse::new(400, json!({"error": "Missing message string"})),
    };

    let request = ChatRequest {
        system: system_prompt(&compact_context(body.get("context"))),
        message: message.to_string(),
        images: images_from(body),
    };

    match backend.complete(&request) {
        Ok(reply) => {
            let text = reply
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_RESPONSE.to_string());
            info!(chars = text.len(), "coach replied");
            ProxyResponse::new(200, json!({"text": text}))
        }
        Err(e) => {
            error!(error = %e, "coach backend failed");
            ProxyResponse::new(500, json!({"error": "Server error", "detail": e.to_string()}))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::cell::RefCell;

    struct FakeBackend {
        reply: Result<Option<String>, fn() -> AppError>,
        seen: RefCell<Vec<ChatRequest>>,
    }

    impl FakeBackend {
        fn replying(text: Option<&str>) -> Self {
            FakeBackend {
                reply: Ok(text.map(str::to_string)),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: fn() -> AppError) -> Self {
            FakeBackend {
                reply: Err(err),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChatBackend for FakeBackend {
        fn complete(&self, request: &ChatRequest) -> Result<Option<String>, AppError> {
            self.seen.borrow_mut().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[test]
    fn rejects_non_post() {
        let backend = FakeBackend::replying(Some("hi"));
        let resp = handle("GET", &json!({"message": "hi"}), &backend);
        assert_eq!(resp.status, 405);
        assert_eq!(resp.body, json!({"error": "Method not allowed"}));
        assert!(backend.seen.borrow().is_empty());
    }

    #[test]
    fn rejects_missing_or_non_string_message() {
        let backend = FakeBackend::replying(Some("hi"));
        for body in [json!({}), json!({"message": 42}), json!({"message": ""}), json!(null)] {
            let resp = handle("POST", &body, &backend);
            assert_eq!(resp.status, 400);
            assert_eq!(resp.body["error"], "Missing message string");
        }
        assert!(backend.seen.borrow().is_empty());
    }

    #[test]
    fn returns_backend_text() {
        let backend = FakeBackend::replying(Some("WIN CONDITION: resets"));
        let resp = handle("POST", &json!({"message": "tips?"}), &backend);
        assert!(resp.is_ok());
        assert_eq!(resp.text(), Some("WIN CONDITION: resets"));

        let seen = backend.seen.borrow();
        assert_eq!(seen[0].message, "tips?");
        assert!(seen[0].system.ends_with("APP_CONTEXT: {}"));
    }

    #[test]
    fn empty_reply_becomes_placeholder() {
        let backend = FakeBackend::replying(None);
        let resp = handle("POST", &json!({"message": "tips?"}), &backend);
        assert_eq!(resp.text(), Some("No response."));
    }

    #[test]
    fn backend_failure_is_server_error() {
        let backend = FakeBackend::failing(|| AppError::CoachTimeout);
        let resp = handle("POST", &json!({"message": "tips?"}), &backend);
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body["error"], "Server error");
        assert_eq!(resp.body["detail"], "Coach request timed out");
    }

    #[test]
    fn forwards_at_most_three_images() {
        let backend = FakeBackend::replying(Some("ok"));
        let body = json!({"message": "scoreboard", "images": ["a", "b", 7, "c", "d"]});
        handle("POST", &body, &backend);
        assert_eq!(backend.seen.borrow()[0].images, vec!["a", "b", "c"]);
    }

    #[test]
    fn context_is_compact_and_truncated() {
        let small = json!({"championKey": "lux", "enemyTeam": ["Zed"]});
        assert_eq!(
            compact_context(Some(&small)),
            r#"{"championKey":"lux","enemyTeam":["Zed"]}"#
        );

        let big = json!({"notes": "é".repeat(20_000)});
        let cut = compact_context(Some(&big));
        assert_eq!(cut.chars().count(), CONTEXT_BUDGET);
        assert!(cut.starts_with(r#"{"notes":"é"#));

        assert_eq!(compact_context(None), "{}");
        for falsy in [json!(null), json!(""), json!(0), json!(false)] {
            assert_eq!(compact_context(Some(&falsy)), "{}");
        }
        assert_eq!(compact_context(Some(&json!([]))), "[]");
        assert_eq!(compact_context(Some(&json!("lane"))), "\"lane\"");
    }

    #[test]
    fn request_body_round_trips_through_handle() {
        let backend = FakeBackend::replying(Some("ok"));
        let req = CoachRequest {
            message: "how to lane?".to_string(),
            context: json!({"championKey": "missfortune"}),
            images: Vec::new(),
        };
        let body = serde_json::to_value(&req).unwrap();

        let resp = handle("POST", &body, &backend);

        assert!(resp.is_ok());
        assert!(backend.seen.borrow()[0]
            .system
            .contains(r#"APP_CONTEXT: {"championKey":"missfortune"}"#));
    }
}
