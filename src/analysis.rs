// src/analysis.rs

use log::{error, info};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::store::{Answer, QuestionId};

/// Why a submission failed. `Transport` covers connect/send/read errors,
/// `Decode` a body that does not parse into a JSON object. The activity log
/// records which one happened; the questionnaire UI shows the same alert
/// for both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    ClientInit(String),
    Transport(String),
    Decode(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::ClientInit(s) => write!(f, "client init failed: {s}"),
            AnalysisError::Transport(s) => write!(f, "transport failed: {s}"),
            AnalysisError::Decode(s) => write!(f, "response decode failed: {s}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Fields the analyze endpoint may return. All optional: the endpoint has
/// shipped more than one response shape, and whichever fields are absent
/// are simply not rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub mistral_analysis: Option<String>,
    pub gemma_judgment: Option<String>,
    pub risk_analysis: Option<String>,
    pub result: Option<String>,
}

impl AnalysisOutcome {
    /// Pull the known fields out of a decoded body. Only string values
    /// count; a field holding any other type is treated as absent. Unknown
    /// fields are ignored. `None` means the body was not a JSON object.
    pub fn from_json(body: &Value) -> Option<Self> {
        let obj = body.as_object()?;
        Some(Self {
            mistral_analysis: string_field(obj, "mistral_analysis"),
            gemma_judgment: string_field(obj, "gemma_judgment"),
            risk_analysis: string_field(obj, "risk_analysis"),
            result: string_field(obj, "result"),
        })
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

// ======================================================
// request bodies
// ======================================================

fn answer_value(answer: &Answer) -> Value {
    match answer {
        Answer::Single(s) | Answer::Text(s) => Value::String(s.clone()),
        Answer::Multi(v) => Value::Array(v.iter().cloned().map(Value::String).collect()),
        Answer::Scale(n) => Value::Number((*n).into()),
    }
}

/// `{"responses": {<wireKey>: <answer>, ...}}`
pub fn responses_body(answers: &BTreeMap<QuestionId, Answer>) -> Value {
    let mut responses = Map::new();
    for (id, answer) in answers {
        responses.insert(id.wire_key().to_string(), answer_value(answer));
    }
    json!({ "responses": responses })
}

/// `{"csv": "<full file text>"}`
pub fn csv_body(csv_text: &str) -> Value {
    json!({ "csv": csv_text })
}

// ======================================================
// client
// ======================================================

pub struct AnalysisClient {
    client: reqwest::blocking::Client,
    analyze_url: String,
}

impl AnalysisClient {
    /// A request runs until the endpoint answers or the connection drops;
    /// analysis can take minutes on a cold model, so reqwest's default
    /// timeout is disabled.
    pub fn new(analyze_url: &str) -> Result<Self, AnalysisError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|e| AnalysisError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            analyze_url: analyze_url.to_string(),
        })
    }

    /// POST the body and decode whatever comes back. The HTTP status is
    /// never inspected: the endpoint reports analysis problems in the body,
    /// and a 500 carrying a JSON object still yields its fields.
    pub fn analyze(&self, body: &Value) -> Result<AnalysisOutcome, AnalysisError> {
        info!("analyze request: POST {}", self.analyze_url);

        let response = self
            .client
            .post(&self.analyze_url)
            .json(body)
            .send()
            .map_err(|e| {
                error!("analyze transport failed: {e}");
                AnalysisError::Transport(e.to_string())
            })?;

        let value: Value = response.json().map_err(|e| {
            if e.is_decode() {
                error!("analyze response decode failed: {e}");
                AnalysisError::Decode(e.to_string())
            } else {
                error!("analyze body read failed: {e}");
                AnalysisError::Transport(e.to_string())
            }
        })?;

        AnalysisOutcome::from_json(&value).ok_or_else(|| {
            error!("analyze response is not a JSON object");
            AnalysisError::Decode("response body is not a JSON object".to_string())
        })
    }
}

// ======================================================
// Unit Tests
// ======================================================
