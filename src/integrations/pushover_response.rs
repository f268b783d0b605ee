use serde_json::Value;

/// Body of a Pushover `messages.json` reply. Only `status` is trusted; a failed
/// request also carries a list of human readable `errors`.
#[derive(Deserialize, Debug)]
pub struct PushoverResponse {
    pub status: Option<Value>,
    pub request: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl PushoverResponse {
    pub fn is_accepted(&self) -> bool {
        self.status.as_ref().and_then(Value::as_i64) == Some(1)
    }
}
