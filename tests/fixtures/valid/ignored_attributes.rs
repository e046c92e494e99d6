use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, bound = "T: Serialize")]
pub struct Envelope<T> {
    #[serde(default)]
    pub retries: u8,
    #[serde(with = "humantime_serde", alias = "wait")]
    pub delay: std::time::Duration,
    #[serde(rename(serialize = "body", deserialize = "payload"))]
    pub inner: T,
}

#[derive(Serialize)]
#[serde(crate = "serde", rename_all(serialize = "lowercase"))]
pub enum Level {
    #[serde(alias = "warning")]
    Warn,
    Error,
}
