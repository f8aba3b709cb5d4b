use crate::common::*;

/* cardinality 집계가 큰 윈도우에서는 수 분 걸리기도 한다. */
pub const MIN_REQUEST_TIMEOUT_SEC: u64 = 600;

fn default_request_timeout_sec() -> u64 {
    MIN_REQUEST_TIMEOUT_SEC
}

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct ElasticServerConfig {
    pub elastic_host: Vec<String>,
    pub elastic_id: Option<String>,
    pub elastic_pw: Option<String>,
    #[serde(default = "default_request_timeout_sec")]
    pub request_timeout_sec: u64,
}
