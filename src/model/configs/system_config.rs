use crate::common::*;

use crate::enums::metric_kind::*;

fn default_log_index_name() -> String {
    String::from("logger")
}

fn default_time_field() -> String {
    String::from("time")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("plots")
}

fn default_metrics() -> Vec<MetricKind> {
    vec![
        MetricKind::Count,
        MetricKind::Cardinality {
            field: String::from("ip"),
        },
    ]
}

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct SystemConfig {
    #[serde(default = "default_log_index_name")]
    pub log_index_name: String,
    #[serde(default = "default_time_field")]
    pub time_field: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub show_chart: bool,
    #[serde(default = "default_metrics")]
    pub metrics: Vec<MetricKind>,
}
