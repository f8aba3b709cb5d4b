use crate::common::*;

/* date_histogram 하위의 cardinality 집계 이름 */
pub const DISTINCT_AGG_NAME: &str = "unique_ips";

#[doc = r#"
    일별로 집계할 지표의 종류.

    * `Count` - 버킷의 doc_count (일별 요청 수)
    * `Cardinality` - 버킷 내 `field` 의 고유값 개수 (일별 고유 방문자 수)
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetricKind {
    Count,
    Cardinality { field: String },
}

impl MetricKind {
    #[doc = "응답의 aggregations 에서 버킷을 찾을 때 쓰는 histogram 집계 이름"]
    pub fn histogram_agg_name(&self) -> &'static str {
        match self {
            MetricKind::Count => "documents_per_day",
            MetricKind::Cardinality { .. } => "unique_visitors_per_day",
        }
    }

    #[doc = r#"
        산출물 파일명 prefix.
        cardinality 는 필드마다 다른 이름을 가져야 같은 초에 쓴 두 차트가 충돌하지 않는다.
        `ip` 필드는 기존 파일명(`plot_unique_requests_per_day`)을 유지한다.
    "#]
    pub fn base_name(&self) -> String {
        match self {
            MetricKind::Count => String::from("plot_requests_per_day"),
            MetricKind::Cardinality { field } if field.eq_ignore_ascii_case("ip") => {
                String::from("plot_unique_requests_per_day")
            }
            MetricKind::Cardinality { field } => {
                let field_slug: String = field
                    .chars()
                    .map(|c| {
                        if c.is_ascii_alphanumeric() {
                            c.to_ascii_lowercase()
                        } else {
                            '_'
                        }
                    })
                    .collect();
                format!("plot_unique_{}_per_day", field_slug)
            }
        }
    }

    pub fn y_label(&self) -> String {
        match self {
            MetricKind::Count => String::from("Request Count"),
            MetricKind::Cardinality { field } => format!("Unique {} Count", field.to_uppercase()),
        }
    }

    pub fn title(&self, window_days: i64) -> String {
        match self {
            MetricKind::Count => {
                format!("Request Count per Day for the Last {} Days", window_days)
            }
            MetricKind::Cardinality { field } => format!(
                "Unique {}s per Day for the Last {} Days",
                field.to_uppercase(),
                window_days
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_metric_kind() {
        let count: MetricKind = MetricKind::Count;
        assert_eq!(count.y_label(), "Request Count");
        assert_eq!(
            count.title(30),
            "Request Count per Day for the Last 30 Days"
        );
        assert_eq!(count.base_name(), "plot_requests_per_day");

        let unique: MetricKind = MetricKind::Cardinality {
            field: String::from("ip"),
        };
        assert_eq!(unique.y_label(), "Unique IP Count");
        assert_eq!(unique.title(30), "Unique IPs per Day for the Last 30 Days");
        assert_eq!(unique.base_name(), "plot_unique_requests_per_day");
    }

    #[test]
    fn cardinality_base_name_depends_on_field() {
        let agent: MetricKind = MetricKind::Cardinality {
            field: String::from("user_agent.keyword"),
        };
        let session: MetricKind = MetricKind::Cardinality {
            field: String::from("Session-Id"),
        };

        assert_eq!(agent.base_name(), "plot_unique_user_agent_keyword_per_day");
        assert_eq!(session.base_name(), "plot_unique_session_id_per_day");
        assert_ne!(
            agent.base_name(),
            MetricKind::Cardinality {
                field: String::from("ip")
            }
            .base_name()
        );
    }
}
