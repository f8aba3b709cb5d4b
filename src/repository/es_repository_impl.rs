use crate::common::*;

use crate::model::configs::elastic_server_config::*;

use crate::traits::repository_traits::es_repository::*;

#[derive(Debug, Getters, Clone)]
pub struct EsRepositoryImpl {
    es_clients: Vec<EsClient>,
    request_timeout: Duration,
}

#[derive(Debug, Getters, Clone, new)]
pub(crate) struct EsClient {
    host: String,
    es_conn: Elasticsearch,
}

impl EsRepositoryImpl {
    pub fn new(es_config: &ElasticServerConfig) -> Result<Self, anyhow::Error> {
        if es_config.elastic_host.is_empty() {
            return Err(anyhow!(
                "[EsRepositoryImpl->new] at least one elastic_host must be configured"
            ));
        }

        let timeout_sec: u64 = es_config.request_timeout_sec;
        let request_timeout: Duration = Duration::from_secs(timeout_sec);
        if timeout_sec < MIN_REQUEST_TIMEOUT_SEC {
            warn!(
                "[EsRepositoryImpl->new] request_timeout_sec={} is below {}s; cardinality aggregations may time out",
                timeout_sec, MIN_REQUEST_TIMEOUT_SEC
            );
        }

        let mut es_clients: Vec<EsClient> = Vec::new();

        for url in &es_config.elastic_host {
            let parse_url: String = if let (Some(id), Some(pw)) = (
                es_config.elastic_id.as_deref(),
                es_config.elastic_pw.as_deref(),
            ) {
                format!("http://{}:{}@{}", id, encode(pw), url)
            } else {
                format!("http://{}", url)
            };

            let es_url: Url = Url::parse(&parse_url)?;
            let conn_pool: SingleNodeConnectionPool = SingleNodeConnectionPool::new(es_url);
            let transport: EsTransport = TransportBuilder::new(conn_pool)
                .timeout(request_timeout)
                .build()?;

            let elastic_conn: Elasticsearch = Elasticsearch::new(transport);
            es_clients.push(EsClient::new(url.to_string(), elastic_conn));
        }

        Ok(EsRepositoryImpl {
            es_clients,
            request_timeout,
        })
    }

    #[doc = "Common logic: common node failure handling and node selection"]
    async fn execute_on_any_node<F, Fut>(&self, operation: F) -> Result<Response, anyhow::Error>
    where
        F: Fn(EsClient) -> Fut + Send + Sync,
        Fut: Future<Output = Result<Response, anyhow::Error>> + Send,
    {
        let mut last_error: Option<anyhow::Error> = None;

        let mut rng: StdRng = StdRng::from_entropy();
        let mut shuffled_clients: Vec<EsClient> = self.es_clients.clone();
        shuffled_clients.shuffle(&mut rng);

        for es_client in shuffled_clients {
            let host: String = es_client.host.clone();

            match operation(es_client).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    warn!("[EsRepositoryImpl] node '{}' failed: {:?}", host, err);
                    last_error = Some(err);
                }
            }
        }

        Err(anyhow!(
            "All Elasticsearch nodes failed. Last error: {:?}",
            last_error
        ))
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "Function that EXECUTES elasticsearch queries - search"]
    async fn get_search_query(
        &self,
        es_query: &Value,
        index_name: &str,
    ) -> Result<Value, anyhow::Error> {
        let response: Response = self
            .execute_on_any_node(|es_client| async move {
                let response: Response = es_client
                    .es_conn
                    .search(SearchParts::Index(&[index_name]))
                    .body(es_query)
                    .send()
                    .await?;

                Ok(response)
            })
            .await?;

        if response.status_code().is_success() {
            let response_body: Value = response.json::<Value>().await?;
            Ok(response_body)
        } else {
            let status: u16 = response.status_code().as_u16();
            let error_body: String = response.text().await?;
            Err(anyhow!(
                "[Elasticsearch Error][get_search_query()] index '{}' responded {}: {}",
                index_name,
                status,
                error_body
            ))
        }
    }
}
