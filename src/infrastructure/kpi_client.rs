// HTTP client for the remote KPI summary endpoint
use crate::application::kpi_source::{KpiFetchError, KpiSource};
use crate::domain::kpi::KpiSummary;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

const KPI_SUMMARY_PATH: &str = "/metricas/kpis-gerais";

#[derive(Debug, Clone)]
pub struct HttpKpiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpKpiClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build KPI HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn summary_url(&self) -> String {
        format!("{}{}", self.base_url, KPI_SUMMARY_PATH)
    }
}

#[async_trait]
impl KpiSource for HttpKpiClient {
    async fn fetch_summary(&self) -> Result<KpiSummary, KpiFetchError> {
        let url = self.summary_url();
        tracing::debug!("Requesting KPI summary from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| KpiFetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = status.as_u16(), "KPI endpoint returned non-success status");
            return Err(KpiFetchError::Status(status.as_u16()));
        }

        response
            .json::<KpiSummary>()
            .await
            .map_err(|e| KpiFetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn client(base_url: String) -> HttpKpiClient {
        HttpKpiClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_summary_url_strips_trailing_slash() {
        let client = client("https://api.example.com/".to_string());
        assert_eq!(client.summary_url(), "https://api.example.com/metricas/kpis-gerais");
    }

    #[tokio::test]
    async fn test_fetch_summary_success() {
        let router = Router::new().route(
            KPI_SUMMARY_PATH,
            get(|| async {
                Json(serde_json::json!({
                    "periodo": "2024-06",
                    "faturamento_bruto": 1000.0,
                    "total_descontos": 10.0,
                    "total_devolucoes": 5.0,
                    "faturamento_liquido": 985.0,
                    "ticket_medio": 98.5,
                    "lucratividade_media": 0.2,
                    "total_pedidos_vendas": 10
                }))
            }),
        );
        let base = serve(router).await;

        let summary = client(base).fetch_summary().await.unwrap();
        assert_eq!(summary.period, "2024-06");
        assert_eq!(summary.total_orders, 10);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let router = Router::new().route(
            KPI_SUMMARY_PATH,
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;

        match client(base).fetch_summary().await {
            Err(KpiFetchError::Status(500)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route(KPI_SUMMARY_PATH, get(|| async { "not json" }));
        let base = serve(router).await;

        assert!(matches!(
            client(base).fetch_summary().await,
            Err(KpiFetchError::Decode(_))
        ));
    }
}
