// Source trait for the precomputed KPI summary
use crate::domain::kpi::KpiSummary;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum KpiFetchError {
    #[error("Falha ao conectar à API: {0}")]
    Request(String),

    #[error("Falha ao buscar os dados da API")]
    Status(u16),

    #[error("Resposta inválida da API: {0}")]
    Decode(String),
}

#[async_trait]
pub trait KpiSource: Send + Sync {
    /// Fetch the aggregate KPI record (single attempt, no retry)
    async fn fetch_summary(&self) -> Result<KpiSummary, KpiFetchError>;
}
