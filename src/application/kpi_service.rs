// KPI summary service - one-shot fetch published as loading / error / success states
use crate::application::kpi_source::KpiSource;
use crate::domain::kpi::KpiSummary;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum KpiState {
    Loading,
    Failed(String),
    Ready(KpiSummary),
}

#[derive(Clone)]
pub struct KpiSummaryService {
    source: Arc<dyn KpiSource>,
}

impl KpiSummaryService {
    pub fn new(source: Arc<dyn KpiSource>) -> Self {
        Self { source }
    }

    /// Resolve the final state of a single fetch
    pub async fn fetch(&self) -> KpiState {
        let started = Instant::now();
        match self.source.fetch_summary().await {
            Ok(summary) => {
                tracing::info!(
                    period = %summary.period,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Fetched KPI summary"
                );
                KpiState::Ready(summary)
            }
            Err(e) => {
                tracing::error!("Error fetching KPI summary: {}", e);
                KpiState::Failed(e.to_string())
            }
        }
    }

    /// Publish `Loading` immediately, then the outcome of one fetch
    pub async fn stream_summary(&self) -> mpsc::Receiver<KpiState> {
        let (tx, rx) = mpsc::channel(4);
        let _ = tx.send(KpiState::Loading).await;

        let service = self.clone();
        tokio::spawn(async move {
            let state = service.fetch().await;
            // receiver may be gone if the client disconnected
            let _ = tx.send(state).await;
        });

        rx
    }
}
