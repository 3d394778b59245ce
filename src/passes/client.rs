use crate::passes::error::{FetchError, ReportError};
use crate::passes::source::DataSource;
use crate::passes::types::VisualPassReport;

/// Reports obtained by a batch fetch, up to the first failure
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub reports: Vec<VisualPassReport>,
    pub error: Option<ReportError>,
}

pub struct PassClient {
    source: DataSource,
}

impl PassClient {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub async fn fetch_report(&self, satellite_id: u32) -> Result<VisualPassReport, ReportError> {
        let wrap = |source: FetchError| ReportError {
            satellite_id,
            source,
        };

        let raw = self.source.fetch_raw(satellite_id).await.map_err(wrap)?;
        let report = serde_json::from_slice(&raw).map_err(|e| wrap(e.into()))?;
        Ok(report)
    }

    /// Fetch each satellite in order, stopping at the first failure.
    pub async fn fetch_reports(&self, satellite_ids: &[u32]) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();

        for &id in satellite_ids {
            match self.fetch_report(id).await {
                Ok(report) => outcome.reports.push(report),
                Err(e) => {
                    outcome.error = Some(e);
                    break;
                }
            }
        }

        outcome
    }
}
