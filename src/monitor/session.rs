use std::sync::atomic::{AtomicU64, Ordering};

use super::{Analyzer, CodeEventResult, MonitorRequest};

/// Wraps an [`Analyzer`] so that only the latest submitted analysis reports back.
///
/// Each `submit` takes a new generation. When a newer submission starts before an
/// older one completes, the older result is discarded. Dropping the returned future
/// cancels the in-flight request.
#[derive(Debug)]
pub struct AnalysisSession {
    analyzer: Analyzer,
    generation: AtomicU64,
}

impl AnalysisSession {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn submit(&self, request: &MonitorRequest) -> Option<CodeEventResult> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.analyzer.analyze(request).await;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(result)
        } else {
            tracing::debug!(ticket, "discarding superseded analysis");
            None
        }
    }
}
