use crate::error::{AnalysisError, Result};
use crate::models::{AnalysisKind, AnalysisRequest, Mode};
use crate::services::counter::{Counter, LocalCounter};
use crate::services::letter_counter::count_letters;
use crate::services::render::render_counts;

/// Dual-mode analysis: one counter per mode, one rendering for both
pub struct AnalysisEngine {
    local: Box<dyn Counter>,
    remote: Box<dyn Counter>,
}

impl AnalysisEngine {
    /// Offline analysis runs in-process; online analysis goes through `remote`
    pub fn new(remote: impl Counter + 'static) -> Self {
        AnalysisEngine::with_counters(LocalCounter, remote)
    }

    pub fn with_counters(local: impl Counter + 'static, remote: impl Counter + 'static) -> Self {
        AnalysisEngine {
            local: Box::new(local),
            remote: Box::new(remote),
        }
    }

    pub fn counter_for(&self, mode: Mode) -> &dyn Counter {
        match mode {
            Mode::Online => self.remote.as_ref(),
            Mode::Offline => self.local.as_ref(),
        }
    }

    /// Analyze `text` with the counter for `mode` and render the result.
    ///
    /// The mode is taken by value so a later toggle cannot reroute this call.
    /// Remote failures are returned as is, never retried offline.
    pub async fn analyze(&self, text: &str, kind: AnalysisKind, mode: Mode) -> Result<String> {
        if text.is_empty() {
            return Err(AnalysisError::InvalidInput);
        }
        let request = AnalysisRequest::new(text, kind);
        let counts = self.counter_for(mode).count(&request.text, request.kind).await?;
        Ok(render_counts(&counts))
    }
}

/// Offline analysis without an engine or a runtime
pub fn analyze_offline(text: &str, kind: AnalysisKind) -> Result<String> {
    if text.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }
    let request = AnalysisRequest::new(text, kind);
    Ok(render_counts(&count_letters(&request.text, request.kind)))
}
