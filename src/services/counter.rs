use async_trait::async_trait;
use crate::error::Result;
use crate::models::{AnalysisKind, LetterCounts};
use crate::services::letter_counter::count_letters;

/// Something that turns case-folded text into ordered letter counts.
///
/// The engine holds one implementation per mode and renders whatever order
/// the counter returns.
#[async_trait]
pub trait Counter: Send + Sync {
    async fn count(&self, text: &str, kind: AnalysisKind) -> Result<LetterCounts>;

    fn name(&self) -> &'static str;
}

/// In-process counting, used in offline mode
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalCounter;

#[async_trait]
impl Counter for LocalCounter {
    async fn count(&self, text: &str, kind: AnalysisKind) -> Result<LetterCounts> {
        Ok(count_letters(text, kind))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
