//! Vowel and consonant counting, online or offline.
//!
//! [`AnalysisEngine`] counts either in-process or through the counting
//! service in [`handlers`], and renders both the same way.

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod shell;

pub use error::{AnalysisError, Result};
pub use models::{AnalysisKind, LetterCounts, Mode};
pub use services::counter::{Counter, LocalCounter};
pub use services::engine::{analyze_offline, AnalysisEngine};
pub use services::mode_selector::ModeSelector;
pub use services::remote_counter::{ClientConfig, RemoteCounter};
