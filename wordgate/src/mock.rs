//! Mock word translator for testing
//!
//! A deterministic, network-free translator used to exercise the HTTP layer
//! and the normalization pipeline without reaching the real endpoint.
//!
//! # Example
//!
//! ```ignore
//! use wordgate::{MockMode, MockTranslator, WordTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Echo);
//!     let result = mock.translate("ev").await.unwrap();
//!     assert_eq!(result, "ev");
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::translator::WordTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Look the word up in a fixed table; unknown words fail with
    /// `NoTranslation`
    Mappings(HashMap<String, String>),

    /// Always fail with the given error
    Error(TranslateError),

    /// Return the word unchanged
    Echo,
}

/// Mock translator that records every word it was asked to translate
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    received: Mutex<Vec<String>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Words passed to `translate`, in call order
    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl WordTranslator for MockTranslator {
    async fn translate(&self, word: &str) -> TranslateResult<String> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(word.to_string());

        match &self.mode {
            MockMode::Mappings(map) => map.get(word).cloned().ok_or(TranslateError::NoTranslation),
            MockMode::Error(err) => Err(err.clone()),
            MockMode::Echo => Ok(word.to_string()),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
