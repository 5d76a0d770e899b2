//! Word translation trait
//!
//! This module defines the `WordTranslator` trait so the HTTP layer can be
//! driven by the real gtx client or by a deterministic mock, without
//! depending on either.
//!
//! # Example
//!
//! ```ignore
//! use wordgate::{GoogleTranslateProvider, translate_word};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::with_defaults()?;
//!     let result = translate_word(&provider, "güzel").await?;
//!     println!("{}", result); // "beautiful"
//!     Ok(())
//! }
//! ```

use crate::error::TranslateResult;
use crate::normalize::normalize;
use async_trait::async_trait;
use tracing::debug;

/// Language the incoming words are written in
pub const SOURCE_LANGUAGE: &str = "tr";

/// Language the words are translated into
pub const TARGET_LANGUAGE: &str = "en";

/// Translates a single, already normalized word from Turkish to English
///
/// Implementations must be usable from many concurrent requests at once;
/// no call may depend on another.
#[async_trait]
pub trait WordTranslator: Send + Sync {
    /// Translate one word
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text, possibly empty
    /// * `Err(TranslateError)` - Transport, upstream or parsing failure
    async fn translate(&self, word: &str) -> TranslateResult<String>;

    /// Name of this provider, for logging
    fn provider_name(&self) -> &str;
}

/// Normalize `word` and translate it with `translator`
///
/// This is the whole request pipeline: diacritic folding followed by one
/// translation call.
pub async fn translate_word<T>(translator: &T, word: &str) -> TranslateResult<String>
where
    T: WordTranslator + ?Sized,
{
    let normalized = normalize(word);
    debug!(
        "Translating '{}' (normalized '{}') with {}",
        word,
        normalized,
        translator.provider_name()
    );
    translator.translate(&normalized).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;
    use crate::mock::{MockMode, MockTranslator};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_translate_word_normalizes_first() {
        let mock = MockTranslator::new(MockMode::Echo);
        let result = translate_word(&mock, "çiçek").await.unwrap();
        assert_eq!(result, "cicek");
        assert_eq!(mock.received(), vec!["cicek".to_string()]);
    }

    #[tokio::test]
    async fn test_translate_word_uses_mapping() {
        let mut map = HashMap::new();
        map.insert("kopek".to_string(), "dog".to_string());
        let mock = MockTranslator::new(MockMode::Mappings(map));
        assert_eq!(translate_word(&mock, "köpek").await.unwrap(), "dog");
    }

    #[tokio::test]
    async fn test_translate_word_propagates_error() {
        let mock = MockTranslator::new(MockMode::Error(TranslateError::InvalidRequest));
        assert_eq!(
            translate_word(&mock, "ev").await,
            Err(TranslateError::InvalidRequest)
        );
    }

    #[tokio::test]
    async fn test_translate_word_through_trait_object() {
        let mock: Box<dyn WordTranslator> = Box::new(MockTranslator::new(MockMode::Echo));
        assert_eq!(translate_word(mock.as_ref(), "üzüm").await.unwrap(), "uzum");
    }
}
