//! Turkish to English word translation
//!
//! This crate folds Turkish diacritics out of a word, sends it to Google's
//! unauthenticated gtx translation endpoint and pulls the translated text out
//! of the nested array the endpoint answers with.
//!
//! # Workflow Example
//!
//! ```ignore
//! use wordgate::{GoogleTranslateProvider, translate_word};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create the provider (one pooled HTTP client)
//!     let provider = GoogleTranslateProvider::with_defaults()?;
//!
//!     // 2. Normalize and translate
//!     let result = translate_word(&provider, "köprü").await?;
//!
//!     println!("Result: {}", result); // "bridge"
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod google_translate;
pub mod mock;
pub mod normalize;
pub mod response;
pub mod translator;

// Re-export main types for convenient access
pub use error::{TranslateError, TranslateResult};
pub use google_translate::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, GoogleTranslateProvider};
pub use mock::{MockMode, MockTranslator};
pub use normalize::{fold_char, normalize};
pub use response::{Node, extract_translation};
pub use translator::{SOURCE_LANGUAGE, TARGET_LANGUAGE, WordTranslator, translate_word};
