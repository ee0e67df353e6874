pub mod by_language;
pub mod list;

pub use by_language::{PromptsByLanguageParams, PromptsByLanguageTool};
pub use list::{ListLanguagesParams, ListLanguagesTool};
