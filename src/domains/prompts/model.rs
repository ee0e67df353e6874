//! Prompt data model.
//!
//! A [`Prompt`] is the unit every provider produces and the registry serves.
//! The serialized form omits `arguments` when empty and `language` when unset.

use serde::{Deserialize, Serialize};

/// A named block of instructional text plus optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// The unique lookup key of the prompt.
    pub name: String,

    /// A human-readable summary of the prompt.
    pub description: String,

    /// The arguments this prompt declares.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<PromptArgument>,

    /// The prompt body delivered to callers.
    pub content: String,

    /// Optional language tag (e.g. `golang`, `rust`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A single declared prompt argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl Prompt {
    /// Create a prompt without arguments or language tag.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
            content: content.into(),
            language: None,
        }
    }

    /// Set the language tag. An empty tag leaves the prompt untagged.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.language = if language.is_empty() {
            None
        } else {
            Some(language)
        };
        self
    }

    /// Append an argument declaration.
    #[cfg(test)]
    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.arguments.push(PromptArgument {
            name: name.into(),
            description: description.into(),
            required,
        });
        self
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Convert to the rmcp listing model.
    pub fn to_mcp(&self) -> rmcp::model::Prompt {
        rmcp::model::Prompt {
            name: self.name.clone(),
            title: None,
            description: Some(self.description.clone()),
            arguments: Some(
                self.arguments
                    .iter()
                    .map(|arg| rmcp::model::PromptArgument {
                        name: arg.name.clone(),
                        title: None,
                        description: Some(arg.description.clone()),
                        required: Some(arg.required),
                    })
                    .collect(),
            ),
            icons: None,
            meta: None,
        }
    }
}
