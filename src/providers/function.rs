use crate::error::ImportError;
use crate::providers::LlmProvider;
use async_trait::async_trait;

/// Adapts a plain function from (system, user) prompt text to completion
/// text into an [`LlmProvider`].
///
/// # Example
/// ```
/// use recipe_ingest::providers::{FnProvider, LlmProvider};
///
/// let provider = FnProvider::new(|_system: &str, _user: &str| {
///     Some(r#"{"name":"Toast","ingredients":[]}"#.to_string())
/// });
/// assert_eq!(provider.provider_name(), "function");
/// ```
pub struct FnProvider<F> {
    name: String,
    complete: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    pub fn new(complete: F) -> Self {
        Self::named("function", complete)
    }

    pub fn named(name: impl Into<String>, complete: F) -> Self {
        FnProvider {
            name: name.into(),
            complete,
        }
    }
}

#[async_trait]
impl<F> LlmProvider for FnProvider<F>
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, system: &str, user: &str) -> Result<Option<String>, ImportError> {
        Ok((self.complete)(system, user))
    }
}
