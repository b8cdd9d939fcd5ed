use crate::error::ImportError;
use crate::model::{ExtractedIngredient, ExtractedRecipeData, Unit};
use crate::providers::{LlmProvider, RECIPE_EXTRACTION_PROMPT};
use log::{debug, info, warn};
use serde_json::Value;

/// Turns free recipe text into [`ExtractedRecipeData`] with one model call.
pub struct StructuredRecipeExtractor {
    provider: Box<dyn LlmProvider>,
}

impl StructuredRecipeExtractor {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Extract a structured recipe from `raw_text`.
    ///
    /// Fails with `ModelUnavailable` when the model call yields no content
    /// and with `MalformedModelOutput` when the content is not a recipe
    /// object. Individual invalid ingredients are dropped, not reported.
    pub async fn extract(&self, raw_text: &str) -> Result<ExtractedRecipeData, ImportError> {
        let provider_name = self.provider.provider_name();
        debug!("Requesting structured extraction from {}", provider_name);

        let content = self
            .provider
            .complete(RECIPE_EXTRACTION_PROMPT, raw_text)
            .await?
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                ImportError::ModelUnavailable(format!("{provider_name} returned no content"))
            })?;

        let recipe = parse_model_output(&content)?;
        info!(
            "Extracted '{}' with {} ingredients",
            recipe.name,
            recipe.ingredients.len()
        );
        Ok(recipe)
    }
}

/// Validate a model response and keep only well-formed ingredients.
pub fn parse_model_output(content: &str) -> Result<ExtractedRecipeData, ImportError> {
    let json: Value = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| ImportError::MalformedModelOutput(format!("not valid JSON: {e}")))?;

    let object = json.as_object().ok_or_else(|| {
        ImportError::MalformedModelOutput("expected a JSON object".to_string())
    })?;

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ImportError::MalformedModelOutput("missing recipe name".to_string()))?;

    let candidates = object
        .get("ingredients")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ImportError::MalformedModelOutput("ingredients is not a list".to_string())
        })?;

    let ingredients = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| match validate_ingredient(candidate) {
            Ok(ingredient) => Some(ingredient),
            Err(reason) => {
                warn!("Dropping ingredient #{}: {}", index, reason);
                None
            }
        })
        .collect();

    Ok(ExtractedRecipeData {
        name: name.to_string(),
        ingredients,
    })
}

fn validate_ingredient(candidate: &Value) -> Result<ExtractedIngredient, String> {
    let unit: Unit = candidate
        .get("unit")
        .and_then(Value::as_str)
        .ok_or("missing unit")?
        .parse()?;

    let quantity = candidate
        .get("quantity")
        .and_then(Value::as_f64)
        .ok_or("quantity is not a number")?;
    if quantity <= 0.0 {
        return Err(format!("quantity {quantity} is not positive"));
    }

    let name = candidate
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or("missing name")?;

    Ok(ExtractedIngredient {
        name: name.to_string(),
        quantity,
        unit,
    })
}

/// Remove one Markdown code fence wrapped around the whole response.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);

    // Language tag such as ```json
    match inner.find('\n') {
        Some(end) if inner[..end].chars().all(|c| c.is_ascii_alphanumeric()) => {
            inner[end + 1..].trim()
        }
        _ => inner.trim(),
    }
}
