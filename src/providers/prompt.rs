/// The system prompt used for structured recipe extraction.
///
/// It asks for a JSON object with `name` and `ingredients`, lists the unit
/// vocabulary and gives the conversion guidance for units outside of it.
/// The guidance is advisory: nothing checks that a model applied it.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");
