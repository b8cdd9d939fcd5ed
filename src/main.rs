use log::error;
use recipe_ingest::{
    ExtractedRecipeData, ImportConfig, ImportError, ImportResult, RecipeImporter, RecipeScraper,
    SiteMetadataExtractor,
};
use std::env;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

const USAGE: &str = "Usage: recipe-ingest <metadata|scrape|import> <url>\n       recipe-ingest extract <file|->";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (Some(command), Some(target)) = (args.get(1), args.get(2)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(command, target).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{command} failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: &str, target: &str) -> Result<String, ImportError> {
    let config = ImportConfig::load()?;

    match command {
        "metadata" => {
            let metadata = SiteMetadataExtractor::new(&config)?.extract(target).await?;
            to_json(&metadata)
        }
        "scrape" => {
            let scraped = RecipeScraper::new(&config)?.scrape(target).await?;
            Ok(scraped.into_inner())
        }
        "extract" => {
            let text = read_input(target).await?;
            let result = RecipeImporter::builder()
                .config(config)
                .text(text)
                .build()
                .await?;
            to_json(&structured(result)?)
        }
        "import" => {
            let result = RecipeImporter::builder()
                .config(config)
                .url(target)
                .build()
                .await?;
            to_json(&structured(result)?)
        }
        _ => Err(ImportError::BuilderError(format!(
            "Unknown command '{command}'\n{USAGE}"
        ))),
    }
}

fn structured(result: ImportResult) -> Result<ExtractedRecipeData, ImportError> {
    let ImportResult::Recipe(recipe) = result else {
        return Err(ImportError::BuilderError(
            "Expected a structured recipe".to_string(),
        ));
    };
    Ok(recipe)
}

async fn read_input(target: &str) -> Result<String, ImportError> {
    let mut text = String::new();
    let result = if target == "-" {
        tokio::io::stdin().read_to_string(&mut text).await.map(|_| text)
    } else {
        tokio::fs::read_to_string(target).await
    };
    result.map_err(|e| ImportError::BuilderError(format!("Failed to read {target}: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ImportError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ImportError::BuilderError(format!("Failed to serialize output: {e}")))
}
