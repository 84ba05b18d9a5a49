use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use crate::config::settings::Config;
use crate::error::{ErrorKind, LeetError};
use crate::store::{write_empty_array, DataStore};

/// Starter catalog written by `init` when no problems.json exists
pub const BUNDLED_PROBLEMS: &str = include_str!("../../assets/problems.json");

#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub wrote_catalog: bool,
    pub created_solved: bool,
    pub created_history: bool,
    pub stored_key: bool,
}

pub async fn run(store: &DataStore) -> Result<(), LeetError> {
    let api_key = prompt_api_key().await?;
    let report = bootstrap(store, &api_key).await?;

    if !report.stored_key {
        eprintln!(
            "⚠️ No API key entered; `suggest` needs one. Run `leetlog init` again to add it."
        );
    }
    if report.wrote_catalog {
        println!("📚 Wrote starter catalog to {}", store.problems_path().display());
    }
    println!("✅ leetlog successfully initialized in {}", store.dir().display());
    Ok(())
}

async fn prompt_api_key() -> Result<String, LeetError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Enter your Gemini API Key: ").await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

/// Create the data directory and any missing files. Existing catalog, solved
/// and history files are never overwritten. A blank `api_key` keeps whatever
/// key is already stored.
pub async fn bootstrap(store: &DataStore, api_key: &str) -> Result<InitReport, LeetError> {
    tokio::fs::create_dir_all(store.dir())
        .await
        .map_err(|e| LeetError::io(
            format!("Failed to create data directory: {}", e),
            "init"
        ).with_context(format!("path: {:?}", store.dir())))?;

    let config_path = store.config_path();
    let mut config = match Config::load(&config_path).await {
        Ok(config) => config,
        Err(e) if e.is(ErrorKind::Config) => {
            tracing::warn!(error = %e, "Replacing unreadable config.json");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    if !api_key.trim().is_empty() {
        config.api_key = api_key.trim().to_string();
    }
    config.save(&config_path).await?;

    let mut report = InitReport {
        stored_key: config.api_key().is_some(),
        ..InitReport::default()
    };

    let problems_path = store.problems_path();
    if !exists(&problems_path).await {
        tokio::fs::write(&problems_path, BUNDLED_PROBLEMS)
            .await
            .map_err(|e| LeetError::io(
                format!("Failed to write problems.json: {}", e),
                "init"
            ))?;
        report.wrote_catalog = true;
    }

    let solved_path = store.solved_path();
    if !exists(&solved_path).await {
        write_empty_array(&solved_path).await?;
        report.created_solved = true;
    }

    let history_path = store.history_path();
    if !exists(&history_path).await {
        write_empty_array(&history_path).await?;
        report.created_history = true;
    }

    tracing::info!(report = ?report, "Initialized data directory");
    Ok(report)
}

async fn exists(path: &std::path::Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
