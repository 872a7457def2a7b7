//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::Section;
use crate::api::{self, AppState};
use crate::config::ServerConfig;
use folio_core::{Dataset, FolioError};

// =============================================================================
// DATASET LOADING
// =============================================================================

/// Load the configured dataset file, or the built-in content when none is set.
pub fn load_dataset(config: &ServerConfig) -> Result<Dataset, FolioError> {
    match &config.data_file {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path.display());
            Dataset::from_json_file(path)
        }
        None => Ok(Dataset::builtin()),
    }
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &ServerConfig) -> Result<(), FolioError> {
    let dataset = load_dataset(config)?;

    println!("Folio Portfolio Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:         {}", config.host);
    println!("  Port:         {}", config.port);
    println!("  Frontend:     {}", config.frontend_url);
    println!("  Static dir:   {}", config.static_dir.display());
    match &config.data_file {
        Some(path) => println!("  Dataset:      {}", path.display()),
        None => println!("  Dataset:      built-in"),
    }
    println!();
    println!("Endpoints:");
    println!("  GET  /api/profile       - Profile");
    println!("  GET  /api/skills        - Skills");
    println!("  GET  /api/experiences   - Experience");
    println!("  GET  /api/projects      - Projects");
    println!("  GET  /api/projects/{{id}} - One project");
    println!("  GET  /api/socials       - Social links");
    println!("  POST /api/contact       - Contact form");
    println!("  GET  /api/health        - Health check");
    println!("  GET  /static/*          - Static assets");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory '{}' does not exist; /static requests will 404",
            config.static_dir.display()
        );
    }

    api::run_server(config, AppState::new(dataset)).await
}

// =============================================================================
// DUMP COMMAND
// =============================================================================

/// Render the dataset, or one section, as pretty JSON.
pub fn render_dump(dataset: &Dataset, section: Option<Section>) -> Result<String, FolioError> {
    let rendered = match section {
        None => serde_json::to_string_pretty(dataset),
        Some(Section::Profile) => serde_json::to_string_pretty(dataset.profile()),
        Some(Section::Skills) => serde_json::to_string_pretty(dataset.skills()),
        Some(Section::Experiences) => serde_json::to_string_pretty(dataset.experiences()),
        Some(Section::Projects) => serde_json::to_string_pretty(dataset.projects()),
        Some(Section::Socials) => serde_json::to_string_pretty(dataset.socials()),
    };
    rendered.map_err(|e| FolioError::SerializationError(e.to_string()))
}

/// Print the dataset as JSON.
pub fn cmd_dump(config: &ServerConfig, section: Option<Section>) -> Result<(), FolioError> {
    let dataset = load_dataset(config)?;
    println!("{}", render_dump(&dataset, section)?);
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate the dataset and print record counts.
pub fn cmd_check(config: &ServerConfig) -> Result<(), FolioError> {
    let dataset = load_dataset(config)?;
    let counts = dataset.counts();

    println!("Folio Dataset Check");
    println!("===================");
    match &config.data_file {
        Some(path) => println!("Source:           {}", path.display()),
        None => println!("Source:           built-in"),
    }
    println!();
    println!("Profile:          {}", dataset.profile().name);
    println!(
        "Skill categories: {} ({} skills)",
        counts.skill_categories, counts.skills
    );
    println!("Experiences:      {}", counts.experiences);
    println!("Projects:         {}", counts.projects);
    println!("Social links:     {}", counts.socials);
    println!();
    println!("OK: ids are unique");

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_dataset_when_no_file() {
        let dataset = load_dataset(&ServerConfig::default()).expect("builtin");
        assert_eq!(dataset, Dataset::builtin());
    }

    #[test]
    fn dataset_file_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        let mut value = serde_json::to_value(Dataset::builtin()).expect("serialize");
        value["projects"] = serde_json::json!([]);
        std::fs::write(&path, value.to_string()).expect("write");

        let config = ServerConfig {
            data_file: Some(path),
            ..ServerConfig::default()
        };
        let dataset = load_dataset(&config).expect("load");
        assert!(dataset.projects().is_empty());
        assert_eq!(dataset.experiences().len(), 3);
    }

    #[test]
    fn missing_dataset_file_is_an_error() {
        let config = ServerConfig {
            data_file: Some(PathBuf::from("no/such/data.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(load_dataset(&config), Err(FolioError::IoError(_))));
    }

    #[test]
    fn dump_section_is_a_json_array() {
        let rendered =
            render_dump(&Dataset::builtin(), Some(Section::Socials)).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(5));
        assert_eq!(value[0]["name"], "GitHub");
    }

    #[test]
    fn full_dump_has_every_section() {
        let rendered = render_dump(&Dataset::builtin(), None).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        for key in ["profile", "skills", "experiences", "projects", "socials"] {
            assert!(value.get(key).is_some(), "missing section {}", key);
        }
    }
}
