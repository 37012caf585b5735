#![cfg(feature = "cli")]

use anyhow::Result;
use color_mixer::core::Pipeline;
use color_mixer::{
    CliConfig, LocalStorage, MixEngine, MixerError, MixerPipeline, OutputFormat, RejectionKind,
    TokenOrigin, TomlConfig,
};
use tempfile::TempDir;

fn cli_config(colors: &[&str]) -> CliConfig {
    CliConfig {
        colors: colors.iter().map(|c| c.to_string()).collect(),
        mode: "mix".to_string(),
        file: "colors.txt".to_string(),
        no_file: false,
        format: OutputFormat::Text,
        precision: 2,
        output: None,
        verbose: false,
        log_json: false,
    }
}

fn storage_in(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_file_then_cli_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("colors.txt"), "#ff0000\n\nnot-a-color\n00ff00\n")?;

    let pipeline = MixerPipeline::new(storage_in(&temp_dir), cli_config(&["0000ff"]));
    let tokens = pipeline.extract().await?;

    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["#ff0000", "not-a-color", "00ff00", "0000ff"]);
    assert_eq!(tokens[2].origin, TokenOrigin::File { line: 4 });
    assert_eq!(tokens[3].origin, TokenOrigin::Cli { position: 1 });

    let outcome = pipeline.transform(tokens).await?;
    assert_eq!(outcome.accepted, 3);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].kind, RejectionKind::Format);
    assert_eq!(outcome.result.hex, "#555555ff");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_text_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = cli_config(&["ff0000ff", "0000ffff"]);
    config.no_file = true;

    let engine = MixEngine::new(MixerPipeline::new(storage_in(&temp_dir), config));
    let report = engine.run().await?;

    assert!(report.contains("RED: 128\n"));
    assert!(report.contains("GREEN: 0\n"));
    assert!(report.contains("BLUE: 128\n"));
    assert!(report.contains("ALPHA: 255\n"));
    assert!(report.contains("HEX: #800080ff\n"));

    Ok(())
}

#[tokio::test]
async fn test_missing_colors_file_uses_cli_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = cli_config(&["abc"]);

    let engine = MixEngine::new(MixerPipeline::new(storage_in(&temp_dir), config));
    let report = engine.run().await?;

    assert!(report.contains("HEX: #aabbccff"));
    Ok(())
}

#[tokio::test]
async fn test_no_valid_colors_aborts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("colors.txt"), "zz0000\n256,0,0,255\n")?;

    let engine = MixEngine::new(MixerPipeline::new(storage_in(&temp_dir), cli_config(&[])));
    let result = engine.run().await;

    assert!(matches!(result, Err(MixerError::EmptyInputError)));
    Ok(())
}

#[tokio::test]
async fn test_mix_saturate_with_one_color_aborts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = cli_config(&["ff0000", "nope"]);
    config.mode = "mix-saturate".to_string();
    config.no_file = true;

    let engine = MixEngine::new(MixerPipeline::new(storage_in(&temp_dir), config));

    assert!(matches!(
        engine.run().await,
        Err(MixerError::InsufficientInputError { found: 1, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_json_report_written_to_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = cli_config(&["10,20,30,40", "30,40,50,60", "300,0,0,0"]);
    config.mode = "highest".to_string();
    config.no_file = true;
    config.format = OutputFormat::Json;
    config.output = Some("reports/mix.json".to_string());

    let engine = MixEngine::new(MixerPipeline::new(storage_in(&temp_dir), config));
    let report = engine.run().await?;

    let written = std::fs::read_to_string(temp_dir.path().join("reports/mix.json"))?;
    assert_eq!(written, report);

    let value: serde_json::Value = serde_json::from_str(&report)?;
    assert_eq!(value["mode"], "highest");
    assert_eq!(value["result"]["hex"], "#1e28323c");
    assert_eq!(value["accepted"], 2);
    assert_eq!(value["rejected"][0]["kind"], "range");
    assert_eq!(value["rejected"][0]["origin"]["source"], "cli");
    assert_eq!(value["rejected"][0]["origin"]["position"], 3);

    Ok(())
}

#[tokio::test]
async fn test_toml_config_pipeline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("palette.txt"), "000000\n")?;

    let config = TomlConfig::from_toml_str(
        r##"
[mixer]
mode = "lowest"
colors_file = "palette.txt"
colors = ["#ffffff80"]
"##,
    )?;

    let engine = MixEngine::new(MixerPipeline::new(storage_in(&temp_dir), config));
    let report = engine.run().await?;

    assert!(report.contains("HEX: #00000080"));
    Ok(())
}
