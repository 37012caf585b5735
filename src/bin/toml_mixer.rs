use clap::Parser;
use color_mixer::config::cli::LocalStorage;
use color_mixer::config::toml_config::TomlConfig;
use color_mixer::core::{ConfigProvider, Pipeline};
use color_mixer::utils::{logger, validation::Validate};
use color_mixer::{MixEngine, MixerPipeline, OutputFormat};

#[derive(Parser)]
#[command(name = "toml-mixer")]
#[command(about = "Color mixer driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "mixer.toml")]
    config: String,

    /// Override the mode from the config
    #[arg(short, long)]
    mode: Option<String>,

    /// Override the output format from the config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show which colors would be mixed without mixing them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if let Some(mode) = &args.mode {
        config.set_mode(mode);
        tracing::info!("🔧 Mode overridden to: {}", mode);
    }
    if let Some(format) = args.format {
        config.set_output_format(format);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    let pipeline = MixerPipeline::new(LocalStorage::default(), config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No colors will be mixed");
        perform_dry_run(&pipeline).await?;
        return Ok(());
    }

    let engine = MixEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            print!("{}", report);
        }
        Err(e) => {
            tracing::error!(
                "❌ Color mixing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    eprintln!("📋 Configuration Summary:");
    eprintln!("  Mode: {}", config.mode_name());
    eprintln!(
        "  Colors file: {}",
        config.colors_file().unwrap_or("(none)")
    );
    eprintln!("  Inline colors: {}", config.cli_colors().len());
    eprintln!("  Format: {:?}", config.output_format());
    eprintln!("  Precision: {}", config.precision());
    if let Some(path) = config.output_path() {
        eprintln!("  Output: {}", path);
    }
    eprintln!();
}

async fn perform_dry_run<P: Pipeline>(pipeline: &P) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = pipeline.extract().await?;

    println!("🔍 Dry Run Analysis:");
    println!("  {} color tokens would be mixed:", tokens.len());
    for token in &tokens {
        println!("  {} ({})", token.text.trim(), token.origin);
    }

    Ok(())
}
