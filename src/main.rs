use clap::Parser;
use vpm_site::core::LinkOpener;
use vpm_site::utils::error::ErrorSeverity;
use vpm_site::utils::{logger, validation::Validate};
use vpm_site::{build_site, load_gallery, CliConfig, Command, SiteError, TomlConfig};

/// The CLI has no browser to hand off to; links are printed instead.
struct StdoutOpener;

impl LinkOpener for StdoutOpener {
    fn open_new_context(&self, url: &str) {
        println!("{}", url);
    }

    fn navigate(&self, url: &str) {
        println!("{}", url);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vpm-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command(), &config).await {
        if e.severity() == ErrorSeverity::Low {
            tracing::warn!("{}", e);
            return Ok(());
        }

        tracing::error!(
            "vpm-site failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

async fn run(command: Command, config: &TomlConfig) -> Result<(), SiteError> {
    match command {
        Command::Build => {
            let report = build_site(config).await?;
            println!("✅ Site built in {}", report.output_path);
            for file in report.files() {
                println!("  {}", file);
            }
            if let Some(archive) = &report.archive {
                println!("📦 Archive: {}", archive);
            }
        }
        Command::Search { query } => {
            let gallery = load_gallery(config).await?;
            let visible = gallery.visible(&query);
            println!("{} of {} packages match \"{}\"", visible.len(), gallery.len(), query);
            for package in visible {
                println!("  {:<40} {:<24} {}", package.id, package.display_name, package.version);
            }
        }
        Command::Info { id } => {
            let gallery = load_gallery(config).await?;
            let detail = gallery.detail(&id)?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Command::Download { id } => {
            let gallery = load_gallery(config).await?;
            gallery.download(&id, &StdoutOpener)?;
        }
        Command::AddRepoUrl => {
            let gallery = load_gallery(config).await?;
            gallery.add_repo(&StdoutOpener);
        }
    }
    Ok(())
}
