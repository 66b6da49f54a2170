use clap::Parser;
use portfolio_site::domain::ports::ContentSource;
use portfolio_site::utils::error::{ErrorSeverity, SiteError};
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    BuiltinContent, CliConfig, ContentFile, FileContent, LocalStorage, SiteBuilder, SitePipeline,
};

fn exit_code(e: &SiteError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(context: &str, e: &SiteError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting portfolio-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
    }

    let source: Box<dyn ContentSource> = match &config.content {
        Some(path) => {
            tracing::info!("📁 Loading content from: {}", path);
            Box::new(FileContent::new(path))
        }
        None => {
            tracing::info!("📁 Using built-in sample content");
            Box::new(BuiltinContent)
        }
    };

    if config.dump_content {
        let dumped = source
            .load()
            .and_then(|site| ContentFile::from(site).render_as(config.dump_format));
        match dumped {
            Ok(text) => {
                println!("{}", text);
                return Ok(());
            }
            Err(e) => report_failure("Could not dump content", &e),
        }
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let dry_run = config.dry_run;
    let builder = SiteBuilder::new(SitePipeline::new(storage, config, source));

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match builder.preview().await {
            Ok(site) => {
                for file in &site.files {
                    println!("{:>10} bytes  {}", file.bytes.len(), file.path);
                }
                return Ok(());
            }
            Err(e) => report_failure("Site preview failed", &e),
        }
    }

    match builder.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site generated successfully!");
            tracing::info!("📁 Page saved to: {}", output_path);
            println!("✅ Site generated successfully!");
            println!("📁 Page saved to: {}", output_path);
        }
        Err(e) => report_failure("Site build failed", &e),
    }

    Ok(())
}
