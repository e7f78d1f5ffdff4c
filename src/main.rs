use clap::Parser;
use molecule_x::utils::logger;
use molecule_x::{CliArgs, Launcher, LauncherError, SystemProcessRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let settings = match args.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    };

    if settings.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no script will be started");
    }

    let launcher = Launcher::new(SystemProcessRunner, settings);
    let mut stdout = std::io::stdout();

    match launcher.run(std::io::stdin().lock(), &mut stdout).await {
        Ok(outcome) => {
            tracing::debug!("Dispatch outcome: {:?}", outcome);
            let exit_code = outcome.exit_code();
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn report_error(e: &LauncherError) {
    // 使用者訊息走 stderr，日誌只在 --verbose 時顯示
    tracing::debug!("Launcher error: {:?} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
