use std::io::Write;

use clap::Parser;
use morph_cli::commands::{Cli, respond, run};
use morph_cli::logging::init_logging;
use morph_cli::session::{apply_env_overrides, config_or_default, load_config};
use morph_cli::{Session, readline};

#[tokio::main]
async fn main() -> Result<(), String> {
    let (config, load_error) = config_or_default(load_config());
    let config = apply_env_overrides(config);
    init_logging(&config.log_level);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
    }
    let mut session = Session::new(config);

    // Arguments on the command line run a single command, otherwise start the REPL
    if std::env::args().len() > 1 {
        let cli = Cli::parse();
        run(cli.command, &mut session).await?;
        return Ok(());
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut session).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}
