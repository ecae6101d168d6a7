use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use cadence_cli::audio::AudioService;
use cadence_cli::{CliContext, commands, logging, repl, session};

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();

    let (ctx, cue_rx) = CliContext::new();

    // Playback runs on its own thread for the whole process lifetime.
    let sounds_dir = {
        let config = ctx.config.read().await;
        PathBuf::from(&config.sounds_directory)
    };
    let _audio = AudioService::spawn(cue_rx, Arc::clone(&ctx.audio_settings), sounds_dir);

    if let Err(err) = ctx.reload_library().await {
        println!("warning: {err}");
    }

    let mut lines = repl::spawn_stdin_reader();
    repl::prompt();

    while let Some(line) = lines.recv().await {
        let line = line.trim();
        if line.is_empty() {
            repl::prompt();
            continue;
        }

        match respond(line, &ctx, &mut lines).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
        repl::prompt();
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "workout session runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the loaded workout plans
    Plans,
    /// Show a plan's steps
    Show {
        #[arg(short, long)]
        id: String,
    },
    /// Start a workout session
    Start {
        #[arg(short, long)]
        id: String,
    },
    /// Show the current configuration
    Config,
    /// Point at a different plans directory and reload
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
    /// Reload plans from disk
    Reload,
    Exit,
}

async fn respond(
    line: &str,
    ctx: &CliContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "cadence".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Plans) => commands::list_plans(ctx).await,
        Some(Commands::Show { id }) => commands::show_plan(id, ctx).await,
        Some(Commands::Start { id }) => session::run_session(id, ctx, lines).await?,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::SetDirectory { path }) => commands::set_plans_directory(path, ctx).await,
        Some(Commands::Reload) => commands::reload(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
