use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use lineedit::cli::{
    handle_dir_command, handle_file_command, handle_line_command, handle_log_command, AppContext,
};
use lineedit::config::{EditorPaths, Settings};
use lineedit::display::Palette;
use lineedit::{logging, menu};

#[derive(Parser)]
#[command(
    name = "lineedit",
    author = "Kaylee Beyene",
    version,
    about = "Console editor for text files with a changelog",
    long_about = "lineedit creates, copies, renames and deletes text files, and \
                  appends, inserts, deletes and shows individual lines. Every \
                  change is committed atomically and recorded in a changelog. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Whole-file commands
    #[command(subcommand)]
    File(lineedit::cli::FileCommands),

    /// Line-level commands
    #[command(subcommand)]
    Line(lineedit::cli::LineCommands),

    /// Directory listing
    #[command(subcommand)]
    Dir(lineedit::cli::DirCommands),

    /// Changelog commands
    #[command(subcommand)]
    Log(lineedit::cli::LogCommands),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = EditorPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    logging::init(&settings);
    debug!(base_dir = %paths.base_dir().display(), "starting");

    let palette = Palette::detect(&settings);
    let ctx = AppContext::new(paths, settings, palette);

    match cli.command {
        None | Some(Commands::Menu) => {
            menu::run_interactive(&ctx)?;
        }
        Some(Commands::File(cmd)) => {
            handle_file_command(&ctx, cmd)?;
        }
        Some(Commands::Line(cmd)) => {
            handle_line_command(&ctx, cmd)?;
        }
        Some(Commands::Dir(cmd)) => {
            handle_dir_command(&ctx, cmd)?;
        }
        Some(Commands::Log(cmd)) => {
            handle_log_command(&ctx, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing lineedit at: {}", ctx.paths.base_dir().display());
            ctx.settings.save(&ctx.paths)?;
            println!("Settings written to {}", ctx.paths.settings_file().display());
            println!("Changelog will be kept at {}", ctx.audit.path().display());
        }
        Some(Commands::Config) => {
            println!("lineedit Configuration");
            println!("======================");
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Changelog:      {}", ctx.paths.changelog().display());
            println!("Settings file:  {}", ctx.paths.settings_file().display());
            println!(
                "Colour output:  {}",
                if ctx.palette.is_enabled() { "on" } else { "off" }
            );
            println!();
            println!("Settings:");
            println!("{}", serde_json::to_string_pretty(&ctx.settings)?);
        }
    }

    Ok(())
}
