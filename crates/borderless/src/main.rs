mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "borderless",
    version,
    about = "Native snap, resize, and drag behaviour for borderless windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Open a sample borderless window
    Demo,
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Show the monitor geometry the chrome sees for a window
    Monitor(commands::debug::monitor::MonitorArgs),
    /// Compute resize borders for a window on a given monitor
    Borders(commands::debug::borders::BordersArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Demo => commands::demo::execute(),
        Commands::Debug { command } => match command {
            DebugCommands::Monitor(args) => commands::debug::monitor::execute(&args),
            DebugCommands::Borders(args) => commands::debug::borders::execute(&args),
        },
    }
}
