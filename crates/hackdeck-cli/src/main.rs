use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hackdeck-cli", version, about = "Hackdeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Countdown to the event deadline
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Registration and countdown status
    Status,
    /// Register for the event
    Register {
        /// Skip opening the registration form in a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Calendar deep links
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Page content (timeline, problems, prizes, rules, FAQs)
    Info {
        #[command(subcommand)]
        action: commands::info::InfoAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Status => commands::status::run(),
        Commands::Register { no_open } => commands::register::run(no_open),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Info { action } => commands::info::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "hackdeck-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
