//! Console text adventure.
//!
//! ```bash
//! cargo run -p delve
//! cargo run -p delve -- --world castle.json --start Gatehouse
//! ```
//!
//! `DELVE_WORLD` and `DELVE_START` (or a `.env` file) set the same options;
//! command-line flags win.

mod console;

use console::ConsoleInterface;
use delve_core::GameConfig;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the game text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delve=info,delve_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = parse_config_from_args(&args, GameConfig::from_env());

    let stdin = io::stdin();
    let interface = ConsoleInterface::new(stdin.lock(), io::stdout());
    let mut game = match config.build_game(interface) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to load world: {e}");
            std::process::exit(1);
        }
    };

    game.run()?;
    println!("Goodbye!");
    Ok(())
}

/// Apply command-line flags on top of `config`.
fn parse_config_from_args(args: &[String], mut config: GameConfig) -> GameConfig {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--world" => {
                if let Some(path) = args.get(i + 1) {
                    config = config.with_world_file(path);
                    i += 1;
                }
            }
            "--start" => {
                if let Some(room) = args.get(i + 1) {
                    config = config.with_starting_room(room.clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    config
}

fn print_help() {
    println!("delve - a small text adventure");
    println!();
    println!("USAGE:");
    println!("  delve [--world <path>] [--start <room>]");
    println!();
    println!("OPTIONS:");
    println!("  --world <path>  Load rooms from a JSON world file");
    println!("  --start <room>  Start in this room instead of the world's default");
    println!("  -h, --help      Show this help");
    println!();
    println!("COMMANDS:");
    println!("  move, investigate, take, use, drop, inventory, quit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = parse_config_from_args(&args(&["delve"]), GameConfig::new());
        assert_eq!(config, GameConfig::new());
    }

    #[test]
    fn test_flags_override_environment() {
        let from_env = GameConfig::new().with_starting_room("Armoury");
        let config = parse_config_from_args(
            &args(&["delve", "--start", "GrandHall", "--world", "castle.json"]),
            from_env,
        );
        assert_eq!(config.starting_room.as_deref(), Some("GrandHall"));
        assert_eq!(config.world_file, Some(PathBuf::from("castle.json")));
    }

    #[test]
    fn test_dangling_flag_is_ignored() {
        let config = parse_config_from_args(&args(&["delve", "--world"]), GameConfig::new());
        assert_eq!(config.world_file, None);
    }
}
