use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use quickchat::config::{self, AppConfig, ConfigSource};
use quickchat::session::generate_room_code;
use quickchat::ui::QuickChatApp;
use quickchat::{BroadcastBus, demo};

#[derive(Parser)]
#[command(
    name = "quickchat",
    version,
    about = "Ephemeral multi-tab chat over an in-process broadcast channel"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Number of tabs to open at startup (overrides the config file)
    #[arg(long, value_name = "N")]
    tabs: Option<usize>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone)]
enum Mode {
    /// Replay a two-tab conversation without a window and print both lists
    Demo {
        /// Room code to use (a random one when omitted)
        #[arg(long)]
        room: Option<String>,
        #[arg(long, default_value = "Alex")]
        first: String,
        #[arg(long, default_value = "Maria")]
        second: String,
    },
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let (mut app_config, source) = config::load_config(&cli.config);
    match source {
        ConfigSource::File => log::info!("Loaded config from {}", cli.config),
        ConfigSource::Unreadable(err) => {
            log::info!("Config file {} not readable ({err}); using defaults", cli.config)
        }
        ConfigSource::Invalid(err) => {
            log::warn!("Failed to parse config file {}: {err}; using defaults", cli.config)
        }
    }
    if let Some(tabs) = cli.tabs {
        app_config.initial_tabs = tabs;
    }

    if let Some(Mode::Demo {
        room,
        first,
        second,
    }) = cli.mode
    {
        run_demo(&app_config, room, &first, &second);
        return Ok(());
    }

    run_window(app_config)
}

fn run_demo(app_config: &AppConfig, room: Option<String>, first: &str, second: &str) {
    let room = room.unwrap_or_else(generate_room_code);
    match demo::run(app_config, &room, first, second) {
        Ok(transcript) => demo::print_transcript(&transcript, first, second),
        Err(err) => log::error!("Demo failed: {err}"),
    }
}

fn run_window(app_config: AppConfig) -> Result<(), eframe::Error> {
    let bus = BroadcastBus::new();
    let options = eframe::NativeOptions::default();
    let title = app_config.window_title.clone();

    log::info!(
        "Starting window with {} tab(s), channel prefix `{}`",
        app_config.initial_tabs,
        app_config.channel_prefix
    );

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(QuickChatApp::new(cc, bus, app_config)))),
    )
}
