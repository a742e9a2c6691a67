use anyhow::Result;

use crate::app::App;
use crate::output::terminal::TerminalConsole;
use crate::settings::Settings;

mod account;
mod app;
mod error;
mod menu;
mod output;
mod quiz;
mod settings;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = Settings::default();
    let mut console = TerminalConsole::new();
    console.show_banner()?;

    let mut app = App::new(console, rand::thread_rng(), settings);
    app.run()
}
