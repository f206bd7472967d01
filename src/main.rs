mod game;
mod term;

use log::info;

use snake_arcade::config::GameConfig;
use snake_arcade::logger;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    info!("Starting snake-arcade, logging to {}", log_file.display());

    let config = GameConfig::load();
    let mut game = game::SnakeGame::new(config)?;

    // The game loop returns once the player quits
    game.run()
}
