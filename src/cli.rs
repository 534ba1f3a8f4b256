// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "firework-diorama")]
#[command(about = "Interactive firework diorama viewer", long_about = None)]
pub struct Cli {
    /// Per-frame probability of launching a new firework (0.0 - 1.0)
    #[arg(long = "spawn-chance", default_value = "0.2")]
    pub spawn_chance: f32,

    /// Embers scattered per explosion
    #[arg(long = "burst-size", default_value = "750")]
    pub burst_size: usize,

    /// Initial window width in logical pixels
    #[arg(long = "width", default_value = "1280")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long = "height", default_value = "720")]
    pub height: u32,
}
