//! Command-line argument parsing.

use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavescape")]
#[command(about = "Animated procedural water surface", long_about = None)]
pub struct Args {
    /// Window width in logical pixels
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,

    /// Disable the debug parameter panel
    #[arg(long)]
    pub no_panel: bool,
}
