use clap::Parser;

/// Segno - browse and sight-read your transcription catalog 🎼
#[derive(Parser, Debug)]
#[command(name = "segno", version, about)]
pub struct Args {
    /// Catalog JSON to load (path or URL; falls back to the config file,
    /// then ./catalog.json)
    pub catalog: Option<String>,

    /// Initial auto-scroll tempo in BPM
    #[arg(long, short = 'b')]
    pub bpm: Option<u16>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
