use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ladle_color_picker::{
    AppConfig, Color, ColorPicker, Effect, JsonFileStorage, LogNotifier, Message, Notifier,
    PaletteLimits, PaletteStore, presets,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(about = "Ladle: a color picker - inspect colors and manage your palette")]
struct Args {
    /// Palette file (defaults to ~/.ladle-color-picker/palette.json)
    #[arg(long, global = true)]
    palette: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show HEX, RGB and HSL for a hex color
    Show { hex: String },
    /// Show HEX, RGB and HSL for channel values
    Rgb { r: u8, g: u8, b: u8 },
    /// List the preset colors
    Presets,
    /// Pick a color, recording it as most recent
    Apply { hex: String },
    /// Pick a color and add it to the saved palette
    Save { hex: String },
    /// Remove a color from the saved palette
    Remove { hex: String },
    /// List recent and saved colors
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .parse_lossy("ladle_color_picker=debug,ladle=debug");

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.command {
        Command::Show { hex } => {
            print_color(parse_hex(&hex)?);
            Ok(())
        }
        Command::Rgb { r, g, b } => {
            print_color(Color::new(r, g, b));
            Ok(())
        }
        Command::Presets => {
            for color in presets() {
                println!(
                    "{}  {}  {}",
                    color.to_hex(),
                    color.to_rgb_string(),
                    color.to_hsl_string()
                );
            }
            Ok(())
        }
        command => {
            let config = AppConfig::load().context("Failed to load configuration")?;
            let mut picker = open_picker(&config, args.palette)?;
            run_palette_command(&mut picker, command, &LogNotifier)
        }
    }
}

fn open_picker(config: &AppConfig, palette_override: Option<PathBuf>) -> Result<ColorPicker> {
    let path = palette_override
        .or_else(|| config.storage.palette_path())
        .context("Could not determine palette location (no home directory)")?;
    tracing::debug!("Using palette file {}", path.display());

    let store = PaletteStore::open(
        JsonFileStorage::new(&path),
        PaletteLimits::from(&config.palette),
    )
    .with_context(|| format!("Failed to load palette from {}", path.display()))?;

    Ok(ColorPicker::new(store))
}

fn run_palette_command(
    picker: &mut ColorPicker,
    command: Command,
    notifier: &dyn Notifier,
) -> Result<()> {
    let messages = match command {
        Command::Apply { hex } => vec![Message::ApplyHex(parse_hex(&hex)?.to_hex())],
        Command::Save { hex } => vec![
            Message::ApplyHex(parse_hex(&hex)?.to_hex()),
            Message::SaveCurrent,
        ],
        Command::Remove { hex } => vec![Message::RemoveSaved(parse_hex(&hex)?.to_hex())],
        Command::List => {
            print_list("Recent", &picker.store().recent());
            print_list("Saved", &picker.store().saved());
            return Ok(());
        }
        Command::Show { .. } | Command::Rgb { .. } | Command::Presets => return Ok(()),
    };

    for message in messages {
        for effect in picker.update(message) {
            match effect {
                Effect::Notify(text) => notifier.notify(&text),
                Effect::Copy(text) => println!("{}", text),
            }
        }
    }

    // Save on exit so a failed write shows up in the exit status
    picker
        .store()
        .save()
        .context("Failed to save palette")?;

    print_color(picker.current());
    Ok(())
}

fn parse_hex(hex: &str) -> Result<Color> {
    Color::from_hex(hex).with_context(|| format!("Invalid color {:?} (expected #rrggbb)", hex))
}

fn print_color(color: Color) {
    println!("HEX: {}", color.to_hex());
    println!("RGB: {}", color.to_rgb_string());
    println!("HSL: {}", color.to_hsl_string());
}

fn print_list(title: &str, colors: &[String]) {
    if colors.is_empty() {
        println!("{}: (none)", title);
    } else {
        println!("{}: {}", title, colors.join(" "));
    }
}
