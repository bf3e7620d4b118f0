//! Demo window for the analog clock widget.
//!
//! Every `ClockStyle` option is exposed as a CLI flag taking a hex color
//! (`#RRGGBB` or `#RRGGBBAA`); unset flags keep the classic defaults.

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use clockview_engine::clock::{ClockApp, ClockStyle};
use clockview_engine::device::GpuInit;
use clockview_engine::logging::{init_logging, LoggingConfig};
use clockview_engine::paint::Color;
use clockview_engine::window::{Runtime, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(name = "clockview-demo", about = "Analog clock widget demo")]
struct Cli {
    /// Window side length in logical pixels.
    #[arg(long, default_value_t = 300.0)]
    size: f64,

    /// Second hand color (default red).
    #[arg(long, value_parser = parse_color)]
    second_hand_color: Option<Color>,

    /// Minute hand color (default black).
    #[arg(long, value_parser = parse_color)]
    minute_hand_color: Option<Color>,

    /// Hour hand color (default black).
    #[arg(long, value_parser = parse_color)]
    hour_hand_color: Option<Color>,

    /// Face disc color (default light gray).
    #[arg(long, value_parser = parse_color)]
    face_color: Option<Color>,

    /// Outer ring color; the ring shades from gray into this (default black).
    #[arg(long, value_parser = parse_color)]
    ring_color: Option<Color>,

    /// Center dot color (default dark red).
    #[arg(long, value_parser = parse_color)]
    center_dot_color: Option<Color>,

    /// Outer ring stroke width in logical pixels.
    #[arg(long)]
    ring_width: Option<f32>,

    /// Log filter, e.g. "debug" or "clockview_engine=debug" (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn style(&self) -> ClockStyle {
        let mut style = ClockStyle::new();
        if let Some(c) = self.second_hand_color {
            style = style.with_second_hand_color(c);
        }
        if let Some(c) = self.minute_hand_color {
            style = style.with_minute_hand_color(c);
        }
        if let Some(c) = self.hour_hand_color {
            style = style.with_hour_hand_color(c);
        }
        if let Some(c) = self.face_color {
            style = style.with_face_color(c);
        }
        if let Some(c) = self.ring_color {
            style = style.with_ring_color(c);
        }
        if let Some(c) = self.center_dot_color {
            style = style.with_center_dot_color(c);
        }
        if let Some(w) = self.ring_width {
            style = style.with_ring_width(w);
        }
        style
    }
}

/// Parses `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
fn parse_color(s: &str) -> std::result::Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !matches!(hex.len(), 6 | 8) {
        return Err(format!("expected #RRGGBB or #RRGGBBAA, got {s:?}"));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex digits in {s:?}"))
    };

    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if hex.len() == 8 { byte(6)? } else { 0xFF };
    Ok(Color::from_srgb_u8(r, g, b, a))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    let config = RuntimeConfig {
        title: "clockview".to_string(),
        initial_size: LogicalSize::new(cli.size, cli.size),
    };

    log::info!("starting clockview demo ({} px)", cli.size);
    Runtime::run(config, GpuInit::default(), ClockApp::new(cli.style()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_with_and_without_hash() {
        let expected = Color::from_srgb_u8(0x12, 0x34, 0x56, 0xFF);
        assert_eq!(parse_color("#123456").unwrap(), expected);
        assert_eq!(parse_color("123456").unwrap(), expected);
    }

    #[test]
    fn parses_rgba() {
        let c = parse_color("#FF000080").unwrap();
        assert_eq!(c, Color::from_srgb_u8(0xFF, 0x00, 0x00, 0x80));
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#GGGGGG").is_err());
    }

    #[test]
    fn flags_map_onto_style_options() {
        let cli = Cli::parse_from([
            "clockview-demo",
            "--second-hand-color",
            "#00FF00",
            "--ring-width",
            "10",
        ]);
        let style = cli.style();
        assert_eq!(style.second_hand_color, Color::from_srgb_u8(0, 0xFF, 0, 0xFF));
        assert_eq!(style.ring_width, 10.0);
        assert_eq!(style.face_color, ClockStyle::default().face_color);
    }
}
