// SPDX-License-Identifier: MIT
//
// swatch — accessible two-color palettes in the terminal.
//
// This binary is the UI layer over the library crates:
//
//   swatch-color   → Rgb / Hsl values and hex parsing
//   swatch-palette → contrast math, WCAG grading, palette generation
//
// It owns everything stateful: the parsed flags, the current palette, the
// "lock primary" toggle and the output stream. Each command builds a
// palette (or a pair of colors), asks the library for a report, and paints
// it:
//
//   flags + swatch.toml → AppConfig → PaletteGenerator → Palette
//   Palette → PaletteReport → render (ANSI) | serde_json (--json) → stdout
//
// Logs go to stderr; stdout carries only the result.

mod config;
mod logging;
mod render;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use swatch_color::Rgb;
use swatch_palette::{
    HarmonyBand, Palette, PaletteGenerator, SecondaryStrategy, best_text_color, contrast_ratio,
    wcag_passes,
};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::logging::{LogFormat, init_logging};
use crate::render::{RenderOptions, render_contrast, render_palette, render_text_choice};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Accessible two-color palettes")]
struct Cli {
    /// Read settings from this TOML file.
    #[arg(long, global = true, env = "SWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `swatch_palette=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Never emit color escape sequences.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a palette (the default command).
    Generate(GenerateArgs),
    /// Contrast ratio and WCAG levels for two colors.
    Contrast {
        a: Rgb,
        b: Rgb,
        #[arg(long)]
        json: bool,
    },
    /// Best text color (black or white) for a background.
    Text {
        background: Rgb,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Manually picked primary color.
    #[arg(long)]
    primary: Option<Rgb>,

    /// Manually picked secondary color.
    #[arg(long)]
    secondary: Option<Rgb>,

    /// Keep `--primary` and generate only a secondary for it. Giving
    /// `--primary` already implies this.
    #[arg(long)]
    lock_primary: bool,

    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    #[arg(long, value_enum)]
    harmony: Option<HarmonyArg>,

    /// Minimum primary/secondary contrast for the contrast strategy.
    #[arg(long)]
    min_contrast: Option<f64>,

    /// Seed for reproducible palettes.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Secondary must contrast with the primary.
    Contrast,
    /// Secondary must carry readable text on its own.
    SelfReadable,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HarmonyArg {
    /// Offsets of 150°, 180° or 210°.
    Discrete,
    /// Any offset between 160° and 200°.
    Continuous,
}

// ─── JSON shapes ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ContrastJson {
    a: Rgb,
    b: Rgb,
    ratio: f64,
    passes: swatch_palette::WcagPasses,
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Fold generate flags into the configured generator settings.
fn apply_generate_flags(config: &mut AppConfig, args: &GenerateArgs) {
    let generator = &mut config.generator;

    if let Some(harmony) = args.harmony {
        generator.harmony = match harmony {
            HarmonyArg::Discrete => HarmonyBand::default(),
            HarmonyArg::Continuous => HarmonyBand::near_complement(),
        };
    }

    match (args.strategy, generator.strategy) {
        (Some(StrategyArg::SelfReadable), SecondaryStrategy::ContrastToPrimary { .. }) => {
            generator.strategy = SecondaryStrategy::self_readable();
        }
        (Some(StrategyArg::Contrast), SecondaryStrategy::SelfReadable { .. }) => {
            generator.strategy = SecondaryStrategy::default();
        }
        _ => {}
    }

    if let Some(ratio) = args.min_contrast {
        match &mut generator.strategy {
            SecondaryStrategy::ContrastToPrimary { min_contrast, .. } => *min_contrast = ratio,
            SecondaryStrategy::SelfReadable { .. } => {
                warn!("--min-contrast only applies to the contrast strategy; ignoring");
            }
        }
    }
}

/// Build the palette a UI would show after pressing "generate" and then
/// applying any manual picks.
fn next_palette(
    generator: &mut PaletteGenerator<rand::rngs::StdRng>,
    args: &GenerateArgs,
) -> swatch_palette::Result<Palette> {
    if args.lock_primary && args.primary.is_none() {
        warn!("--lock-primary without --primary; generating a new primary");
    }

    // A picked primary is always held, so the secondary is generated
    // (and falls back) against the color that is actually shown.
    let current = args
        .primary
        .map(|primary| Palette::new(primary, args.secondary.unwrap_or(primary)));
    let mut palette = generator.regenerate(current.as_ref(), current.is_some())?;

    if let Some(secondary) = args.secondary {
        palette = palette.with_secondary(secondary);
    }
    Ok(palette)
}

fn cmd_generate(
    mut config: AppConfig,
    args: &GenerateArgs,
    out: &mut impl Write,
    opts: RenderOptions,
) -> anyhow::Result<()> {
    apply_generate_flags(&mut config, args);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "generating palette");
    let mut generator =
        PaletteGenerator::seeded(config.generator, seed).context("invalid generator settings")?;

    let palette = next_palette(&mut generator, args)?;
    debug!(primary = %palette.primary, secondary = %palette.secondary, "palette ready");

    let report = palette.report();
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        render_palette(out, &report, opts)?;
    }
    Ok(())
}

fn cmd_contrast(a: Rgb, b: Rgb, json: bool, out: &mut impl Write, opts: RenderOptions) -> anyhow::Result<()> {
    let ratio = contrast_ratio(a, b);
    if json {
        let body = ContrastJson {
            a,
            b,
            ratio,
            passes: wcag_passes(ratio),
        };
        serde_json::to_writer_pretty(&mut *out, &body)?;
        writeln!(out)?;
    } else {
        render_contrast(out, a, b, ratio, opts)?;
    }
    Ok(())
}

fn cmd_text(background: Rgb, json: bool, out: &mut impl Write, opts: RenderOptions) -> anyhow::Result<()> {
    let choice = best_text_color(background);
    if json {
        serde_json::to_writer_pretty(&mut *out, &choice)?;
        writeln!(out)?;
    } else {
        render_text_choice(out, background, choice, opts)?;
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if let Some(format) = cli.log_format {
        config.log.format = format;
    }
    init_logging(&config.log)?;

    let opts = RenderOptions {
        color: !cli.no_color && io::stdout().is_terminal(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or_else(|| Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => cmd_generate(config, &args, &mut out, opts),
        Command::Contrast { a, b, json } => cmd_contrast(a, b, json, &mut out, opts),
        Command::Text { background, json } => cmd_text(background, json, &mut out, opts),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("swatch: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_palette::GeneratorConfig;
    use swatch_palette::config::DARK_FALLBACK;

    fn generator() -> PaletteGenerator<rand::rngs::StdRng> {
        PaletteGenerator::seeded(GeneratorConfig::default(), 11).unwrap()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("swatch").chain(args.iter().copied())).unwrap()
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let mut argv = vec!["generate"];
        argv.extend_from_slice(args);
        match parse(&argv).command {
            Some(Command::Generate(args)) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_generate() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn hex_arguments_are_parsed() {
        let args = generate_args(&["--primary", "f5f0c0", "--secondary", "#202748"]);
        assert_eq!(args.primary, Some(Rgb::new(0xF5, 0xF0, 0xC0)));
        assert_eq!(args.secondary, Some(Rgb::new(0x20, 0x27, 0x48)));
    }

    #[test]
    fn bad_hex_argument_is_rejected() {
        assert!(Cli::try_parse_from(["swatch", "text", "#12"]).is_err());
    }

    #[test]
    fn locked_primary_is_kept() {
        let args = generate_args(&["--primary", "#F5F0C0", "--lock-primary"]);
        let palette = next_palette(&mut generator(), &args).unwrap();
        assert_eq!(palette.primary, Rgb::new(0xF5, 0xF0, 0xC0));
    }

    #[test]
    fn manual_picks_override_generation() {
        let args = generate_args(&["--primary", "#F5F0C0", "--secondary", "#202748"]);
        let palette = next_palette(&mut generator(), &args).unwrap();
        assert_eq!(palette, Palette::new(Rgb::new(0xF5, 0xF0, 0xC0), Rgb::new(0x20, 0x27, 0x48)));
    }

    #[test]
    fn picked_primary_gets_a_matching_secondary() {
        let args = generate_args(&["--primary", "#FFFFFF"]);
        for seed in 0..50 {
            let mut generator = PaletteGenerator::seeded(GeneratorConfig::default(), seed).unwrap();
            let palette = next_palette(&mut generator, &args).unwrap();
            assert_eq!(palette.primary, Rgb::WHITE);
            // White is light, so any fallback must be the dark one.
            assert!(
                palette.pair_ratio() >= 7.0 || palette.secondary == DARK_FALLBACK,
                "seed {seed}: {} against white is {:.2}",
                palette.secondary,
                palette.pair_ratio()
            );
        }
    }

    #[test]
    fn unconstrained_generation_is_readable() {
        let palette = next_palette(&mut generator(), &GenerateArgs::default()).unwrap();
        assert!(palette.report().primary.passes.passes_all());
    }

    #[test]
    fn strategy_flags_switch_strategy() {
        let mut config = AppConfig::default();
        apply_generate_flags(&mut config, &generate_args(&["--strategy", "self-readable"]));
        assert_eq!(config.generator.strategy, SecondaryStrategy::self_readable());

        apply_generate_flags(&mut config, &generate_args(&["--strategy", "contrast", "--min-contrast", "4.5"]));
        assert_eq!(
            config.generator.strategy,
            SecondaryStrategy::contrast_to_primary(4.5, 100)
        );
    }

    #[test]
    fn harmony_flag_switches_band() {
        let mut config = AppConfig::default();
        apply_generate_flags(&mut config, &generate_args(&["--harmony", "continuous"]));
        assert_eq!(config.generator.harmony, HarmonyBand::near_complement());
    }

    #[test]
    fn generate_json_output() {
        let mut out = Vec::new();
        let args = generate_args(&["--seed", "3", "--json"]);
        cmd_generate(AppConfig::default(), &args, &mut out, RenderOptions { color: false }).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["primary"]["color"].as_str().unwrap().starts_with('#'));
        assert_eq!(value["primary"]["passes"]["normal_aaa"], true);
    }

    #[test]
    fn seeded_generate_is_reproducible() {
        let run = || {
            let mut out = Vec::new();
            let args = generate_args(&["--seed", "99", "--json"]);
            cmd_generate(AppConfig::default(), &args, &mut out, RenderOptions { color: false }).unwrap();
            out
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn contrast_json_output() {
        let mut out = Vec::new();
        cmd_contrast(Rgb::BLACK, Rgb::WHITE, true, &mut out, RenderOptions { color: false }).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["a"], "#000000");
        assert!((value["ratio"].as_f64().unwrap() - 21.0).abs() < 1e-9);
        assert_eq!(value["passes"]["large_aaa"], true);
    }

    #[test]
    fn text_json_output() {
        let mut out = Vec::new();
        cmd_text(Rgb::WHITE, true, &mut out, RenderOptions { color: false }).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["text"], "#000000");
    }
}
