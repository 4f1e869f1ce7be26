// SPDX-License-Identifier: MIT
//
// Terminal rendering of palettes and contrast checks.
//
// Pure functions over `impl Write`: the caller decides where bytes go and
// whether color is allowed. With color on, swatches are painted with 24-bit
// SGR sequences (38;2 / 48;2). With color off, the same layout is printed as
// plain text so output stays readable in pipes and logs.
//
// Column alignment uses display width, not byte length, because labels
// contain non-ASCII separators.

use std::io::{self, Write};

use swatch_color::Rgb;
use swatch_palette::{ColorReport, PaletteReport, TextChoice, WcagPasses};
use unicode_width::UnicodeWidthStr;

/// Verdict colors for the WCAG table.
pub const PASS_COLOR: Rgb = Rgb::new(0x44, 0x9B, 0x72);
pub const FAIL_COLOR: Rgb = Rgb::new(0xC3, 0x11, 0x0C);

/// Display width of a swatch card.
const CARD_WIDTH: usize = 28;

/// Display width of the WCAG table's label column.
const LABEL_WIDTH: usize = 16;

/// Display width of each WCAG verdict column.
const VERDICT_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit 24-bit color escape sequences.
    pub color: bool,
}

// ─── ANSI ────────────────────────────────────────────────────────────────────

fn fg(w: &mut impl Write, c: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b)
}

fn bg(w: &mut impl Write, c: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b)
}

fn bold(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1m")
}

fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// `s` followed by spaces up to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{:fill$}", "")
}

// ─── Pieces ──────────────────────────────────────────────────────────────────

/// One line of a card: `text` on `background`, padded to the card width.
fn card_line(
    w: &mut impl Write,
    text: &str,
    background: Rgb,
    foreground: Rgb,
    opts: RenderOptions,
) -> io::Result<()> {
    let cell = pad(&format!(" {text}"), CARD_WIDTH);
    if opts.color {
        bg(w, background)?;
        fg(w, foreground)?;
        w.write_all(cell.as_bytes())?;
        reset(w)
    } else {
        w.write_all(cell.as_bytes())
    }
}

/// Text of card row `row` for a color titled `title`.
fn card_row(row: usize, title: &str, report: &ColorReport) -> String {
    match row {
        0 => title.to_string(),
        1 => format!("Hex: {}", report.color),
        _ => format!("Text {} · {:.2}:1", report.text, report.ratio),
    }
}

/// Cards side by side, three rows each.
fn cards(w: &mut impl Write, reports: &[(&str, ColorReport)], opts: RenderOptions) -> io::Result<()> {
    for row in 0..3 {
        for (i, (title, report)) in reports.iter().enumerate() {
            if i > 0 {
                w.write_all(b"  ")?;
            }
            card_line(w, &card_row(row, title, report), report.color, report.text, opts)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn verdict(w: &mut impl Write, pass: bool, opts: RenderOptions) -> io::Result<()> {
    let word = if pass { "PASS" } else { "FAIL" };
    let cell = pad(word, VERDICT_WIDTH);
    if opts.color {
        bold(w)?;
        fg(w, if pass { PASS_COLOR } else { FAIL_COLOR })?;
        w.write_all(word.as_bytes())?;
        reset(w)?;
        w.write_all(&cell.as_bytes()[word.len()..])
    } else {
        w.write_all(cell.as_bytes())
    }
}

/// WCAG table: one row per level, one verdict column per entry.
fn wcag_table(w: &mut impl Write, columns: &[(&str, WcagPasses)], opts: RenderOptions) -> io::Result<()> {
    write!(w, "{}", pad("WCAG", LABEL_WIDTH))?;
    for (heading, _) in columns {
        write!(w, "{}", pad(heading, VERDICT_WIDTH))?;
    }
    writeln!(w)?;
    for (level, label, threshold) in WcagPasses::LEVELS {
        write!(w, "{}", pad(&format!("{label} ≥{threshold}"), LABEL_WIDTH))?;
        for (_, passes) in columns {
            verdict(w, passes.contains(level), opts)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Two words painted in `text` on `background`.
fn preview(w: &mut impl Write, label: &str, text: Rgb, background: Rgb, opts: RenderOptions) -> io::Result<()> {
    card_line(w, label, background, text, opts)
}

// ─── Screens ─────────────────────────────────────────────────────────────────

/// Paint a full palette report: cards, previews, WCAG table.
pub fn render_palette(w: &mut impl Write, report: &PaletteReport, opts: RenderOptions) -> io::Result<()> {
    cards(w, &[("Primary", report.primary), ("Secondary", report.secondary)], opts)?;
    writeln!(w)?;

    preview(w, "Secondary on primary", report.secondary.color, report.primary.color, opts)?;
    w.write_all(b"  ")?;
    preview(w, "Primary on secondary", report.primary.color, report.secondary.color, opts)?;
    writeln!(w)?;
    writeln!(w)?;

    wcag_table(
        w,
        &[
            ("Primary", report.primary.passes),
            ("Secondary", report.secondary.passes),
            ("Pair", report.pair_passes),
        ],
        opts,
    )?;
    writeln!(w)?;
    writeln!(w, "Pair contrast: {:.2}:1", report.pair_ratio)
}

/// Paint a two-color contrast check.
pub fn render_contrast(w: &mut impl Write, a: Rgb, b: Rgb, ratio: f64, opts: RenderOptions) -> io::Result<()> {
    preview(w, &format!("{b} on {a}"), b, a, opts)?;
    w.write_all(b"  ")?;
    preview(w, &format!("{a} on {b}"), a, b, opts)?;
    writeln!(w)?;
    writeln!(w)?;
    writeln!(w, "Contrast: {ratio:.2}:1")?;
    writeln!(w)?;
    wcag_table(w, &[("Result", WcagPasses::from_ratio(ratio))], opts)
}

/// Paint the best text color for one background.
pub fn render_text_choice(
    w: &mut impl Write,
    background: Rgb,
    choice: TextChoice,
    opts: RenderOptions,
) -> io::Result<()> {
    cards(
        w,
        &[(
            "Background",
            ColorReport {
                color: background,
                text: choice.text,
                ratio: choice.ratio,
                passes: choice.passes(),
            },
        )],
        opts,
    )?;
    writeln!(w)?;
    wcag_table(w, &[("Text", choice.passes())], opts)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
