// src/meter.rs
use console::{style, Style, Term};

use crate::models::StrengthReport;

pub const SEGMENTS: u8 = 4;

const LIT: &str = "▮";
const UNLIT: &str = "▯";

fn style_for(color_tag: &str) -> Style {
    match color_tag {
        "red" => Style::new().red().bold(),
        "orange" => Style::new().color256(208).bold(),
        "yellow" => Style::new().yellow().bold(),
        "green" => Style::new().green().bold(),
        _ => Style::new(),
    }
}

/// Renders the strength label followed by the four meter segments.
pub fn render(report: &StrengthReport, styled: bool) -> String {
    let lit = report.segments_lit.min(SEGMENTS) as usize;
    let bars = format!(
        "{}{}",
        LIT.repeat(lit),
        UNLIT.repeat(SEGMENTS as usize - lit)
    );

    if styled {
        let level_style = style_for(&report.color_tag);
        format!(
            "{} {} {}",
            style("STRENGTH").dim(),
            level_style.apply_to(&report.label),
            level_style.apply_to(bars)
        )
    } else {
        format!("STRENGTH {} {}", report.label, bars)
    }
}

/// Whether stdout supports colour.
pub fn stdout_is_styled() -> bool {
    Term::stdout().features().colors_supported()
}
