//! Terminal report output.
//!
//! Box drawing, number formatting and entropy estimates. Everything here goes
//! to stderr so stdout carries nothing but passwords.

use std::io::{self, Write};

use crate::entropy;
use crate::pass::{GenerationRequest, charset};

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Password entropy in bits for a uniform draw from `charset_size` symbols.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Lines of the entropy report box for `request`.
pub fn entropy_report(request: &GenerationRequest, count: usize) -> Vec<String> {
    let chars = charset::size(&request.classes, request.exclude_ambiguous);
    let bits = calculate_entropy(request.length, chars);

    let classes: Vec<String> = request.classes.iter().map(|c| c.to_string()).collect();
    let mut lines = vec![
        box_top("Entropy"),
        box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits))),
        box_line(&format!(
            "Source: {} • Charset: {} chars",
            entropy::source_name(),
            format_number(chars)
        )),
        box_line(&format!("Classes: {}", classes.join(", "))),
    ];
    if request.exclude_ambiguous {
        lines.push(box_line("Ambiguous characters excluded"));
    }
    lines.push(box_line(&format!(
        "{} password(s) × {} chars",
        format_number(count),
        request.length
    )));
    lines.push(box_bottom());
    lines
}

pub fn print_entropy_report(request: &GenerationRequest, count: usize) {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    for line in entropy_report(request, count) {
        let _ = writeln!(err, "{line}");
    }
    let _ = err.flush();
}
