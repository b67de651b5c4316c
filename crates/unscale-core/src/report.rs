//! Rendering of [`UnscaleReport`] values through user-supplied templates.
//!
//! Templates name values in braces: `{width}`, `{height}`, `{scaled_width}`,
//! `{scaled_height}`, `{x_scale}`, `{y_scale}` and `{par}`. `{{` and `}}`
//! produce literal braces, and the two characters `\n` produce a newline.
//! Unknown names are copied through unchanged.

use crate::consts::REPORT_SIGNIFICANT_DIGITS;
use crate::unscale::UnscaleReport;

/// Commonly requested single values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Resolution,
    Scale,
    PixelAspectRatio,
}

impl Preset {
    pub fn template(&self) -> &'static str {
        match self {
            Self::Resolution => "{width}x{height}",
            Self::Scale => "{x_scale}x{y_scale}",
            Self::PixelAspectRatio => "{par}",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution => write!(f, "Resolution"),
            Self::Scale => write!(f, "Scale"),
            Self::PixelAspectRatio => write!(f, "Pixel aspect ratio"),
        }
    }
}

/// Substitute report values into `template`.
pub fn render(template: &str, report: &UnscaleReport) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    name.push(next);
                }
                match variable(&name, report) {
                    Some(value) if closed => out.push_str(&value),
                    _ => {
                        out.push('{');
                        out.push_str(&name);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            '\\' if chars.peek() == Some(&'n') => {
                chars.next();
                out.push('\n');
            }
            _ => out.push(c),
        }
    }

    out
}

fn variable(name: &str, report: &UnscaleReport) -> Option<String> {
    let value = match name {
        "width" => report.determined_width.to_string(),
        "height" => report.determined_height.to_string(),
        "scaled_width" => report.scaled_width.to_string(),
        "scaled_height" => report.scaled_height.to_string(),
        "x_scale" => format_general(report.x_scale),
        "y_scale" => format_general(report.y_scale),
        "par" => format_general(report.pixel_aspect_ratio),
        _ => return None,
    };
    Some(value)
}

/// Format like C's `%g`: six significant digits, trailing zeros removed,
/// scientific notation for exponents below -4 or at least 6.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = REPORT_SIGNIFICANT_DIGITS;
    // Round to the target precision first; the exponent can shift (9.9999995 -> 1e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
