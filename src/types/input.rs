//! Input to colour resolution and parsing of CSS-style functional strings.
//!
//! Supported forms:
//! - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)`
//! - `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`
//! - anything else is treated as a colour name

use once_cell::sync::Lazy;
use regex::Regex;

use crate::codec::Rgb;
use crate::error::{Result, TintError};

use super::Colour;

static HSLA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsla\((\d+),\s*([\d.]+)%,\s*([\d.]+)%,\s*([\d.]+)\)").expect("valid regex")
});

static HSL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsl\((\d+),\s*([\d.]+)%,\s*([\d.]+)%\)").expect("valid regex")
});

/// Something that can be resolved to a colour.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourInput {
    /// A string still to be parsed or looked up.
    Raw(String),
    /// An already-resolved colour, returned as is.
    Resolved(Colour),
}

impl From<&str> for ColourInput {
    fn from(s: &str) -> Self {
        ColourInput::Raw(s.to_string())
    }
}

impl From<String> for ColourInput {
    fn from(s: String) -> Self {
        ColourInput::Raw(s)
    }
}

impl From<&String> for ColourInput {
    fn from(s: &String) -> Self {
        ColourInput::Raw(s.clone())
    }
}

impl From<Colour> for ColourInput {
    fn from(c: Colour) -> Self {
        ColourInput::Resolved(c)
    }
}

/// Parse a raw string, deferring bare names to `lookup`.
pub(crate) fn parse_raw(input: &str, lookup: impl FnOnce(&str) -> Result<Colour>) -> Result<Colour> {
    let input = input.trim();

    // Order matters: the alpha forms share a prefix with the plain ones.
    if input.starts_with('#') {
        Colour::from_hex(input)
    } else if input.starts_with("hsla") {
        let [h, s, l, a] = captures(&HSLA, input)?;
        Ok(Colour::from_hsla(h, s, l, a))
    } else if input.starts_with("hsl") {
        let [h, s, l] = captures(&HSL, input)?;
        Ok(Colour::from_hsl(h, s, l))
    } else if input.starts_with("rgba") {
        let [r, g, b, a] = arguments(input, "rgba")?;
        Ok(Colour::new(Rgb::from_f64(r, g, b), a))
    } else if input.starts_with("rgb") {
        let [r, g, b] = arguments(input, "rgb")?;
        Ok(Colour::new(Rgb::from_f64(r, g, b), 1.0))
    } else {
        lookup(input)
    }
}

/// Numeric capture groups of `pattern`.
fn captures<const N: usize>(pattern: &Regex, input: &str) -> Result<[f64; N]> {
    let caps = pattern.captures(input).ok_or_else(|| TintError::Parse {
        message: format!("Malformed colour function: {input}"),
        help: Some("Use hsl(h, s%, l%) or hsla(h, s%, l%, a)".to_string()),
    })?;

    let mut values = [0.0; N];
    for (i, value) in values.iter_mut().enumerate() {
        let text = caps.get(i + 1).map_or("", |m| m.as_str());
        *value = parse_number(text, input)?;
    }
    Ok(values)
}

/// Comma-separated arguments of `name(...)`. Extra arguments are ignored.
fn arguments<const N: usize>(input: &str, name: &str) -> Result<[f64; N]> {
    let args = input
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| TintError::Parse {
            message: format!("Malformed colour function: {input}"),
            help: Some(format!("Use {name}(...) with comma-separated numbers")),
        })?;

    let mut parts = args.split(',');
    let mut values = [0.0; N];
    for value in values.iter_mut() {
        let part = parts.next().ok_or_else(|| TintError::Parse {
            message: format!("{name}() requires {N} arguments: {input}"),
            help: None,
        })?;
        *value = parse_number(part, input)?;
    }
    Ok(values)
}

fn parse_number(text: &str, input: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| TintError::parse(format!("Invalid number '{}' in {input}", text.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_names(name: &str) -> Result<Colour> {
        Err(TintError::UnknownColourName {
            name: name.to_string(),
            help: None,
        })
    }

    #[test]
    fn test_parse_hex() {
        let c = parse_raw("  #FF000080 ", no_names).unwrap();
        assert_eq!(c.hex_string(), "#FF000080");
    }

    #[test]
    fn test_parse_rgb() {
        let c = parse_raw("rgb(255, 128, 0)", no_names).unwrap();
        assert_eq!(c.hex(), "#FF8000");
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_parse_rgba() {
        let c = parse_raw("rgba(255,0,0,0.5)", no_names).unwrap();
        assert_eq!(c.hex_string(), "#FF000080");
    }

    #[test]
    fn test_parse_rgb_fractional_channels_round() {
        let c = parse_raw("rgb(254.6, 0.4, 300)", no_names).unwrap();
        assert_eq!(c.hex(), "#FF00FF");
    }

    #[test]
    fn test_parse_hsl() {
        let c = parse_raw("hsl(120, 100%, 50%)", no_names).unwrap();
        assert_eq!(c.hex(), "#00FF00");
    }

    #[test]
    fn test_parse_hsla() {
        let c = parse_raw("hsla(300, 100%,50%, 0.25)", no_names).unwrap();
        assert_eq!(c.hex(), "#FF00FF");
        assert_eq!(c.alpha, 0.25);
    }

    #[test]
    fn test_parse_malformed_functions() {
        assert!(parse_raw("hsl(a, b, c)", no_names).is_err());
        assert!(parse_raw("hsla(120, 100%, 50%)", no_names).is_err());
        assert!(parse_raw("rgb(1, 2)", no_names).is_err());
        assert!(parse_raw("rgb(1, 2, x)", no_names).is_err());
        assert!(parse_raw("rgb 1, 2, 3", no_names).is_err());
    }

    #[test]
    fn test_parse_falls_through_to_lookup() {
        let c = parse_raw("brand", |name| {
            assert_eq!(name, "brand");
            Ok(Colour::BLACK)
        })
        .unwrap();
        assert_eq!(c, Colour::BLACK);
        assert!(parse_raw("brand", no_names).is_err());
    }

    #[test]
    fn test_input_conversions() {
        assert_eq!(ColourInput::from("red"), ColourInput::Raw("red".to_string()));
        assert_eq!(
            ColourInput::from(Colour::BLACK),
            ColourInput::Resolved(Colour::BLACK)
        );
    }
}
