use crate::color::model::Color;
use crate::error::{ColorError, ParseError};

#[inline]
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Parse a hex color from a string.
///
/// Every character that is not a hex digit is dropped first, so `#` prefixes
/// and stray separators are tolerated. The allowed digit counts are:
/// * RGB (each digit doubled, `f80` -> `ff8800`)
/// * RRGGBB
pub fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    let digits: Vec<u8> = hex.bytes().filter(u8::is_ascii_hexdigit).collect();

    let [r, g, b] = match digits.as_slice() {
        // #RGB
        &[r, g, b] => [nibble(r) * 17, nibble(g) * 17, nibble(b) * 17],
        // #RRGGBB
        &[r1, r2, g1, g2, b1, b2] => [
            nibble(r1) << 4 | nibble(r2),
            nibble(g1) << 4 | nibble(g2),
            nibble(b1) << 4 | nibble(b2),
        ],
        other => {
            log::debug!("rejected hex color {hex:?} with {} digits", other.len());
            return Err(ParseError::InvalidLength(other.len()));
        }
    };

    Ok(Color::rgb(r, g, b))
}

/// Split `a, b, c` into exactly three trimmed arguments.
fn split_args(args: &str) -> Result<[&str; 3], ParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    <[&str; 3]>::try_from(parts).map_err(|_| ParseError::InvalidArguments(args.to_owned()))
}

fn number(arg: &str, args: &str) -> Result<f64, ParseError> {
    arg.parse::<f64>()
        .map_err(|_| ParseError::InvalidArguments(args.to_owned()))
}

/// Parse the arguments of a CSS rgb function.
///
/// The allowed style is rgb(r,g,b) with channels in 0-255.
fn parse_css_rgb(args: &str) -> Result<Color, ColorError> {
    let [r, g, b] = split_args(args)?;
    let color = Color::try_rgb(number(r, args)?, number(g, args)?, number(b, args)?)?;
    Ok(color)
}

/// Parse the arguments of a CSS hsl function.
///
/// The allowed style is hsl(h,s%,l%). The percent signs are optional; s and l
/// are always read as percentages.
fn parse_css_hsl(args: &str) -> Result<Color, ColorError> {
    let [h, s, l] = split_args(args)?;
    let percent = |v: &str| number(v.trim_end_matches('%').trim_end(), args).map(|v| v / 100.0);

    let color = Color::hsl(number(h, args)?, percent(s)?, percent(l)?)?;
    Ok(color)
}

/// Parse a free-text color expression.
///
/// Accepts `rgb(r,g,b)`, `hsl(h,s%,l%)`, or a hex code with or without `#`.
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty.into());
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        log::trace!("parsing {s:?} as rgb()");
        return parse_css_rgb(args);
    }
    if let Some(args) = lower.strip_prefix("hsl(").and_then(|x| x.strip_suffix(')')) {
        log::trace!("parsing {s:?} as hsl()");
        return parse_css_hsl(args);
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_empty() && hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        log::trace!("parsing {s:?} as hex");
        return Ok(parse_hex(hex)?);
    }

    log::debug!("unrecognized color expression {s:?}");
    Err(ParseError::Unrecognized(s.to_owned()).into())
}

impl core::str::FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
