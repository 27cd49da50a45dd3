//! Color expression resolution

use super::{ColorError, ColorSchemes, Rgb};
use crate::spec::Value;

/// Maximum number of chained `scheme.key` references
pub const MAX_REFERENCE_DEPTH: usize = 16;

/// Resolve a color expression to a concrete color
///
/// Accepted forms, in the order they are tried:
/// 1. a three-element numeric list, `[10, 20, 30]`
/// 2. a `#RRGGBB` hex string
/// 3. a `scheme.key` reference into `schemes`, resolved recursively
/// 4. a delimited triple, `"10, 20, 30"` or `"(10, 20, 30)"`
///
/// Anything else resolves to black with a warning. The only error is a
/// reference chain that revisits itself or exceeds [`MAX_REFERENCE_DEPTH`].
pub fn resolve(expr: &Value, schemes: &ColorSchemes) -> Result<Rgb, ColorError> {
    let mut chain = Vec::new();
    resolve_value(expr, schemes, &mut chain)
}

fn resolve_value(
    expr: &Value,
    schemes: &ColorSchemes,
    chain: &mut Vec<String>,
) -> Result<Rgb, ColorError> {
    match expr {
        Value::List(items) if items.len() == 3 => {
            let components: Option<Vec<i64>> = items.iter().map(Value::as_i64).collect();
            Ok(components
                .and_then(|c| rgb_from_components(&c))
                .unwrap_or_else(|| fallback(expr)))
        }
        Value::String(s) => resolve_str(s, schemes, chain),
        _ => Ok(fallback(expr)),
    }
}

fn resolve_str(s: &str, schemes: &ColorSchemes, chain: &mut Vec<String>) -> Result<Rgb, ColorError> {
    if s.starts_with('#') && s.len() == 7 {
        return Ok(parse_hex(s).unwrap_or_else(|| fallback_str(s)));
    }

    if let Some((scheme, key)) = s.split_once('.') {
        let Some(target) = schemes.lookup(scheme, key) else {
            log::warn!("color reference '{}' not found in color schemes, using black", s);
            return Ok(Rgb::BLACK);
        };

        let revisited = chain.iter().any(|seen| seen == s);
        chain.push(s.to_string());
        if revisited || chain.len() > MAX_REFERENCE_DEPTH {
            return Err(ColorError::cycle(chain.clone()));
        }
        let resolved = resolve_value(target, schemes, chain);
        chain.pop();
        return resolved;
    }

    Ok(parse_triple(s).unwrap_or_else(|| fallback_str(s)))
}

/// Parse `#RRGGBB`
fn parse_hex(s: &str) -> Option<Rgb> {
    let channel = |range: std::ops::Range<usize>| s.get(range).and_then(|h| u8::from_str_radix(h, 16).ok());
    Some(Rgb::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Parse `"r, g, b"` with optional surrounding parentheses
fn parse_triple(s: &str) -> Option<Rgb> {
    let inner = s.trim().trim_matches(|c| c == '(' || c == ')');
    let components: Option<Vec<i64>> = inner
        .split(',')
        .map(|token| token.trim().parse::<i64>().ok())
        .collect();
    rgb_from_components(&components?)
}

fn rgb_from_components(components: &[i64]) -> Option<Rgb> {
    match components {
        [r, g, b] => Some(Rgb::new(
            u8::try_from(*r).ok()?,
            u8::try_from(*g).ok()?,
            u8::try_from(*b).ok()?,
        )),
        _ => None,
    }
}

fn fallback(expr: &Value) -> Rgb {
    log::warn!("unresolvable color expression {}, using black", expr);
    Rgb::BLACK
}

fn fallback_str(s: &str) -> Rgb {
    log::warn!("unresolvable color expression '{}', using black", s);
    Rgb::BLACK
}
