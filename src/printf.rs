//! Printf-style template rendering.
//!
//! Directive grammar:
//!
//! ```text
//! %[flags][width][.precision]conv
//! flags  := '-' (left align) | '0' (zero pad, numeric only) | '+' (print sign, numeric only)
//! width  := decimal integer (minimum rendered width, space padded)
//! conv   := s   any value, canonical textual form (precision truncates scalars)
//!           d i integer rendering of a number, truncated toward zero
//!           f   fixed-point rendering of a number (default precision 6)
//!           e   scientific rendering of a number
//!           x X lower/upper hexadecimal of a number, truncated toward zero
//!           o   octal of a number, truncated toward zero
//!           b   binary of a number, truncated toward zero
//!           c   the character named by an integral code point
//!           j   JSON rendering of any value
//!           %   literal percent sign (consumes no argument)
//! ```
//!
//! Arguments are consumed left to right, one per directive. Surplus arguments are ignored;
//! a missing argument, a numeric conversion over a non-number, or a malformed directive fails
//! with a [`FormatError`] carrying the conversion and argument index. Nothing is written on
//! failure — rendering is all-or-nothing.

use kindred_core::{Value, num};
use tracing::trace;

use crate::errors::FormatError;
use crate::json;

/// Conversions that consume a number and honor the `0`/`+` flags.
const NUMERIC_CONVERSIONS: &[char] = &['d', 'i', 'f', 'e', 'x', 'X', 'o', 'b'];

#[derive(Clone, Copy)]
struct Directive {
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Render `template` against `args`.
///
/// ## Examples
/// ```rust
/// use kindred::printf::printf;
/// use kindred_core::Value;
///
/// let line = printf("%s scored %05.1f%%", &[Value::str("ada"), Value::Number(97.5)]);
/// assert_eq!(line.as_deref(), Ok("ada scored 097.5%"));
/// ```
pub fn printf(template: &str, args: &[Value]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    let mut next_arg = 0usize;

    while let Some((start, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let directive = parse_directive(start, &mut chars)?;
        if directive.conversion == '%' {
            out.push('%');
            continue;
        }

        let index = next_arg;
        let arg = args.get(index).ok_or(FormatError::MissingArgument {
            conversion: directive.conversion,
            index,
        })?;
        next_arg += 1;
        trace!(conversion = %directive.conversion, index, "rendering directive");

        let rendered = render(directive, arg, index)?;
        push_padded(&mut out, &rendered, directive);
    }

    Ok(out)
}

fn parse_directive(
    start: usize,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Result<Directive, FormatError> {
    let mut directive = Directive {
        left_align: false,
        zero_pad: false,
        plus_sign: false,
        width: None,
        precision: None,
        conversion: '%',
    };

    loop {
        match chars.peek() {
            Some((_, '-')) => {
                directive.left_align = true;
                chars.next();
            }
            Some((_, '0')) => {
                directive.zero_pad = true;
                chars.next();
            }
            Some((_, '+')) => {
                directive.plus_sign = true;
                chars.next();
            }
            _ => break,
        }
    }

    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        directive.width = Some(directive.width.unwrap_or(0) * 10 + digit as usize);
        chars.next();
    }

    if matches!(chars.peek(), Some((_, '.'))) {
        chars.next();
        let mut precision = 0usize;
        while let Some(&(_, c)) = chars.peek() {
            let Some(digit) = c.to_digit(10) else { break };
            precision = precision * 10 + digit as usize;
            chars.next();
        }
        directive.precision = Some(precision);
    }

    let Some((at, conversion)) = chars.next() else {
        return Err(FormatError::Incomplete { at: start });
    };
    if conversion != '%' && !"sdifexXobcj".contains(conversion) {
        return Err(FormatError::UnknownConversion {
            found: conversion,
            at,
        });
    }
    directive.conversion = conversion;
    Ok(directive)
}

fn render(directive: Directive, arg: &Value, index: usize) -> Result<String, FormatError> {
    let conversion = directive.conversion;
    match conversion {
        's' => {
            let mut text = arg.to_string();
            if let Some(precision) = directive.precision {
                text = text.chars().take(precision).collect();
            }
            Ok(text)
        }
        'j' => Ok(json::to_json(arg)),
        'd' | 'i' => {
            let n = require_finite(conversion, arg, index)?;
            let truncated = n.trunc() as i128;
            Ok(with_sign(truncated < 0, directive, truncated.unsigned_abs().to_string()))
        }
        'f' => {
            let n = require_number(conversion, arg, index)?;
            if !n.is_finite() {
                return Ok(num::format_number(n));
            }
            let body = num::to_fixed(n.abs(), directive.precision.unwrap_or(6));
            Ok(with_sign(n.is_sign_negative(), directive, body))
        }
        'e' => {
            let n = require_number(conversion, arg, index)?;
            if !n.is_finite() {
                return Ok(num::format_number(n));
            }
            let body = match directive.precision {
                Some(precision) => format!("{:.precision$e}", n.abs()),
                None => format!("{:e}", n.abs()),
            };
            Ok(with_sign(n.is_sign_negative(), directive, body))
        }
        'x' | 'X' | 'o' | 'b' => {
            let n = require_finite(conversion, arg, index)?;
            let truncated = n.trunc() as i128;
            let magnitude = truncated.unsigned_abs();
            let body = match conversion {
                'x' => format!("{magnitude:x}"),
                'X' => format!("{magnitude:X}"),
                'o' => format!("{magnitude:o}"),
                _ => format!("{magnitude:b}"),
            };
            Ok(with_sign(truncated < 0, directive, body))
        }
        'c' => {
            let n = require_finite(conversion, arg, index)?;
            if n.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&n) {
                return Err(FormatError::BadCodePoint { index });
            }
            match char::from_u32(n as u32) {
                Some(ch) => Ok(ch.to_string()),
                None => Err(FormatError::BadCodePoint { index }),
            }
        }
        _ => unreachable!("parse_directive admits no other conversion"),
    }
}

fn require_number(conversion: char, arg: &Value, index: usize) -> Result<f64, FormatError> {
    match arg {
        Value::Number(n) => Ok(*n),
        other => Err(FormatError::WrongKind {
            conversion,
            index,
            actual: other.kind(),
        }),
    }
}

fn require_finite(conversion: char, arg: &Value, index: usize) -> Result<f64, FormatError> {
    let n = require_number(conversion, arg, index)?;
    if !n.is_finite() {
        return Err(FormatError::NotFinite { conversion, index });
    }
    Ok(n)
}

/// Attach the sign to an unsigned numeric body.
fn with_sign(negative: bool, directive: Directive, body: String) -> String {
    if negative {
        format!("-{body}")
    } else if directive.plus_sign {
        format!("+{body}")
    } else {
        body
    }
}

fn push_padded(out: &mut String, rendered: &str, directive: Directive) {
    let len = rendered.chars().count();
    let width = directive.width.unwrap_or(0);
    if len >= width {
        out.push_str(rendered);
        return;
    }
    let padding = width - len;
    let numeric = NUMERIC_CONVERSIONS.contains(&directive.conversion);
    if directive.left_align {
        out.push_str(rendered);
        out.extend(std::iter::repeat_n(' ', padding));
    } else if directive.zero_pad && numeric {
        // Zeros go between the sign and the digits.
        let sign_len = if rendered.starts_with(['-', '+']) { 1 } else { 0 };
        out.push_str(&rendered[..sign_len]);
        out.extend(std::iter::repeat_n('0', padding));
        out.push_str(&rendered[sign_len..]);
    } else {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(rendered);
    }
}
