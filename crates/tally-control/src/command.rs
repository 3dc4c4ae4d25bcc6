//! Inbound command wire format.
//!
//! The hub sends short ASCII datagrams of the form
//! `O<r>/<g>/<b> S<r>/<g>/<b> 0x<hex> <dec>`: operator color, standby
//! color, pattern id (hex) and duration in milliseconds (decimal). Fields
//! are positional; a payload that does not match the format exactly is
//! rejected as a whole, never applied partially.

use crate::Rgb;

/// Maximum accepted datagram length.
pub const MAX_COMMAND_LEN: usize = 255;

/// Payloads of at least this length carry a timed render command whose
/// duration field is honored. Shorter payloads render immediately and
/// indefinitely.
pub const TIMED_PAYLOAD_MIN_LEN: usize = 26;

/// Command parsing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Payload does not match the expected format.
    Malformed,
}

/// A fully parsed render command.
///
/// Produced fresh per datagram and immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCommand {
    /// Color to show while the command is active.
    pub operator: Rgb,
    /// Color to fall back to once a timed command expires.
    pub standby: Rgb,
    /// Pattern id. Parsed and kept for the wire format, but the renderer
    /// only does solid color; no pattern playback is dispatched on it.
    pub pattern: u32,
    /// Duration of a timed render, in milliseconds.
    pub duration_ms: u32,
}

impl RenderCommand {
    /// Parse a raw datagram payload.
    ///
    /// All eight numeric fields must be present and valid; on any mismatch
    /// this returns [`ParseError::Malformed`] and no output.
    pub fn parse(payload: &[u8]) -> Result<Self, ParseError> {
        if payload.is_empty() || payload.len() > MAX_COMMAND_LEN {
            return Err(ParseError::Malformed);
        }
        let text = core::str::from_utf8(payload).map_err(|_| ParseError::Malformed)?;
        // Senders that format into a C string include the trailing NUL.
        let text = text.trim_end_matches('\0').trim_ascii();

        let mut fields = text.split_ascii_whitespace();
        let operator = parse_color(fields.next().ok_or(ParseError::Malformed)?, 'O')?;
        let standby = parse_color(fields.next().ok_or(ParseError::Malformed)?, 'S')?;
        let pattern = parse_pattern(fields.next().ok_or(ParseError::Malformed)?)?;
        let duration_ms = fields
            .next()
            .ok_or(ParseError::Malformed)?
            .parse::<u32>()
            .map_err(|_| ParseError::Malformed)?;
        if fields.next().is_some() {
            return Err(ParseError::Malformed);
        }

        Ok(Self {
            operator,
            standby,
            pattern,
            duration_ms,
        })
    }
}

/// Parse one `<tag><r>/<g>/<b>` color token.
fn parse_color(token: &str, tag: char) -> Result<Rgb, ParseError> {
    let rest = token.strip_prefix(tag).ok_or(ParseError::Malformed)?;
    let mut channels = rest.split('/');
    let r = parse_channel(channels.next())?;
    let g = parse_channel(channels.next())?;
    let b = parse_channel(channels.next())?;
    if channels.next().is_some() {
        return Err(ParseError::Malformed);
    }
    Ok(Rgb { r, g, b })
}

fn parse_channel(field: Option<&str>) -> Result<u8, ParseError> {
    field
        .ok_or(ParseError::Malformed)?
        .parse::<u8>()
        .map_err(|_| ParseError::Malformed)
}

/// Parse the `0x<hex>` pattern id token.
fn parse_pattern(token: &str) -> Result<u32, ParseError> {
    let digits = token.strip_prefix("0x").ok_or(ParseError::Malformed)?;
    u32::from_str_radix(digits, 16).map_err(|_| ParseError::Malformed)
}
