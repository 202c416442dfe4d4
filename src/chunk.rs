//! String/byte-buffer conversions and byte comparison helpers.
//!
//! Strings can be converted to byte buffers and back in several encodings.
//! `Binary` treats each UTF-16 code unit of the string as one byte (its low
//! 8 bits), which round-trips arbitrary bytes through a string the way
//! JavaScript binary strings do. Comparison helpers order buffers
//! lexicographically with the shorter buffer first on ties.

use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// ENCODINGS
// ============================================================================

/// Supported string encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// One byte per UTF-16 code unit, low 8 bits.
    Binary,
    /// Standard base64 alphabet with `=` padding.
    Base64,
    /// URL-safe base64 alphabet, output unpadded.
    Base64Url,
    /// Hex pairs, uppercase on output, case-insensitive on input.
    Hex,
    /// UTF-16, big endian, two bytes per code unit.
    Utf16Be,
    /// UTF-16, little endian, two bytes per code unit.
    Utf16Le,
    /// UTF-8.
    #[default]
    Utf8,
}

/// Error produced when a string or buffer is malformed for its encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// A character falls outside the encoding's alphabet.
    InvalidCharacter(char),
    /// Input length is impossible for the encoding.
    InvalidLength(usize),
    /// The buffer is not valid for the target string encoding.
    InvalidBytes,
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::InvalidCharacter(c) => {
                write!(f, "Invalid character {:?} for encoding", c)
            }
            ChunkError::InvalidLength(len) => {
                write!(f, "Invalid input length {} for encoding", len)
            }
            ChunkError::InvalidBytes => write!(f, "Byte buffer is not valid for encoding"),
        }
    }
}

impl std::error::Error for ChunkError {}

// ============================================================================
// STRING TO BYTES
// ============================================================================

/// Convert a string to a byte buffer using the given encoding.
pub fn from_string(string: &str, encoding: Encoding) -> Result<Vec<u8>, ChunkError> {
    match encoding {
        Encoding::Binary => Ok(string.encode_utf16().map(|unit| unit as u8).collect()),
        Encoding::Base64 => decode_base64(string),
        Encoding::Base64Url => {
            let standard: String = string
                .chars()
                .map(|c| match c {
                    '-' => '+',
                    '_' => '/',
                    other => other,
                })
                .collect();
            decode_base64(&standard)
        }
        Encoding::Hex => decode_hex(string),
        Encoding::Utf16Be => Ok(string
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect()),
        Encoding::Utf16Le => Ok(string
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect()),
        Encoding::Utf8 => Ok(string.as_bytes().to_vec()),
    }
}

/// Convert a byte buffer to a string using the given encoding.
pub fn to_string(chunk: &[u8], encoding: Encoding) -> Result<String, ChunkError> {
    match encoding {
        Encoding::Binary => Ok(chunk.iter().map(|&byte| char::from(byte)).collect()),
        Encoding::Base64 => Ok(encode_base64(chunk)),
        Encoding::Base64Url => Ok(encode_base64(chunk)
            .chars()
            .filter(|&c| c != '=')
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                other => other,
            })
            .collect()),
        Encoding::Hex => {
            let mut out = String::with_capacity(chunk.len() * 2);
            for byte in chunk {
                out.push_str(&format!("{:02X}", byte));
            }
            Ok(out)
        }
        Encoding::Utf16Be => decode_utf16_units(chunk, u16::from_be_bytes),
        Encoding::Utf16Le => decode_utf16_units(chunk, u16::from_le_bytes),
        Encoding::Utf8 => String::from_utf8(chunk.to_vec()).map_err(|_| ChunkError::InvalidBytes),
    }
}

// ============================================================================
// COMPARISON AND CONCATENATION
// ============================================================================

/// Returns true if two buffers hold the same bytes.
pub fn equals(one: &[u8], two: &[u8]) -> bool {
    compare_prefixes(one, two) == Ordering::Equal
}

/// Compare two buffers byte by byte; on a common prefix the shorter
/// buffer orders first.
pub fn compare_prefixes(one: &[u8], two: &[u8]) -> Ordering {
    for (a, b) in one.iter().zip(two.iter()) {
        match a.cmp(b) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    one.len().cmp(&two.len())
}

/// Concatenate buffers into one.
pub fn concat(buffers: &[&[u8]]) -> Vec<u8> {
    let length = buffers.iter().map(|buffer| buffer.len()).sum();
    let mut result = Vec::with_capacity(length);
    for buffer in buffers {
        result.extend_from_slice(buffer);
    }
    result
}

// ============================================================================
// BASE64 AND HEX INTERNALS
// ============================================================================

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn base64_value(c: char) -> Result<u32, ChunkError> {
    match c {
        'A'..='Z' => Ok(c as u32 - 'A' as u32),
        'a'..='z' => Ok(c as u32 - 'a' as u32 + 26),
        '0'..='9' => Ok(c as u32 - '0' as u32 + 52),
        '+' => Ok(62),
        '/' => Ok(63),
        _ => Err(ChunkError::InvalidCharacter(c)),
    }
}

fn encode_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() + 2) / 3 * 4);
    for group in bytes.chunks(3) {
        let mut word = 0u32;
        for (i, &byte) in group.iter().enumerate() {
            word |= (byte as u32) << (16 - 8 * i);
        }
        // A 3-byte group yields 4 symbols; shorter tail groups pad with '='.
        for i in 0..4 {
            if i <= group.len() {
                let index = ((word >> (18 - 6 * i)) & 0x3F) as usize;
                out.push(BASE64_ALPHABET[index] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

fn decode_base64(string: &str) -> Result<Vec<u8>, ChunkError> {
    let symbols: Vec<char> = string.chars().filter(|&c| c != '=').collect();
    if symbols.len() % 4 == 1 {
        return Err(ChunkError::InvalidLength(string.len()));
    }

    let mut out = Vec::with_capacity(symbols.len() * 3 / 4);
    for group in symbols.chunks(4) {
        let mut word = 0u32;
        for (i, &c) in group.iter().enumerate() {
            word |= base64_value(c)? << (18 - 6 * i);
        }
        for i in 0..group.len() - 1 {
            out.push(((word >> (16 - 8 * i)) & 0xFF) as u8);
        }
    }
    Ok(out)
}

fn hex_value(c: char) -> Result<u8, ChunkError> {
    c.to_digit(16)
        .map(|digit| digit as u8)
        .ok_or(ChunkError::InvalidCharacter(c))
}

fn decode_hex(string: &str) -> Result<Vec<u8>, ChunkError> {
    let digits: Vec<char> = string.chars().collect();
    let mut out = Vec::with_capacity((digits.len() + 1) / 2);
    let mut cursor = digits.as_slice();

    // An odd-length string is treated as having a leading zero digit.
    if cursor.len() % 2 == 1 {
        out.push(hex_value(cursor[0])?);
        cursor = &cursor[1..];
    }
    for pair in cursor.chunks(2) {
        out.push(hex_value(pair[0])? << 4 | hex_value(pair[1])?);
    }
    Ok(out)
}

fn decode_utf16_units(
    chunk: &[u8],
    from_bytes: fn([u8; 2]) -> u16,
) -> Result<String, ChunkError> {
    if chunk.len() % 2 != 0 {
        return Err(ChunkError::InvalidLength(chunk.len()));
    }
    let units: Vec<u16> = chunk
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| ChunkError::InvalidBytes)
}
