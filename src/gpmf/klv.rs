//! Decodes raw GPMF KLV (key, length, value) data into a flat
//! sequence of `TaggedRecord`, in logged order.
//!
//! Each KLV entry is an 8 byte header followed by a payload padded to 32 bits:
//! - FourCC (4 bytes)
//! - type (1 byte, ASCII char, `0` for nested entries such as `DEVC`, `STRM`)
//! - struct size (1 byte, size of a single sample)
//! - repeat (2 bytes, big endian, number of samples)
//!
//! Nested entries are walked depth-first and only leaf entries are returned.

use std::io::{Cursor, Read};

use binrw::{BinRead, BinReaderExt};
use log::debug;

use crate::{constants::GPMF_KLV_HEADER_SIZE, FourCC, GpmfError};

use super::{TaggedRecord, Value};

#[derive(Debug, BinRead)]
#[br(big)]
struct KlvHeader {
    fourcc: [u8; 4],
    type_char: u8,
    size: u8,
    repeat: u16,
}

impl KlvHeader {
    fn payload_len(&self) -> u64 {
        self.size as u64 * self.repeat as u64
    }

    /// Payload length including 32-bit alignment padding.
    fn padded_len(&self) -> u64 {
        (self.payload_len() + 3) & !3
    }
}

/// Decode raw GPMF bytes.
pub fn decode(data: &[u8]) -> Result<Vec<TaggedRecord>, GpmfError> {
    let mut cursor = Cursor::new(data);
    let mut records: Vec<TaggedRecord> = Vec::new();
    read_container(&mut cursor, data.len() as u64, &mut records)?;
    Ok(records)
}

/// Reads entries until `end`. `TYPE` definitions for complex
/// structures are valid for the remainder of the container they were logged in.
fn read_container(
    cursor: &mut Cursor<&[u8]>,
    end: u64,
    records: &mut Vec<TaggedRecord>,
) -> Result<(), GpmfError> {
    let mut type_def: Option<String> = None;

    while cursor.position() + GPMF_KLV_HEADER_SIZE <= end {
        let header: KlvHeader = cursor.read_be()?;
        let fourcc = FourCC::from_slice(&header.fourcc);

        // zero padding, nothing more to read in this container
        if fourcc.is_invalid() {
            break
        }

        let start = cursor.position();
        let len = header.payload_len();
        if start + len > end {
            return Err(GpmfError::ReadMismatch{got: end - start, expected: len})
        }

        if header.type_char == 0 {
            read_container(cursor, start + len, records)?;
        } else {
            let value = read_value(cursor, &header, type_def.as_deref())?;
            debug!("{fourcc} '{}' size {} repeat {}",
                char::from(header.type_char), header.size, header.repeat);

            if fourcc == FourCC::TYPE {
                if let Value::String(s) = &value {
                    type_def = Some(s.to_owned());
                }
            }
            records.push(TaggedRecord{fourcc, value});
        }

        cursor.set_position((start + header.padded_len()).min(end));
    }

    Ok(())
}

fn read_value(
    cursor: &mut Cursor<&[u8]>,
    header: &KlvHeader,
    type_def: Option<&str>,
) -> Result<Value, GpmfError> {
    let size = header.size as usize;
    let len = header.payload_len() as usize;

    match header.type_char {
        // ASCII, FourCC, UTC datetime string (interpreted later)
        b'c' | b'F' | b'U' => {
            let bytes = read_bytes(cursor, len)?;
            let separator = if size > 1 && header.type_char != b'U' {","} else {""};
            let strings = bytes.chunks(size.max(1))
                .map(|c| String::from_utf8_lossy(c).trim_end_matches('\0').to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>();
            Ok(Value::String(strings.join(separator)))
        },
        b'?' => match type_def.and_then(|t| complex_layout(t, size)) {
            Some(layout) => read_samples(cursor, &layout, header.repeat),
            None => Ok(Value::Raw(read_bytes(cursor, len)?))
        },
        t => match element_size(t) {
            Some(elem) if size > 0 && size % elem == 0 => {
                let layout = vec![t; size / elem];
                read_samples(cursor, &layout, header.repeat)
            },
            _ => Ok(Value::Raw(read_bytes(cursor, len)?))
        }
    }
}

/// Element types for complex structure, if all types
/// are numerical and add up to struct size.
fn complex_layout(type_def: &str, size: usize) -> Option<Vec<u8>> {
    let layout = type_def.as_bytes().to_vec();
    let total = layout.iter()
        .map(|t| element_size(*t))
        .sum::<Option<usize>>()?;
    (total == size).then_some(layout)
}

fn read_samples(
    cursor: &mut Cursor<&[u8]>,
    layout: &[u8],
    repeat: u16,
) -> Result<Value, GpmfError> {
    let samples = (0..repeat)
        .map(|_| layout.iter()
            .map(|t| read_number(cursor, *t))
            .collect::<Result<Vec<_>, GpmfError>>())
        .collect::<Result<Vec<_>, GpmfError>>()?;
    Ok(Value::Numbers(samples))
}

fn element_size(type_char: u8) -> Option<usize> {
    match type_char {
        b'b' | b'B' => Some(1),
        b's' | b'S' => Some(2),
        b'l' | b'L' | b'f' | b'q' => Some(4),
        b'j' | b'J' | b'd' | b'Q' => Some(8),
        _ => None
    }
}

fn read_number(cursor: &mut Cursor<&[u8]>, type_char: u8) -> Result<f64, GpmfError> {
    let number = match type_char {
        b'b' => cursor.read_be::<i8>()? as f64,
        b'B' => cursor.read_be::<u8>()? as f64,
        b's' => cursor.read_be::<i16>()? as f64,
        b'S' => cursor.read_be::<u16>()? as f64,
        b'l' => cursor.read_be::<i32>()? as f64,
        b'L' => cursor.read_be::<u32>()? as f64,
        b'j' => cursor.read_be::<i64>()? as f64,
        b'J' => cursor.read_be::<u64>()? as f64,
        b'f' => cursor.read_be::<f32>()? as f64,
        b'd' => cursor.read_be::<f64>()?,
        // Q15.16
        b'q' => cursor.read_be::<i32>()? as f64 / 65536.0,
        // Q31.32
        b'Q' => cursor.read_be::<i64>()? as f64 / 4294967296.0,
        t => return Err(GpmfError::InvalidValue{
            fourcc: FourCC::Other(char::from(t).to_string()),
            expected: "numerical type"
        })
    };
    Ok(number)
}

fn read_bytes(cursor: &mut Cursor<&[u8]>, len: usize) -> Result<Vec<u8>, GpmfError> {
    let mut buf = vec![0_u8; len];
    cursor.read_exact(&mut buf)?;
    Ok(buf)
}
