//! Length-prefixed string codec
//!
//! Each string region holds a length byte `n` followed by `n` raw bytes.
//! A length of zero, or one larger than the region allows, reads back as an
//! empty string: an erased or corrupted region never yields partial text.

use heapless::{String, Vec};

use dreamclock_hal::{ByteMemory, MemoryError};

use super::layout::FieldRegion;
use super::record::floor_char_boundary;

/// Number of payload bytes `text` occupies once stored in `region`
///
/// Text longer than the region is cut at the last character boundary that
/// fits. The length byte caps everything at 255.
pub fn encoded_len(text: &str, region: FieldRegion) -> u8 {
    let max = (region.max_len as usize).min(u8::MAX as usize);
    floor_char_boundary(text, max) as u8
}

/// Validate a stored length byte against the region limit
///
/// Returns `None` when the region must be treated as empty.
pub fn stored_len(len_byte: u8, region: FieldRegion) -> Option<u8> {
    if len_byte == 0 || len_byte > region.max_len {
        None
    } else {
        Some(len_byte)
    }
}

/// Write `text` into `region`
///
/// Writes the length byte first, then the payload in address order.
/// Returns the number of payload bytes stored.
pub fn write_str<M: ByteMemory>(
    memory: &mut M,
    region: FieldRegion,
    text: &str,
) -> Result<u8, MemoryError> {
    let len = encoded_len(text, region);
    memory.write_byte(region.offset, len)?;

    for (i, &byte) in text.as_bytes()[..len as usize].iter().enumerate() {
        memory.write_byte(region.payload_addr(i as u8), byte)?;
    }

    Ok(len)
}

/// Read the string stored in `region`
///
/// `N` must be at least `region.max_len`; a payload that is not valid
/// UTF-8 reads back as an empty string, like any other corrupt region.
pub fn read_str<M: ByteMemory, const N: usize>(
    memory: &mut M,
    region: FieldRegion,
) -> Result<String<N>, MemoryError> {
    let len_byte = memory.read_byte(region.offset)?;
    let Some(len) = stored_len(len_byte, region) else {
        return Ok(String::new());
    };

    let mut bytes: Vec<u8, N> = Vec::new();
    for i in 0..len {
        let byte = memory.read_byte(region.payload_addr(i))?;
        if bytes.push(byte).is_err() {
            return Ok(String::new());
        }
    }

    Ok(String::from_utf8(bytes).unwrap_or_default())
}

/// Overwrite a whole region (length byte and payload) with zeros
pub fn erase_region<M: ByteMemory>(memory: &mut M, region: FieldRegion) -> Result<(), MemoryError> {
    for addr in region.offset..region.end() {
        memory.write_byte(addr, 0x00)?;
    }
    Ok(())
}
