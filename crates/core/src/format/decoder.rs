use crate::error::{Result, RtscopeError};

pub const INT32_WIDTH: usize = 4;

/// Read a little-endian `i32` at `offset`.
pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32> {
    let bytes = offset
        .checked_add(INT32_WIDTH)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| RtscopeError::out_of_bounds(offset, INT32_WIDTH, buf.len()))?;
    let mut raw = [0u8; INT32_WIDTH];
    raw.copy_from_slice(bytes);
    Ok(i32::from_le_bytes(raw))
}

/// Borrow the bytes from `offset` up to (not including) the next NUL.
pub fn read_cstr_bytes(buf: &[u8], offset: usize) -> Result<&[u8]> {
    let tail = buf
        .get(offset..)
        .ok_or_else(|| RtscopeError::out_of_bounds(offset, 1, buf.len()))?;
    let len = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| RtscopeError::out_of_bounds(offset, tail.len() + 1, buf.len()))?;
    Ok(&tail[..len])
}

/// Borrow the NUL-terminated UTF-8 string at `offset`.
pub fn read_cstr(buf: &[u8], offset: usize) -> Result<&str> {
    let bytes = read_cstr_bytes(buf, offset)?;
    std::str::from_utf8(bytes).map_err(|e| {
        RtscopeError::InvalidFormat(format!("string at offset {} is not UTF-8: {}", offset, e))
    })
}

/// Interpret a stored offset field. Zero is the "absent" sentinel.
pub fn offset_field(raw: i32) -> Result<Option<usize>> {
    match raw {
        0 => Ok(None),
        r if r < 0 => Err(RtscopeError::OutOfBounds {
            offset: r as i64,
            width: 0,
            len: 0,
        }),
        r => Ok(Some(r as usize)),
    }
}
