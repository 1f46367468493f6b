use super::decoder::{INT32_WIDTH, read_i32};
use super::{
    DICTIONARY_COUNT_POS, DICTIONARY_POS_POS, FIRST_ENTRY_POS, LOCATION_LENGTH_POS, MAGIC,
    MIN_FILE_SIZE, NODE_COUNT_POS,
};
use crate::error::{Result, RtscopeError};

/// Scalars stored at the start of every index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub node_count: usize,
    /// Stride of one lookup entry, including its leading node-offset field.
    pub location_length: usize,
    pub dictionary_pos: usize,
    pub dictionary_count: usize,
}

impl Header {
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if (buf.len() as u64) < MIN_FILE_SIZE {
            return Err(RtscopeError::TooSmall {
                size: buf.len() as u64,
            });
        }
        if buf[..MAGIC.len()] != MAGIC {
            return Err(RtscopeError::InvalidFormat("bad magic marker".to_string()));
        }

        let node_count = read_i32(buf, NODE_COUNT_POS)?;
        let location_length = read_i32(buf, LOCATION_LENGTH_POS)?;
        let dictionary_pos = read_i32(buf, DICTIONARY_POS_POS)?;
        let dictionary_count = read_i32(buf, DICTIONARY_COUNT_POS)?;
        tracing::debug!(
            node_count,
            location_length,
            dictionary_pos,
            dictionary_count,
            "Read index header"
        );

        if location_length <= 0 || node_count <= 0 {
            return Err(RtscopeError::InvalidFormat(format!(
                "non-positive header scalars (node count {}, location length {})",
                node_count, location_length
            )));
        }
        if (location_length as usize) < INT32_WIDTH {
            return Err(RtscopeError::InvalidFormat(format!(
                "location length {} cannot hold a node offset",
                location_length
            )));
        }
        if dictionary_pos < 0 || dictionary_count < 0 {
            return Err(RtscopeError::InvalidFormat(format!(
                "negative dictionary scalars (position {}, count {})",
                dictionary_pos, dictionary_count
            )));
        }

        let header = Header {
            node_count: node_count as usize,
            location_length: location_length as usize,
            dictionary_pos: dictionary_pos as usize,
            dictionary_count: dictionary_count as usize,
        };

        let table_len = header
            .node_count
            .checked_mul(header.location_length)
            .filter(|len| FIRST_ENTRY_POS + len <= buf.len())
            .ok_or_else(|| {
                RtscopeError::out_of_bounds(
                    FIRST_ENTRY_POS,
                    header.node_count.saturating_mul(header.location_length),
                    buf.len(),
                )
            })?;
        tracing::debug!("Lookup table spans {} bytes", table_len);

        Ok(header)
    }

    /// Length of the comparable string key inside one lookup entry.
    pub fn key_len(&self) -> usize {
        self.location_length - INT32_WIDTH
    }

    pub fn entry_offset(&self, index: usize) -> usize {
        FIRST_ENTRY_POS + index * self.location_length
    }

    /// The root record sits right after the lookup table.
    pub fn root_offset(&self) -> usize {
        self.entry_offset(self.node_count)
    }
}
