use super::IndexView;
use crate::error::{Result, RtscopeError};
use crate::format::{INT32_WIDTH, offset_field, read_i32};
use std::cmp::Ordering;

/// Compare a lookup key with a search target the way `strncmp` would, bounded to
/// the key's width. The target behaves as if NUL-terminated.
pub fn compare_key(key: &[u8], target: &[u8], case_insensitive: bool) -> Ordering {
    for (i, &k) in key.iter().enumerate() {
        let t = target.get(i).copied().unwrap_or(0);
        let (k, t) = if case_insensitive {
            (k.to_ascii_lowercase(), t.to_ascii_lowercase())
        } else {
            (k, t)
        };
        if k != t {
            return k.cmp(&t);
        }
        if k == 0 {
            break;
        }
    }
    Ordering::Equal
}

impl<'a> IndexView<'a> {
    /// The `index`-th lookup entry as (node offset, location key).
    pub fn entry(&self, index: usize) -> Result<(usize, &'a [u8])> {
        let start = self.header.entry_offset(index);
        let node = offset_field(read_i32(self.buf, start)?)?.ok_or_else(|| {
            RtscopeError::InvalidFormat(format!("lookup entry {} has no node", index))
        })?;
        let key_start = start + INT32_WIDTH;
        let key = self
            .buf
            .get(key_start..key_start + self.header.key_len())
            .ok_or_else(|| {
                RtscopeError::out_of_bounds(key_start, self.header.key_len(), self.buf.len())
            })?;
        Ok((node, key))
    }

    /// Binary search the lookup table for `location`, returning the node offset.
    ///
    /// When several entries share the key, the lowest node offset wins.
    pub fn find_by_location(
        &self,
        location: &str,
        case_insensitive: bool,
    ) -> Result<Option<usize>> {
        let target = location.as_bytes();
        let count = self.header.node_count;

        let (mut lo, mut hi) = (0, count);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (_, key) = self.entry(mid)?;
            if compare_key(key, target, case_insensitive) == Ordering::Less {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        let mut found: Option<usize> = None;
        for index in lo..count {
            let (node, key) = self.entry(index)?;
            if compare_key(key, target, case_insensitive) != Ordering::Equal {
                break;
            }
            found = Some(found.map_or(node, |best| best.min(node)));
        }

        match found {
            Some(node) => tracing::debug!("Location {} maps to node @{}", location, node),
            None => tracing::debug!("Location {} not in lookup table", location),
        }
        Ok(found)
    }
}
