//! On-disk layout of a symbol index.
//!
//! ```text
//! 0   magic "Rt" (byte 2 ignored)
//! 4   node count                i32
//! 8   location length (stride)  i32
//! 12  dictionary position       i32
//! 16  dictionary count          i32
//! 20  lookup table: node count entries of `location length` bytes
//!         node offset i32, then the location key padded/truncated
//! ..  root node record, then the remaining node records (reached by offset only)
//! ..  dictionary at `dictionary position`:
//!         name\0, location offsets i32 ..., 0
//! ```
//!
//! Node record:
//!
//! ```text
//! +0  type          i32
//! +4  location      i32 (offset of "file:line:col\0", 0 = none)
//! +8  parent        i32
//! +12 first child   i32
//! +16 next sibling  i32
//! +20 symbol name   NUL-terminated
//! ```
//!
//! All integers are little-endian. Offset 0 means "absent".

pub mod decoder;
pub mod header;

pub use decoder::{INT32_WIDTH, offset_field, read_cstr, read_i32};
pub use header::Header;

pub const MAGIC: [u8; 2] = *b"Rt";
pub const MIN_FILE_SIZE: u64 = 10;

pub const NODE_COUNT_POS: usize = 4;
pub const LOCATION_LENGTH_POS: usize = 8;
pub const DICTIONARY_POS_POS: usize = 12;
pub const DICTIONARY_COUNT_POS: usize = 16;
pub const FIRST_ENTRY_POS: usize = 20;

pub const NODE_TYPE: usize = 0;
pub const NODE_LOCATION: usize = 4;
pub const NODE_PARENT: usize = 8;
pub const NODE_FIRST_CHILD: usize = 12;
pub const NODE_NEXT_SIBLING: usize = 16;
pub const NODE_SYMBOL_NAME: usize = 20;
