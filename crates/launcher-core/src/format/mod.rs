//! The launcher config file format.
//!
//! UTF-8 text, one setting per line:
//!
//! ```text
//! #############################
//! ### <banner comment lines> ##
//! #############################
//!
//! #<comment line>
//! <key>=<value>
//! ```
//!
//! - **`line`**     – classifies a single line (comment, blank, data, ignored).
//! - **`document`** – operations over a whole file's text: lookup, listing,
//!   in-place upsert, and rendering a freshly seeded file.
//!
//! Nothing here performs I/O; callers hand in the file content as a `&str`
//! and write back whatever string they get.

pub mod document;
pub mod line;
