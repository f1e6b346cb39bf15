//! Wire format constants shared by encoder and decoder
//!
//! Fixed literal tags insulate the format from renames in the data model.
//! The field delimiter can be a plain space only because the escaper never
//! lets one through in a payload.

/// Separates fields within a record.
pub const FIELD_DELIM: char = ' ';

/// Separates a field tag from its value.
pub const TAG_SEP: char = ':';

/// Stands for an absent payload.
pub const NULL_TOKEN: &str = "NULL";

/// Reference value for an absent link; real identifiers start at 1.
pub const NULL_REF: u64 = 0;

/// Minimum number of fields in a well-formed record.
pub const MIN_FIELDS: usize = 5;

pub const TAG_ID: &str = "ID";
pub const TAG_DATA: &str = "DATA";
pub const TAG_RAND: &str = "RAND";
pub const TAG_PREV: &str = "PREV";
pub const TAG_NEXT: &str = "NEXT";
