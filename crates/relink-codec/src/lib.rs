//! Relink Codec — line-oriented text encoding for rand-linked lists
//!
//! One record per node: `ID:<n> DATA:<payload> RAND:<m> PREV:<p> NEXT:<q>`.
//! Identifiers are positive integers assigned on first encounter within one
//! document; `0` marks an absent link. Payloads are percent-escaped so a
//! record always stays on one line. An empty document is the canonical
//! encoding of an empty list.

pub mod decode;
pub mod encode;
pub mod error;
pub mod escape;
pub mod wire;


pub use decode::{decode, decode_from};
pub use encode::{encode, encode_to};
pub use error::{CodecError, Result};
