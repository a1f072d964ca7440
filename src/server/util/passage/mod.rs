//! ESV passage handling.
//!
//! scripture.api.bible returns chapters as a structured document of `para` and `verse`
//! nodes. The ESV API only offers plain text with inline `[n]` verse markers and expects
//! human-readable references. The functions here bridge the two:
//!
//! - [`normalize`] turns a dotted USFM reference (`NAH.1`) into an ESV query (`Nahum 1`)
//! - [`segment`] splits ESV text at its verse markers and rebuilds the structured shape
//!
//! Both are pure and total; malformed input produces degenerate output, never an error.

mod normalize;
mod segment;

pub use normalize::{book_alias, normalize};
pub use segment::{segment, sid_prefix, verse_spans};

#[cfg(test)]
mod test;
