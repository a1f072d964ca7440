//! Upstream repository layer.
//!
//! This backend keeps no scripture data of its own. Each repository here wraps one
//! upstream provider, owning its URL layout, authentication header and status handling,
//! so the service layer deals only in decoded documents.

pub mod esv;
pub mod scripture;
pub mod upstream;

#[cfg(test)]
mod test;
