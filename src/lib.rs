//! # charhex
//!
//! Reads text line by line and prints, for every line, a record listing its
//! characters and a record listing their code points in hexadecimal.
//!
//! The library side exposes the [`charhex::transcoder`] core along with the
//! configuration, stream handling and command-line pieces used by the
//! `charhex` binary.

pub mod charhex;

pub use charhex::{run, Config};
