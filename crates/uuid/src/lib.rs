//! Bundle-local unique tokens.
//!
//! Entries in a document bundle are addressed by a `fullUrl`. For patients and
//! observations that URL only has to be unique within one bundle, so it is built from a
//! freshly generated token rather than from record content.
//!
//! This crate provides:
//! - A small wrapper type ([`Token`]) that always renders in the canonical UUID text form.
//! - The [`TokenSource`] seam used by the mapper, with a random implementation for
//!   production ([`RandomTokens`]) and a counting one for reproducible output
//!   ([`SequentialTokens`]).
//!
//! ## Canonical token form
//! - Length: 36
//! - Lowercase hexadecimal in `8-4-4-4-12` hyphenated groups
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! This is the form FHIR expects after a `urn:uuid:` prefix.

mod token;

// Re-export public types
pub use token::{RandomTokens, SequentialTokens, Token, TokenSource, Uuid};
