// Imprint: near-duplicate text detection via 64-bit simhash fingerprints.
//
// This is the library root. The simhash module is the computational core;
// the rest is document acquisition, configuration, and presentation around
// it. Fetching and markup stripping belong to callers — the core only ever
// receives extracted plain text.

pub mod config;
pub mod document;
pub mod output;
pub mod simhash;
