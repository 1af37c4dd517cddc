// Output formatting — terminal display for fingerprints and comparisons.

pub mod terminal;
