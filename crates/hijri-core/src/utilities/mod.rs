//! Miscellaneous utilities: string parsers for date inputs.

pub mod data_parsers;
