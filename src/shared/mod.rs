//! Geteilte Konstanten.

pub mod options;
