//! Game implementations.

pub mod quixo;
