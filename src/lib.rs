// lib.rs
pub mod cigar;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod normalize;
pub mod read;
pub mod record;
pub mod sam;
pub mod symbol;
