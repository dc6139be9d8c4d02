//! Elementwise loop utilities.

pub mod fast_list;
