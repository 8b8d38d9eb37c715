//! # Support Utilities

pub mod regex;
