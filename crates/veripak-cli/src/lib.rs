//! CLI library components for the VeriPak QC Dashboard.

pub mod logging;
