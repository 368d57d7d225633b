//! # Constants and type definitions for mesalog
//!
//! This module centralizes the **fixed layout offsets**, **naming conventions**, and **common type
//! definitions** used throughout the `mesalog` library.
//!
//! ## Overview
//!
//! - Line offsets of the fixed preamble shared by MESA history and profile logs
//! - Naming conventions used to classify log files and resolve them on disk
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the header and table readers
//! and the restart pruning pass.

// -------------------------------------------------------------------------------------------------
// Fixed log layout
// -------------------------------------------------------------------------------------------------

/// Zero-based offset of the line holding the header field names
pub const HEADER_NAMES_LINE: usize = 1;

/// Zero-based offset of the line holding the header field values
pub const HEADER_VALUES_LINE: usize = 2;

/// Zero-based offset of the line holding the column names
pub const COLUMN_NAMES_LINE: usize = 5;

/// Zero-based offset of the first data row
pub const FIRST_DATA_LINE: usize = 6;

// -------------------------------------------------------------------------------------------------
// Naming conventions
// -------------------------------------------------------------------------------------------------

/// Suffix appended to a log path when probing for a gzip-compressed variant
pub const GZIP_SUFFIX: &str = ".gz";

/// File names containing this marker denote history logs
pub const HISTORY_MARKER: &str = "history";

/// Column driving the restart pruning pass on history logs
pub const MODEL_NUMBER_COLUMN: &str = "model_number";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// A single log column, stored contiguously in row order
pub type Column = Vec<f64>;
