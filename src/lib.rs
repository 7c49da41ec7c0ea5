//! curlpy library interface
//!
//! Converts `curl` command lines into equivalent Python `requests` code.
//!
//! # Module Organization
//!
//! - [`convert`] - The converter: tokenizing, option scanning, request model, code emission
//! - [`service`] - Conversion outcomes and history bookkeeping around the converter
//! - [`history`] - File-backed conversion history
//! - [`errors`] - Error types (ConvertError, FieldWarning, CurlpyError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - CLI execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod convert;
pub mod core;
pub mod errors;
pub mod history;
pub mod logging;
pub mod service;
pub mod status;

pub use convert::{convert, convert_curl_to_python, validate_command, Conversion};
pub use errors::{ConvertError, CurlpyError, FieldWarning, Result};
pub use service::{ConversionOutcome, ConverterService};
