//! curl to Python conversion
//!
//! Turns a `curl` command line into an equivalent Python `requests` snippet.
//! The pipeline runs strictly forward:
//!
//! - **Validate**: the trimmed command must start with `curl`
//! - **Tokenize/Scan**: split into tokens and sort them into options and positionals
//! - **Build**: fold options into a [`RequestDescriptor`], split the query string
//! - **Emit**: render the descriptor as code
//!
//! # Example
//!
//! ```
//! let code = curlpy::convert::convert_curl_to_python(
//!     "curl -H 'Accept: application/json' https://api.example.com/users?page=2",
//! ).unwrap();
//!
//! assert!(code.contains("params = {'page': '2'}"));
//! assert!(code.contains("response = requests.get(url, params=params, headers=headers)"));
//! ```
//!
//! Only a missing `curl` keyword or a missing URL abort a conversion. Bad
//! headers, credentials or methods are dropped and listed in
//! [`Conversion::warnings`]; a body that is not JSON is emitted as a string.

pub mod body;
pub mod emit;
pub mod options;
pub mod python;
pub mod query;
pub mod request;
pub mod tokenize;

pub use body::Body;
pub use emit::{emit, EmittedVariables};
pub use options::{scan_options, CurlOption, ScannedArgs};
pub use request::{Credential, HttpMethod, RequestBuilder, RequestDescriptor};

use crate::errors::{ConvertError, FieldWarning};

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Generated Python code
    pub code: String,
    pub request: RequestDescriptor,
    /// Fields that were dropped while building the request
    pub warnings: Vec<FieldWarning>,
    /// Unsupported curl flags that were skipped
    pub ignored_flags: Vec<String>,
}

impl Conversion {
    /// Whether any field fell back to its degraded form
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Parse a curl command into a request descriptor without emitting code
pub fn parse_command(command: &str) -> Result<(RequestDescriptor, ScannedArgs), ConvertError> {
    let rest = tokenize::validate(command)?;
    let mut scanned = scan_options(&tokenize::tokenize(rest));
    let url = scanned.url().ok_or(ConvertError::UrlNotFound)?.to_string();

    let (request, warnings) = RequestBuilder::new(url).apply_all(&scanned.options).build();
    scanned.warnings.extend(warnings);

    Ok((request, scanned))
}

/// Convert a curl command, keeping the parsed request and any warnings
pub fn convert(command: &str) -> Result<Conversion, ConvertError> {
    let (request, scanned) = parse_command(command)?;
    let code = emit(&request);

    Ok(Conversion {
        code,
        request,
        warnings: scanned.warnings,
        ignored_flags: scanned.ignored,
    })
}

/// Convert a curl command to Python `requests` code
pub fn convert_curl_to_python(command: &str) -> Result<String, ConvertError> {
    convert(command).map(|conversion| conversion.code)
}

/// Check that a command has the `curl` keyword and an extractable URL
pub fn validate_command(command: &str) -> bool {
    parse_command(command).is_ok()
}
