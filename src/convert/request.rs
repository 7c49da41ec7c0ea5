//! Normalized request model
//!
//! Scanned options are folded, in order, into a [`RequestDescriptor`]. Fields
//! that cannot be interpreted are dropped and reported as [`FieldWarning`]s.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::convert::options::CurlOption;
use crate::convert::query::split_query;
use crate::errors::FieldWarning;

/// HTTP methods the generated `requests` call can express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Name of the matching `requests` module function
    pub fn function_name(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = FieldWarning;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(FieldWarning::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A string that redacts its value in Debug output to prevent credential leakage
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "SecretString(\"\")")
        } else {
            write!(f, "SecretString(\"[REDACTED]\")")
        }
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString(s.to_string())
    }
}

/// Basic auth credential taken from `-u user:pass`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: SecretString,
}

impl Credential {
    /// Split `user:pass` on the first colon
    pub fn parse(raw: &str) -> Result<Self, FieldWarning> {
        let (username, password) = raw
            .split_once(':')
            .ok_or(FieldWarning::MalformedCredential)?;
        Ok(Self {
            username: username.to_string(),
            password: SecretString::from(password),
        })
    }
}

/// Parse a header string "Name: Value"
pub fn parse_header(header: &str) -> Result<(String, String), FieldWarning> {
    let malformed = || FieldWarning::MalformedHeader(header.to_string());
    let (name, value) = header.split_once(':').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Normalized request extracted from a curl command
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: HttpMethod,
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
    pub query_params: IndexMap<String, String>,
    pub auth: Option<Credential>,
    pub verify_ssl: bool,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::default(),
            headers: IndexMap::new(),
            body: None,
            query_params: IndexMap::new(),
            auth: None,
            verify_ssl: true,
        }
    }
}

/// Folds scanned options into a [`RequestDescriptor`]
#[derive(Debug)]
pub struct RequestBuilder {
    request: RequestDescriptor,
    user: Option<String>,
    warnings: Vec<FieldWarning>,
}

impl RequestBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            request: RequestDescriptor::new(url),
            user: None,
            warnings: Vec::new(),
        }
    }

    /// Apply one option; later options override earlier ones
    pub fn apply(&mut self, option: &CurlOption) {
        match option {
            CurlOption::Request(value) => match value.parse::<HttpMethod>() {
                Ok(method) => self.request.method = method,
                Err(warning) => self.warnings.push(warning),
            },
            CurlOption::Header(value) => match parse_header(value) {
                Ok((name, value)) => {
                    self.request.headers.insert(name, value);
                }
                Err(warning) => self.warnings.push(warning),
            },
            CurlOption::Data(value) => {
                self.request.body = Some(value.clone());
                self.request.method = HttpMethod::Post;
            }
            CurlOption::User(value) => self.user = Some(value.clone()),
            CurlOption::Insecure => self.request.verify_ssl = false,
            CurlOption::Get => self.request.method = HttpMethod::Get,
            CurlOption::Head => self.request.method = HttpMethod::Head,
        }
    }

    pub fn apply_all<'a>(mut self, options: impl IntoIterator<Item = &'a CurlOption>) -> Self {
        for option in options {
            self.apply(option);
        }
        self
    }

    /// Resolve the credential and split the query string off the URL
    pub fn build(mut self) -> (RequestDescriptor, Vec<FieldWarning>) {
        if let Some(user) = self.user.take() {
            match Credential::parse(&user) {
                Ok(credential) => self.request.auth = Some(credential),
                Err(warning) => self.warnings.push(warning),
            }
        }

        let (base, params) = split_query(&self.request.url);
        self.request.url = base;
        self.request.query_params = params;

        (self.request, self.warnings)
    }
}
