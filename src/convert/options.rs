//! curl option scanning
//!
//! Walks the tokens after the `curl` keyword and sorts them into recognized
//! options (kept in order of appearance) and positional arguments.

use crate::convert::tokenize::unquote;
use crate::errors::FieldWarning;

/// A recognized curl option with its unquoted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurlOption {
    Request(String),
    Header(String),
    Data(String),
    User(String),
    Insecure,
    Get,
    Head,
}

/// Result of scanning a tokenized command
#[derive(Debug, Default)]
pub struct ScannedArgs {
    /// Recognized options, in order of appearance
    pub options: Vec<CurlOption>,
    /// Unquoted positional arguments (URL candidates)
    pub positionals: Vec<String>,
    /// Unrecognized flags that were skipped
    pub ignored: Vec<String>,
    pub warnings: Vec<FieldWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Request,
    Header,
    Data,
    User,
    Url,
    Insecure,
    Get,
    Head,
}

impl Flag {
    fn takes_value(self) -> bool {
        matches!(self, Flag::Request | Flag::Header | Flag::Data | Flag::User | Flag::Url)
    }

    fn from_long(name: &str) -> Option<Self> {
        match name {
            "--request" => Some(Flag::Request),
            "--header" => Some(Flag::Header),
            "--data" | "--data-raw" | "--data-ascii" | "--data-binary" => Some(Flag::Data),
            "--user" => Some(Flag::User),
            "--url" => Some(Flag::Url),
            "--insecure" => Some(Flag::Insecure),
            "--get" => Some(Flag::Get),
            "--head" => Some(Flag::Head),
            _ => None,
        }
    }

    fn from_short(c: char) -> Option<Self> {
        match c {
            'X' => Some(Flag::Request),
            'H' => Some(Flag::Header),
            'd' => Some(Flag::Data),
            'u' => Some(Flag::User),
            'k' => Some(Flag::Insecure),
            'G' => Some(Flag::Get),
            'I' => Some(Flag::Head),
            _ => None,
        }
    }
}

/// Unsupported short flags that consume the following token
const SHORT_FLAGS_WITH_VALUE: &[char] = &[
    'A', 'b', 'c', 'C', 'D', 'e', 'E', 'F', 'K', 'm', 'o', 'P', 'Q', 'r', 't', 'T', 'U', 'w', 'x',
    'y', 'Y', 'z',
];

/// Unsupported long flags that consume the following token
const LONG_FLAGS_WITH_VALUE: &[&str] = &[
    "--cacert",
    "--capath",
    "--cert",
    "--cert-type",
    "--config",
    "--connect-timeout",
    "--continue-at",
    "--cookie",
    "--cookie-jar",
    "--data-urlencode",
    "--dump-header",
    "--form",
    "--form-string",
    "--interface",
    "--key",
    "--key-type",
    "--limit-rate",
    "--max-filesize",
    "--max-redirs",
    "--max-time",
    "--output",
    "--proxy",
    "--proxy-user",
    "--quote",
    "--range",
    "--referer",
    "--resolve",
    "--retry",
    "--retry-delay",
    "--retry-max-time",
    "--telnet-option",
    "--upload-file",
    "--user-agent",
    "--write-out",
];

/// Scan tokens (everything after the `curl` keyword) into options and positionals
pub fn scan_options(tokens: &[String]) -> ScannedArgs {
    let mut scanned = ScannedArgs::default();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if token.len() < 2 || !token.starts_with('-') {
            scanned.positionals.push(unquote(token));
            continue;
        }

        if token.starts_with("--") {
            match Flag::from_long(token) {
                Some(flag) if flag.takes_value() => match iter.next() {
                    Some(value) => scanned.push_flag(flag, unquote(value)),
                    None => scanned.warnings.push(FieldWarning::MissingValue(token.clone())),
                },
                Some(flag) => scanned.push_flag(flag, String::new()),
                None => {
                    if LONG_FLAGS_WITH_VALUE.contains(&token.as_str()) {
                        iter.next();
                    }
                    scanned.ignored.push(token.clone());
                }
            }
            continue;
        }

        // Short flags: `-X`, `-XPUT`, or a bundle like `-sSk` / `-sX POST`.
        // A value-taking flag ends the bundle; the rest of the token is its value.
        let rest = &token[1..];
        for (i, c) in rest.char_indices() {
            let remaining = &rest[i + c.len_utf8()..];
            match Flag::from_short(c) {
                Some(flag) if flag.takes_value() => {
                    if !remaining.is_empty() {
                        scanned.push_flag(flag, unquote(remaining));
                    } else {
                        match iter.next() {
                            Some(value) => scanned.push_flag(flag, unquote(value)),
                            None => scanned
                                .warnings
                                .push(FieldWarning::MissingValue(format!("-{}", c))),
                        }
                    }
                    break;
                }
                Some(flag) => scanned.push_flag(flag, String::new()),
                None => {
                    scanned.ignored.push(format!("-{}", c));
                    if SHORT_FLAGS_WITH_VALUE.contains(&c) {
                        if remaining.is_empty() {
                            iter.next();
                        }
                        break;
                    }
                }
            }
        }
    }

    scanned
}

impl ScannedArgs {
    fn push_flag(&mut self, flag: Flag, value: String) {
        let option = match flag {
            Flag::Request => CurlOption::Request(value),
            Flag::Header => CurlOption::Header(value),
            Flag::Data => CurlOption::Data(value),
            Flag::User => CurlOption::User(value),
            Flag::Url => {
                self.positionals.push(value);
                return;
            }
            Flag::Insecure => CurlOption::Insecure,
            Flag::Get => CurlOption::Get,
            Flag::Head => CurlOption::Head,
        };
        self.options.push(option);
    }

    /// The target URL: the first positional argument
    pub fn url(&self) -> Option<&str> {
        self.positionals
            .iter()
            .map(String::as_str)
            .find(|p| !p.trim().is_empty())
    }
}
