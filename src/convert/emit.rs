//! Python `requests` code emission
//!
//! Renders a [`RequestDescriptor`] as a fixed sequence of lines. Optional
//! assignments are tracked in [`EmittedVariables`], which then decides the
//! keyword arguments of the request call.

use crate::convert::body::Body;
use crate::convert::python::{dict_literal, string_literal, value_literal};
use crate::convert::request::RequestDescriptor;

/// Module the generated code imports and calls
pub const CLIENT_MODULE: &str = "requests";

/// Optional variables assigned before the request call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmittedVariables {
    pub params: bool,
    pub headers: bool,
    pub data: bool,
    pub auth: bool,
    pub verify: bool,
}

impl EmittedVariables {
    /// Arguments for the request call, in fixed order
    pub fn call_arguments(&self) -> Vec<&'static str> {
        let mut args = vec!["url"];
        if self.params {
            args.push("params=params");
        }
        if self.headers {
            args.push("headers=headers");
        }
        if self.data {
            args.push("data=data");
        }
        if self.auth {
            args.push("auth=auth");
        }
        if self.verify {
            args.push("verify=verify");
        }
        args
    }
}

/// Render the request as Python code lines joined with `\n`
pub fn emit(request: &RequestDescriptor) -> String {
    let mut lines = vec![
        format!("import {}", CLIENT_MODULE),
        String::new(),
        format!("url = {}", string_literal(&request.url)),
    ];
    let mut emitted = EmittedVariables::default();

    if !request.query_params.is_empty() {
        lines.push(format!("params = {}", dict_literal(&request.query_params)));
        emitted.params = true;
    }

    if !request.headers.is_empty() {
        lines.push(format!("headers = {}", dict_literal(&request.headers)));
        emitted.headers = true;
    }

    if let Some(ref raw) = request.body {
        let literal = match Body::classify(raw) {
            Body::Structured(value) => value_literal(&value),
            Body::Raw(text) => string_literal(&text),
        };
        lines.push(format!("data = {}", literal));
        emitted.data = true;
    }

    if let Some(ref credential) = request.auth {
        lines.push(format!(
            "auth = ({}, {})",
            string_literal(&credential.username),
            string_literal(credential.password.as_str())
        ));
        emitted.auth = true;
    }

    if !request.verify_ssl {
        lines.push("verify = False".to_string());
        emitted.verify = true;
    }

    lines.push(String::new());
    lines.push(format!(
        "response = {}.{}({})",
        CLIENT_MODULE,
        request.method.function_name(),
        emitted.call_arguments().join(", ")
    ));
    lines.push(String::new());
    lines.push("print(f'Status Code: {response.status_code}')".to_string());
    lines.push("print(f'Response: {response.text}')".to_string());

    lines.join("\n")
}
