//! Integration tests for curl to Python conversion through the library API

use curlpy::convert::{Body, HttpMethod};
use curlpy::{convert, convert_curl_to_python, ConvertError, FieldWarning};

fn code(command: &str) -> String {
    convert_curl_to_python(command).expect("conversion should succeed")
}

// =============================================================================
// Method selection
// =============================================================================

#[test]
fn test_method_defaults_to_get() {
    let conversion = convert("curl https://example.com").unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Get);
    assert!(conversion.request.body.is_none());
    assert!(conversion.request.headers.is_empty());
    assert!(conversion.code.contains("response = requests.get(url)"));
}

#[test]
fn test_data_implies_post() {
    let conversion = convert(r#"curl -d "a=1" https://example.com"#).unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Post);
    assert_eq!(conversion.request.body.as_deref(), Some("a=1"));
    assert_eq!(conversion.request.url, "https://example.com");
}

#[test]
fn test_later_method_flag_overrides_data() {
    let conversion = convert(r#"curl -d "a=1" -X PUT https://example.com"#).unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Put);
    assert!(conversion.code.contains("response = requests.put(url, data=data)"));
}

#[test]
fn test_later_data_flag_overrides_method() {
    let conversion = convert(r#"curl -X PUT -d "a=1" https://example.com"#).unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Post);
}

#[test]
fn test_method_is_uppercased() {
    let conversion = convert("curl --request delete https://example.com/items/1").unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Delete);
    assert!(conversion.code.contains("requests.delete(url)"));
}

#[test]
fn test_head_flag() {
    let conversion = convert("curl -I https://example.com").unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Head);
}

// =============================================================================
// Headers, query, body, auth, TLS
// =============================================================================

#[test]
fn test_header_parsing_trims() {
    let conversion = convert(r#"curl -H "Content-Type:   application/json  " https://example.com"#).unwrap();
    assert_eq!(
        conversion.request.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert!(conversion.code.contains("headers = {'Content-Type': 'application/json'}"));
}

#[test]
fn test_headers_keep_first_seen_order() {
    let output = code("curl -H 'B: 1' -H 'A: 2' -H 'B: 3' https://example.com");
    assert!(output.contains("headers = {'B': '3', 'A': '2'}"));
}

#[test]
fn test_query_split() {
    let conversion = convert(r#"curl "https://example.com/search?q=hello&lang=en""#).unwrap();
    assert_eq!(conversion.request.url, "https://example.com/search");
    assert_eq!(conversion.request.query_params["q"], "hello");
    assert_eq!(conversion.request.query_params["lang"], "en");
    assert!(conversion.code.contains("url = 'https://example.com/search'"));
    assert!(conversion.code.contains("params = {'q': 'hello', 'lang': 'en'}"));
    assert!(conversion.code.contains("response = requests.get(url, params=params)"));
}

#[test]
fn test_query_values_percent_decoded() {
    let conversion = convert("curl 'https://example.com/?name=J%C3%BCrgen%20M'").unwrap();
    assert_eq!(conversion.request.query_params["name"], "Jürgen M");
}

#[test]
fn test_json_body_is_structured() {
    let output = code(r#"curl -X POST -H 'Content-Type: application/json' -d '{"name": "John", "admin": false}' https://example.com/users"#);
    assert!(output.contains("data = {'name': 'John', 'admin': False}"));
    assert!(output.contains("response = requests.post(url, headers=headers, data=data)"));
}

#[test]
fn test_invalid_json_body_falls_back_to_raw() {
    let conversion = convert(r#"curl -d '{"name": ' https://example.com"#).unwrap();
    let raw = conversion.request.body.as_deref().unwrap();
    assert_eq!(Body::classify(raw), Body::Raw(r#"{"name": "#.to_string()));
    assert!(conversion.code.contains(r#"data = '{"name": '"#));
}

#[test]
fn test_escaped_json_in_double_quotes() {
    let output = code(r#"curl -d "{\"id\": 1}" https://example.com"#);
    assert!(output.contains("data = {'id': 1}"));
}

#[test]
fn test_auth_credential() {
    let output = code("curl -u admin:s3cr:et https://example.com");
    assert!(output.contains("auth = ('admin', 's3cr:et')"));
    assert!(output.contains("response = requests.get(url, auth=auth)"));
}

#[test]
fn test_auth_without_colon_degrades() {
    let conversion = convert("curl -u badcred https://example.com").unwrap();
    assert!(conversion.request.auth.is_none());
    assert_eq!(conversion.warnings, vec![FieldWarning::MalformedCredential]);
    assert!(!conversion.code.contains("auth"));
}

#[test]
fn test_insecure_flag() {
    let conversion = convert("curl -k https://example.com").unwrap();
    assert!(!conversion.request.verify_ssl);
    assert!(conversion.code.contains("\nverify = False\n"));
    assert!(conversion.code.contains("response = requests.get(url, verify=verify)"));
}

#[test]
fn test_unrecognized_flags_ignored() {
    let conversion = convert("curl --compressed -L -o out.txt -A 'agent/1' https://example.com").unwrap();
    assert_eq!(conversion.request.url, "https://example.com");
    assert_eq!(conversion.ignored_flags, vec!["--compressed", "-L", "-o", "-A"]);
    assert!(conversion.warnings.is_empty());
}

#[test]
fn test_multiline_command() {
    let command = "curl https://api.example.com/v1/items \\\n  -H 'Accept: application/json' \\\n  -k";
    let conversion = convert(command).unwrap();
    assert_eq!(conversion.request.url, "https://api.example.com/v1/items");
    assert_eq!(conversion.request.headers.len(), 1);
    assert!(!conversion.request.verify_ssl);
}

#[test]
fn test_bundled_switch_with_method() {
    let conversion = convert("curl -sX POST https://example.com/api").unwrap();
    assert_eq!(conversion.request.url, "https://example.com/api");
    assert_eq!(conversion.request.method, HttpMethod::Post);
    assert!(conversion.code.contains("response = requests.post(url)"));
}

#[test]
fn test_bundled_switch_with_data() {
    let conversion = convert("curl -kd 'a=1' https://example.com").unwrap();
    assert_eq!(conversion.request.url, "https://example.com");
    assert_eq!(conversion.request.body.as_deref(), Some("a=1"));
    assert!(!conversion.request.verify_ssl);
    assert!(conversion.code.contains("response = requests.post(url, data=data, verify=verify)"));
}

#[test]
fn test_attached_method_value() {
    let conversion = convert("curl -XPUT https://example.com/items/3").unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Put);
    assert_eq!(conversion.request.url, "https://example.com/items/3");
}

#[test]
fn test_get_flag_after_data_keeps_body() {
    let conversion = convert("curl -d 'q=1' -G https://example.com/search").unwrap();
    assert_eq!(conversion.request.method, HttpMethod::Get);
    assert!(conversion.code.contains("data = 'q=1'"));
    assert!(conversion.code.contains("response = requests.get(url, data=data)"));
}

#[test]
fn test_url_flag() {
    let conversion = convert("curl -H 'A: b' --url 'https://example.com/x?y=1'").unwrap();
    assert_eq!(conversion.request.url, "https://example.com/x");
    assert_eq!(conversion.request.query_params["y"], "1");
}

#[test]
fn test_large_integer_body_keeps_digits() {
    let output = code(r#"curl -d '{"id": 12345678901234567890123}' https://example.com"#);
    assert!(output.contains("data = {'id': 12345678901234567890123}"));
}

// =============================================================================
// Full output and determinism
// =============================================================================

#[test]
fn test_full_output() {
    let output = code(
        "curl -X PATCH 'https://example.com/api?v=2' -H 'Accept: */*' -d '[1, 2]' -u u:p --insecure",
    );
    let expected = "\
import requests

url = 'https://example.com/api'
params = {'v': '2'}
headers = {'Accept': '*/*'}
data = [1, 2]
auth = ('u', 'p')
verify = False

response = requests.post(url, params=params, headers=headers, data=data, auth=auth, verify=verify)

print(f'Status Code: {response.status_code}')
print(f'Response: {response.text}')";
    assert_eq!(output, expected);
}

#[test]
fn test_output_is_deterministic() {
    let command = r#"curl -H 'X: 1' -H 'Y: 2' -d '{"b": 1, "a": 2}' "https://example.com/?z=1&y=2""#;
    let first = code(command);
    for _ in 0..5 {
        assert_eq!(code(command), first);
    }
    assert!(first.contains("data = {'b': 1, 'a': 2}"));
}

// =============================================================================
// Fatal errors
// =============================================================================

#[test]
fn test_missing_url_is_fatal() {
    assert_eq!(convert_curl_to_python("curl").unwrap_err(), ConvertError::UrlNotFound);
    assert_eq!(
        convert_curl_to_python("curl -H 'Accept: x' -d body").unwrap_err(),
        ConvertError::UrlNotFound
    );
}

#[test]
fn test_missing_keyword_is_fatal() {
    assert_eq!(
        convert_curl_to_python("not curl").unwrap_err(),
        ConvertError::InvalidCommand
    );
    assert_eq!(
        convert_curl_to_python("   ").unwrap_err(),
        ConvertError::InvalidCommand
    );
}

#[test]
fn test_concurrent_conversions() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || code(&format!("curl -d 'n={}' https://example.com/{}", i, i)))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let output = handle.join().unwrap();
        assert!(output.contains(&format!("url = 'https://example.com/{}'", i)));
        assert!(output.contains(&format!("data = 'n={}'", i)));
    }
}
