//! Argument serialization
//!
//! Turns the argument list of a log call into the message part of a line.
//! Serialization never fails: values that cannot be JSON encoded fall back
//! to their `Debug` rendering.

use super::log_value::{ErrorValue, LogValue};
use std::backtrace::BacktraceStatus;
use std::fmt::Write;

/// Serialize every argument and join them with a single space
///
/// Objects and arrays are JSON encoded; JSON strings and numbers print as
/// plain text whether they come from [`LogValue::json`] or a
/// `serde_json::Value`. Encoding is not cycle-aware: a `Serialize` impl that
/// follows a reference cycle (for example an upgraded `Weak` back-pointer)
/// recurses until the stack overflows, and so does its `Debug` fallback.
pub fn serialize(args: &[LogValue<'_>]) -> String {
    args.iter()
        .map(serialize_value)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize a single argument
pub fn serialize_value(value: &LogValue<'_>) -> String {
    match value {
        LogValue::Error(error) => render_error(error),
        LogValue::Object(object) => match object.to_json() {
            Ok(encoded) => unquote(encoded),
            Err(_) => format!("{:?}", object),
        },
        LogValue::Json(json) => render_json(json),
        LogValue::Text(text) => text.to_string(),
        LogValue::Int(i) => i.to_string(),
        LogValue::UInt(u) => u.to_string(),
        LogValue::Float(f) => format_float(*f),
        LogValue::Bool(b) => b.to_string(),
        LogValue::Null => "null".to_string(),
    }
}

/// Top-level JSON strings print as their plain text
fn unquote(encoded: String) -> String {
    if encoded.starts_with('"') {
        serde_json::from_str(&encoded).unwrap_or(encoded)
    } else {
        encoded
    }
}

fn render_json(json: &serde_json::Value) -> String {
    match json {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_infinite() {
        if f.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        f.to_string()
    }
}

/// `Kind: message`, followed by the source chain and a captured backtrace
fn render_error(value: &ErrorValue<'_>) -> String {
    let mut out = format!("{}: {}", value.kind(), value.error());

    let mut source = value.error().source();
    while let Some(cause) = source {
        let _ = write!(out, "\n    caused by: {}", cause);
        source = cause.source();
    }

    if let Some(backtrace) = value.backtrace() {
        if backtrace.status() == BacktraceStatus::Captured {
            let _ = write!(out, "\n{}", backtrace);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Debug, thiserror::Error)]
    #[error("Oops!")]
    struct Error;

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct RequestError {
        #[source]
        source: std::io::Error,
    }

    #[derive(Debug, Serialize)]
    struct Payload {
        foo: &'static str,
    }

    #[test]
    fn test_scalars_are_coerced() {
        let args = [
            LogValue::from("hello"),
            LogValue::from(42),
            LogValue::from(1.5),
            LogValue::from(false),
            LogValue::Null,
        ];
        assert_eq!(serialize(&args), "hello 42 1.5 false null");
    }

    #[test]
    fn test_empty_args() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_floats_follow_shortest_form() {
        assert_eq!(serialize_value(&LogValue::from(1.0)), "1");
        assert_eq!(serialize_value(&LogValue::from(f64::INFINITY)), "Infinity");
        assert_eq!(serialize_value(&LogValue::from(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(serialize_value(&LogValue::from(f64::NAN)), "NaN");
    }

    #[test]
    fn test_object_is_json_encoded() {
        let payload = Payload { foo: "bar" };
        assert_eq!(serialize_value(&LogValue::json(&payload)), r#"{"foo":"bar"}"#);

        let json = serde_json::json!({"foo": "bar"});
        assert_eq!(serialize_value(&LogValue::from(json)), r#"{"foo":"bar"}"#);

        let list = vec![1, 2, 3];
        assert_eq!(serialize_value(&LogValue::json(&list)), "[1,2,3]");
    }

    #[test]
    fn test_json_scalars_are_not_quoted() {
        assert_eq!(serialize_value(&LogValue::from(serde_json::json!("plain"))), "plain");
        assert_eq!(serialize_value(&LogValue::from(serde_json::json!(7))), "7");
        assert_eq!(serialize_value(&LogValue::from(serde_json::Value::Null)), "null");
    }

    #[test]
    fn test_borrowed_strings_match_owned_json() {
        let plain = String::from("plain");
        assert_eq!(serialize_value(&LogValue::json(&plain)), "plain");
        assert_eq!(
            serialize_value(&LogValue::json(&plain)),
            serialize_value(&LogValue::from(serde_json::json!("plain")))
        );

        let quoted = String::from("say \"hi\"");
        assert_eq!(serialize_value(&LogValue::json(&quoted)), "say \"hi\"");
        assert_eq!(serialize_value(&LogValue::json(&7u8)), "7");
    }

    #[test]
    fn test_struct_fields_keep_declaration_order() {
        #[derive(Debug, Serialize)]
        struct Request {
            path: &'static str,
            method: &'static str,
        }

        let request = Request {
            path: "/health",
            method: "GET",
        };
        assert_eq!(
            serialize_value(&LogValue::json(&request)),
            r#"{"path":"/health","method":"GET"}"#
        );
    }

    #[test]
    fn test_f32_keeps_its_shortest_form() {
        assert_eq!(serialize(&[LogValue::from(0.1f32)]), "0.1");
        assert_eq!(serialize(&[LogValue::from(0.1f32)]), 0.1f32.to_string());
        assert_eq!(serialize_value(&LogValue::from(2.5f32)), "2.5");
        assert_eq!(serialize_value(&LogValue::from(f32::INFINITY)), "Infinity");
        assert_eq!(serialize_value(&LogValue::from(f32::NAN)), "NaN");
    }

    #[test]
    fn test_unencodable_object_falls_back_to_debug() {
        // JSON object keys must be strings
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");

        let text = serialize_value(&LogValue::json(&map));
        assert_eq!(text, format!("{:?}", map));
        assert!(text.contains("pair"));
    }

    #[test]
    fn test_error_kind_and_message() {
        let err = Error;
        assert_eq!(serialize_value(&LogValue::error(&err)), "Error: Oops!");
    }

    #[test]
    fn test_error_source_chain() {
        let err = RequestError {
            source: std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out"),
        };
        let text = serialize_value(&LogValue::error(&err));

        assert!(text.starts_with("RequestError: request failed"));
        assert!(text.contains("\n    caused by: upstream timed out"));
    }

    #[test]
    fn test_error_named() {
        let boxed: Box<dyn std::error::Error> = "bad input".into();
        let text = serialize_value(&LogValue::error_named("ValidationError", boxed.as_ref()));
        assert_eq!(text, "ValidationError: bad input");
    }

    #[test]
    fn test_disabled_backtrace_is_omitted() {
        let err = Error;
        let backtrace = std::backtrace::Backtrace::disabled();
        let text = serialize_value(&LogValue::error_with_backtrace(&err, &backtrace));
        assert_eq!(text, "Error: Oops!");
    }

    #[test]
    fn test_captured_backtrace_is_appended() {
        let err = Error;
        let backtrace = std::backtrace::Backtrace::force_capture();
        let text = serialize_value(&LogValue::error_with_backtrace(&err, &backtrace));
        assert!(text.starts_with("Error: Oops!"));
        if backtrace.status() == BacktraceStatus::Captured {
            assert!(text.len() > "Error: Oops!".len());
        }
    }
}
