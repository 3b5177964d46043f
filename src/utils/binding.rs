//! Request binding: content-type check, required fields and field types.
//!
//! Bodies are parsed into a `serde_json::Value` first so that missing and
//! wrongly typed fields can be reported by name, one error at a time.

use actix_web::{http::header, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    StringList,
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::StringList => value
                .as_array()
                .map(|items| items.iter().all(Value::is_string))
                .unwrap_or(false),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::StringList => "an array of strings",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequiredField {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A JSON request body whose required fields are checked before deserializing.
pub trait JsonRequest: DeserializeOwned {
    const FIELDS: &'static [RequiredField];
}

fn required_field_missing(name: &str) -> AppError {
    AppError::UserError(format!("The required field {} is not supplied", name))
}

fn ensure_json_content_type(req: &HttpRequest) -> Result<(), AppError> {
    let content_type = match req.headers().get(header::CONTENT_TYPE) {
        Some(value) => value.to_str().unwrap_or_default(),
        None => {
            return Err(AppError::UserError(
                "Content-Type header of application/json must be provided".to_string(),
            ))
        }
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case("application/json") {
        Ok(())
    } else {
        Err(AppError::UserError(
            "Content-Type header must be application/json".to_string(),
        ))
    }
}

pub fn bind_json<T: JsonRequest>(req: &HttpRequest, body: &[u8]) -> Result<T, AppError> {
    ensure_json_content_type(req)?;

    let invalid_body = || AppError::UserError("Request body must be a valid JSON object".to_string());

    let value: Value = serde_json::from_slice(body).map_err(|_| invalid_body())?;
    let object = value.as_object().ok_or_else(invalid_body)?;

    for field in T::FIELDS {
        match object.get(field.name) {
            None | Some(Value::Null) => return Err(required_field_missing(field.name)),
            // An empty string counts as not supplied
            Some(Value::String(text)) if field.kind == FieldKind::String && text.is_empty() => {
                return Err(required_field_missing(field.name))
            }
            Some(found) if !field.kind.matches(found) => {
                return Err(AppError::UserError(format!(
                    "The field {} must be {}",
                    field.name,
                    field.kind.describe()
                )))
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::UserError(format!("Invalid request body: {}", e)))
}

/// Values of a repeatable query parameter (`?teacher=a&teacher=b`) in order.
/// At least one value must be present.
pub fn required_query_values(params: &[(String, String)], key: &str) -> Result<Vec<String>, AppError> {
    let values: Vec<String> = params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .collect();

    if values.is_empty() {
        return Err(required_field_missing(key));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        teacher: String,
        students: Vec<String>,
    }

    impl JsonRequest for Sample {
        const FIELDS: &'static [RequiredField] = &[
            RequiredField { name: "teacher", kind: FieldKind::String },
            RequiredField { name: "students", kind: FieldKind::StringList },
        ];
    }

    fn json_request() -> HttpRequest {
        TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .to_http_request()
    }

    fn user_error(result: Result<Sample, AppError>) -> String {
        match result {
            Err(AppError::UserError(msg)) => msg,
            other => panic!("expected user error, got {:?}", other),
        }
    }

    #[test]
    fn test_binds_valid_body() {
        let body = br#"{"teacher": "t@x.com", "students": ["s@x.com"]}"#;
        let sample: Sample = bind_json(&json_request(), body).unwrap();
        assert_eq!(sample.teacher, "t@x.com");
        assert_eq!(sample.students, vec!["s@x.com"]);
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        assert_eq!(
            user_error(bind_json(&json_request(), b"{}")),
            "The required field teacher is not supplied"
        );
        assert_eq!(
            user_error(bind_json(&json_request(), br#"{"teacher": "t@x.com"}"#)),
            "The required field students is not supplied"
        );
        assert_eq!(
            user_error(bind_json(&json_request(), br#"{"teacher": null, "students": []}"#)),
            "The required field teacher is not supplied"
        );
    }

    #[test]
    fn test_wrong_types() {
        assert_eq!(
            user_error(bind_json(&json_request(), br#"{"teacher": [], "students": "s@x.com"}"#)),
            "The field teacher must be a string"
        );
        assert_eq!(
            user_error(bind_json(&json_request(), br#"{"teacher": "t@x.com", "students": "s@x.com"}"#)),
            "The field students must be an array of strings"
        );
        assert_eq!(
            user_error(bind_json(&json_request(), br#"{"teacher": "t@x.com", "students": [1]}"#)),
            "The field students must be an array of strings"
        );
    }

    #[test]
    fn test_content_type() {
        let missing = TestRequest::default().to_http_request();
        assert_eq!(
            user_error(bind_json(&missing, b"{}")),
            "Content-Type header of application/json must be provided"
        );

        let html = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "text/html; charset=UTF-8"))
            .to_http_request();
        assert_eq!(
            user_error(bind_json(&html, b"{}")),
            "Content-Type header must be application/json"
        );

        let with_charset = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "application/json; charset=utf-8"))
            .to_http_request();
        assert!(bind_json::<Sample>(&with_charset, br#"{"teacher": "t", "students": []}"#).is_ok());
    }

    #[test]
    fn test_malformed_body() {
        assert_eq!(
            user_error(bind_json(&json_request(), b"not json")),
            "Request body must be a valid JSON object"
        );
        assert_eq!(
            user_error(bind_json(&json_request(), b"[1, 2]")),
            "Request body must be a valid JSON object"
        );
    }

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_required_query_values_keeps_order() {
        let values = required_query_values(
            &params(&[("teacher", "a@x.com"), ("other", "1"), ("teacher", "b@x.com")]),
            "teacher",
        )
        .unwrap();
        assert_eq!(values, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_required_query_values_missing() {
        assert_eq!(
            required_query_values(&params(&[("student", "s@x.com")]), "teacher"),
            Err(AppError::UserError("The required field teacher is not supplied".into()))
        );
    }

    #[test]
    fn test_empty_string_is_not_supplied() {
        #[derive(Debug, Deserialize)]
        struct Notify {
            #[allow(dead_code)]
            teacher: String,
            #[allow(dead_code)]
            notification: String,
        }

        impl JsonRequest for Notify {
            const FIELDS: &'static [RequiredField] = &[
                RequiredField { name: "teacher", kind: FieldKind::String },
                RequiredField { name: "notification", kind: FieldKind::String },
            ];
        }

        fn missing(body: &[u8]) -> String {
            match bind_json::<Notify>(&json_request(), body) {
                Err(AppError::UserError(msg)) => msg,
                other => panic!("expected user error, got {:?}", other),
            }
        }

        assert_eq!(
            missing(br#"{"teacher": "t1@gmail.com", "notification": ""}"#),
            "The required field notification is not supplied"
        );
        assert_eq!(
            missing(br#"{"teacher": "", "notification": "hello"}"#),
            "The required field teacher is not supplied"
        );

        // Empty lists are still supplied
        let sample: Sample = bind_json(&json_request(), br#"{"teacher": "t@x.com", "students": []}"#).unwrap();
        assert!(sample.students.is_empty());
    }
}
