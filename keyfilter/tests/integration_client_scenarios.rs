//! Realistic request-logging payloads run through the default policy.
//!
//! Each scenario mirrors what an HTTP middleware hands its logger: request
//! metadata, filtered headers, query strings, bodies, and error details.

use keyfilter::{FieldPolicy, RedactedJsonExt, RedactedOutput, ToRedactedOutput, redact};
use serde::Serialize;
use serde_json::json;

mod request_logging {
    use super::*;

    #[test]
    fn request_start_record() {
        let policy = FieldPolicy::default();
        let request = json!({
            "requestId": "req_1700000000000_abc123def",
            "method": "GET",
            "url": "/api/items?access_token=abc&page=2",
            "path": "/api/items",
            "query": {"access_token": "abc", "page": "2"},
            "headers": {
                "user-agent": "curl/8.0",
                "content-type": "application/json",
                "accept": "*/*",
                "x-forwarded-for": "10.0.0.1"
            },
            "ip": "10.0.0.1",
            "requestSize": 0
        });

        let redacted = redact(&request, &policy);
        assert_eq!(redacted["query"], json!({"access_token": "[FILTERED]", "page": "2"}));
        assert_eq!(redacted["headers"], request["headers"]);
        // Values are not inspected, so a token embedded in the URL survives.
        assert_eq!(redacted["url"], request["url"]);
    }

    #[test]
    fn request_error_record() {
        let policy = FieldPolicy::default();
        let error = json!({
            "requestId": "req_1",
            "method": "POST",
            "error": {"message": "Invalid credentials", "name": "AuthError", "code": 401},
            "requestBody": {
                "username": "ann",
                "password": "hunter2",
                "profile": {"displayName": "Ann", "creditCard": {"number": "4111", "cvv": "123"}}
            },
            "params": {"id": "42"}
        });

        let redacted = redact(&error, &policy);
        assert_eq!(
            redacted["requestBody"],
            json!({
                "username": "[FILTERED]",
                "password": "[FILTERED]",
                "profile": {"displayName": "Ann", "creditCard": "[FILTERED]"}
            })
        );
        assert_eq!(redacted["error"], error["error"]);
        assert_eq!(redacted["params"], error["params"]);
    }

    #[test]
    fn response_body_list() {
        let policy = FieldPolicy::default();
        let response = json!([
            {"id": 1, "name": "Item 1", "owner": {"email": "a@b.com"}},
            {"id": 2, "name": "Item 2", "owner": {"email": "c@d.com"}}
        ]);
        let redacted = redact(&response, &policy);
        assert_eq!(redacted[0]["owner"]["email"], "[FILTERED]");
        assert_eq!(redacted[1]["name"], "Item 2");
        assert_eq!(redacted.as_array().unwrap().len(), 2);
    }

    #[test]
    fn authorization_header_map() {
        let policy = FieldPolicy::default();
        let headers = json!({"Authorization": "Bearer eyJ...", "X-Auth-User": "ann", "Origin": "https://app"});
        assert_eq!(
            redact(&headers, &policy),
            json!({"Authorization": "[FILTERED]", "X-Auth-User": "[FILTERED]", "Origin": "https://app"})
        );
    }
}

mod domain_types {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct UserProfile {
        id: u64,
        display_name: String,
        email: String,
        social_security_number: String,
        socials: Vec<Social>,
    }

    #[derive(Serialize)]
    struct Social {
        network: String,
        handle: String,
        oauth_token: Option<String>,
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: 7,
            display_name: "Ann".into(),
            email: "ann@example.com".into(),
            social_security_number: "123-45-6789".into(),
            socials: vec![Social {
                network: "github".into(),
                handle: "ann".into(),
                oauth_token: Some("gho_abc".into()),
            }],
        }
    }

    #[test]
    fn serialized_struct_is_redacted_by_field_name() {
        let output = profile().to_redacted_output(&FieldPolicy::default());
        let RedactedOutput::Json(json) = output else {
            panic!("expected JSON output");
        };
        assert_eq!(
            json,
            json!({
                "id": 7,
                "displayName": "Ann",
                "email": "[FILTERED]",
                "socialSecurityNumber": "[FILTERED]",
                "socials": [{"network": "github", "handle": "ann", "oauth_token": "[FILTERED]"}]
            })
        );
    }

    #[test]
    fn custom_policy_narrows_redaction() {
        let policy = FieldPolicy::new(["token", "ssn", "socialsecuritynumber"]).unwrap();
        let json = profile().redacted_json(&policy).into_value();
        assert_eq!(json["email"], "ann@example.com");
        assert_eq!(json["socialSecurityNumber"], "[FILTERED]");
        assert_eq!(json["socials"][0]["oauth_token"], "[FILTERED]");
    }
}

#[cfg(feature = "record")]
mod records {
    use keyfilter::{Level, LogRecord};

    use super::*;

    #[test]
    fn slow_request_warning_line() {
        let line = LogRecord::new(Level::Warn, "backend-app", "Slow request detected")
            .with_meta(json!({
                "requestId": "req_1",
                "duration": "1204ms",
                "endpoint": "POST /api/user/login",
                "body": {"pwd": "hunter2"}
            }))
            .to_line(&FieldPolicy::default());

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["service"], "backend-app");
        assert_eq!(parsed["body"]["pwd"], "[FILTERED]");
        assert_eq!(parsed["duration"], "1204ms");
        assert!(!line.contains("hunter2"));
    }
}
