//! Verify the fetch build/parse pair against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector describes the expected request, a simulated response, and
//! either the expected parse result or the expected error. Comparing parsed
//! JSON (not raw strings) avoids false negatives from field ordering.

use todo_core::{FetchError, HttpResponse, TodoClient, TodoRecord};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

#[test]
fn fetch_test_vectors() {
    let raw = include_str!("../../test-vectors/fetch.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_fetch_todos();
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = c.parse_fetch_todos(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Status" => {
                    let expected_status = case["expected_status"].as_u64().unwrap() as u16;
                    assert!(
                        matches!(err, FetchError::Status { status, .. } if status == expected_status),
                        "{name}: expected Status({expected_status}), got {err:?}"
                    );
                }
                "Malformed" => assert!(matches!(err, FetchError::Malformed(_)), "{name}: expected Malformed"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let todos = result.unwrap();
            let expected: Vec<TodoRecord> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(todos, expected, "{name}: parsed result");

            // Records must persist exactly as received.
            let reserialized = serde_json::to_value(&todos).unwrap();
            assert_eq!(reserialized, case["expected_result"], "{name}: reserialized");
        }
    }
}
