use postgen::catalog;
use postgen::collection::{Collection, RequestItem, analyze, IssueKind};
use postgen::generator::{OutputFormat, render};
use serde_json::Value;

const GOLDEN: &str = include_str!("fixtures/postman_collection.json");

fn all_requests(collection: &Collection) -> Vec<&RequestItem> {
    collection.requests().into_iter().map(|(_, r)| r).collect()
}

/// 整个集合与参考输出逐字节一致
#[test]
fn test_json_matches_reference_output() {
    let text = render(&catalog::build_collection(), OutputFormat::Json).unwrap();
    assert_eq!(text, GOLDEN);
}

#[test]
fn test_render_is_deterministic() {
    let first = render(&catalog::build_collection(), OutputFormat::Json).unwrap();
    let second = render(&catalog::build_collection(), OutputFormat::Json).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_endpoint_counts() {
    let collection = catalog::build_collection();
    let counts: Vec<usize> = collection.item.iter().map(|f| f.item.len()).collect();

    assert_eq!(counts, vec![1, 6, 14, 11, 9, 6, 11, 6, 10, 8, 8, 9, 14]);
    assert_eq!(collection.endpoint_count(), 113);
    assert_eq!(collection.endpoint_count(), counts.iter().sum::<usize>());
    assert_eq!(all_requests(&collection).len(), 113);
}

#[test]
fn test_every_url_is_base_url_plus_path() {
    let collection = catalog::build_collection();
    for item in all_requests(&collection) {
        let url = &item.request.url;
        let path = url
            .raw
            .strip_prefix("{{baseUrl}}")
            .unwrap_or_else(|| panic!("{} does not start with baseUrl", item.name));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        assert_eq!(url.host, vec!["{{baseUrl}}"], "{}", item.name);
        assert_eq!(url.path, segments, "{}", item.name);
    }
}

#[test]
fn test_auth_descriptor_shape() {
    let collection = catalog::build_collection();
    for item in all_requests(&collection) {
        if let Some(auth) = &item.request.auth {
            assert_eq!(auth.kind, "bearer");
            assert_eq!(auth.bearer.len(), 1);
            assert_eq!(auth.token(), Some("{{accessToken}}"), "{}", item.name);
        }
    }

    let public: Vec<&str> = all_requests(&collection)
        .into_iter()
        .filter(|r| r.request.auth.is_none())
        .map(|r| r.name.as_str())
        .collect();
    assert!(public.contains(&"API Health Check"));
    assert!(public.contains(&"Login"));
    assert!(public.contains(&"Validate Coupon"));
    assert!(!public.contains(&"Logout"));
    assert!(!public.contains(&"Merge Cart"));
}

#[test]
fn test_bodies_have_single_content_type_and_parse_back() {
    let collection = catalog::build_collection();
    let mut with_body = 0;

    for item in all_requests(&collection) {
        match &item.request.body {
            Some(body) => {
                with_body += 1;
                assert_eq!(body.mode, "raw");
                assert_eq!(item.request.header.len(), 1, "{}", item.name);
                assert_eq!(item.request.header[0].key, "Content-Type");
                assert_eq!(item.request.header[0].value, "application/json");

                let parsed: Value = serde_json::from_str(&body.raw).unwrap();
                assert_eq!(serde_json::to_string_pretty(&parsed).unwrap(), body.raw);
            }
            None => assert!(item.request.header.is_empty(), "{}", item.name),
        }
    }

    assert!(with_body > 0);
}

#[test]
fn test_scripts_are_single_test_listeners() {
    let collection = catalog::build_collection();
    let scripted: Vec<&RequestItem> = all_requests(&collection)
        .into_iter()
        .filter(|r| !r.event.is_empty())
        .collect();

    let names: Vec<&str> = scripted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Register",
            "Login",
            "Create Product",
            "Create Category",
            "Create Order",
            "Create Coupon",
            "Create Review",
            "Create Page",
        ]
    );

    for item in scripted {
        assert_eq!(item.event.len(), 1);
        assert_eq!(item.event[0].listen, "test");
        assert_eq!(item.event[0].script.kind, "text/javascript");
    }
}

#[test]
fn test_reference_output_parses_into_model() {
    let parsed: Collection = serde_json::from_str(GOLDEN).unwrap();
    assert_eq!(parsed, catalog::build_collection());
}

#[test]
fn test_dependency_report_for_catalog() {
    let report = analyze(&catalog::build_collection());

    assert!(!report.has_undeclared());
    assert!(report.issues.iter().all(|i| i.kind == IssueKind::NotYetCaptured));

    // Create Product sends {{categoryId}} before Create Category runs.
    let category = report
        .issues
        .iter()
        .find(|i| i.variable == "categoryId" && i.request == "Create Product")
        .unwrap();
    assert_eq!(category.captured_by.as_deref(), Some("Create Category"));

    // No request ever captures paymentId.
    let payment = report
        .issues
        .iter()
        .find(|i| i.variable == "paymentId")
        .unwrap();
    assert_eq!(payment.captured_by, None);

    // Nothing after Register needs a token it has not got yet.
    assert!(report.issues.iter().all(|i| i.variable != "accessToken"));

    assert_eq!(report.captures.len(), 12);
}
