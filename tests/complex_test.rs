//! End-to-end tests over a realistic nested schema.

use conform::{literal, object, optional, string, ValidatorLike, ValuePath};
use serde_json::json;

fn manifest() -> conform::ObjectValidator {
    object()
        .field("name", string())
        .field(
            "version",
            optional(string().pattern(r"^\d+\.\d+\.\d+$").unwrap()),
        )
        .field(
            "repository",
            object()
                .field("type", literal(vec![json!("git")]))
                .field("url", string()),
        )
}

#[test]
fn test_valid_manifests() {
    let validate = manifest();

    assert!(validate
        .conform(&json!({
            "name": "package-name",
            "version": "1.2.3",
            "repository": {
                "type": "git",
                "url": "whatever",
            },
        }))
        .is_ok());

    assert!(validate
        .conform(&json!({
            "name": "package-name",
            "repository": {
                "type": "git",
                "url": "whatever",
            },
        }))
        .is_ok());
}

#[test]
fn test_malformed_version_is_rejected() {
    let err = manifest()
        .conform(&json!({
            "name": "package-name",
            "version": "1.2.e",
            "repository": {
                "type": "git",
                "url": "whatever",
            },
        }))
        .unwrap_err();

    assert_eq!(err.to_string(), "[root.version] doesn't match the pattern");
}

#[test]
fn test_wrong_repository_type_is_rejected() {
    let err = manifest()
        .conform(&json!({
            "name": "package-name",
            "repository": {
                "type": "nope",
                "url": "whatever",
            },
        }))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "[root.repository.type] must be one of [git], got \"nope\""
    );
}

#[test]
fn test_multiple_failures_accumulate_across_the_tree() {
    let err = manifest()
        .conform(&json!({
            "version": "x",
            "repository": {},
        }))
        .unwrap_err();

    assert_eq!(err.len(), 4);
    assert_eq!(
        err.to_string(),
        "[root.name] should be a string\n\
         [root.version] doesn't match the pattern\n\
         [root.repository.type] must be one of [git], got undefined\n\
         [root.repository.url] should be a string"
    );
}

#[test]
fn test_conformed_output_revalidates_cleanly() {
    let validate = manifest();
    let input = json!({
        "name": "package-name",
        "version": "1.2.3",
        "repository": {
            "type": "git",
            "url": "whatever",
        },
        "extra": true,
    });

    let conformed = validate
        .validate_to_value(Some(&input), &ValuePath::root())
        .unwrap()
        .unwrap();

    // Conforming strips unknown keys and yields a value that conforms again.
    let again = validate
        .validate_to_value(Some(&conformed), &ValuePath::root())
        .unwrap()
        .unwrap();
    assert_eq!(conformed, again);
    assert!(conformed.get("extra").is_none());
}
