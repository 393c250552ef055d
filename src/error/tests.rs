use super::*;

#[test]
fn test_arraylab_error_construction() {
    let err = ArraylabError::invalid_argument("size must be positive");
    assert!(matches!(err, ArraylabError::InvalidArgument { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.code(), ErrorCode::INVALID_ARGUMENT_GENERIC);

    let err = ArraylabError::empty_input("nothing to search");
    assert!(matches!(err, ArraylabError::EmptyInput { .. }));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.code(), ErrorCode::EMPTY_INPUT_GENERIC);

    let err = ArraylabError::insufficient_data("need two values", 2, 1);
    assert!(matches!(
        err,
        ArraylabError::InsufficientData {
            required: 2,
            found: 1,
            ..
        }
    ));
    assert_eq!(err.exit_code(), 4);

    let err = ArraylabError::unknown_function("shuffleArray");
    assert_eq!(err.exit_code(), 5);
    assert_eq!(err.code(), ErrorCode::UNKNOWN_FUNCTION);

    let err = ArraylabError::config("bad file");
    assert_eq!(err.exit_code(), 6);

    let err = ArraylabError::other("boom");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_display_includes_code() {
    let err = ArraylabError::invalid_argument_with_code(
        ErrorCode::INVALID_CHUNK_SIZE,
        "chunk size must be positive",
        Some("size".to_string()),
    );

    assert!(err.to_string().starts_with("[E1003]"));
    assert_eq!(
        err.user_message(),
        "Invalid argument 'size': chunk size must be positive"
    );
}

#[test]
fn test_with_context_appends() {
    let err = ArraylabError::empty_input("no elements").with_context("in findMaxObject");
    assert!(err.to_string().contains("no elements: in findMaxObject"));

    let err = ArraylabError::unknown_function("nope").with_context("ignored");
    assert!(!err.to_string().contains("ignored"));
}

#[test]
fn test_with_argument_only_touches_invalid_argument() {
    let err = ArraylabError::invalid_argument("bad").with_argument("k");
    assert!(matches!(
        err,
        ArraylabError::InvalidArgument { argument: Some(ref a), .. } if a == "k"
    ));

    let err = ArraylabError::empty_input("none").with_argument("k");
    assert!(matches!(err, ArraylabError::EmptyInput { .. }));
}

#[test]
fn test_insufficient_data_user_message() {
    let err = ArraylabError::insufficient_data("second largest needs distinct values", 2, 1);
    assert_eq!(
        err.user_message(),
        "second largest needs distinct values (needs at least 2, found 1)"
    );
}

#[test]
fn test_from_serde_json_error() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: ArraylabError = parse_err.into();

    assert_eq!(err.code(), ErrorCode::OTHER_SERIALIZATION);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_developer_message_includes_description_and_causes() {
    let err = ArraylabError::config_with_code(ErrorCode::CONFIG_IO_ERROR, "read failed", None)
        .with_source(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));

    let message = err.developer_message();
    assert!(message.starts_with(&err.to_string()));
    assert!(message.contains(describe_error_code(ErrorCode::CONFIG_IO_ERROR)));
    assert!(message.ends_with("caused by: denied"));
}
