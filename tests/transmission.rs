use mailbridge::{Attachment, MailError, Transmission};

fn valid() -> Transmission {
    Transmission::new()
        .recipient("recipient@test.com")
        .subject("Subject")
        .html("<h1>HTML</h1>")
}

#[test]
fn validate_ok() {
    assert!(valid().validate().is_ok());
}

#[test]
fn validate_requires_recipients() {
    let t = Transmission::new().subject("Subject").html("<h1>HTML</h1>");
    let err = t.validate().unwrap_err();
    assert!(matches!(err, MailError::Validation(_)));
    assert_eq!(err.to_string(), "transmission requires recipients");
}

#[test]
fn validate_requires_subject() {
    let t = Transmission::new()
        .recipient("recipient@test.com")
        .html("<h1>HTML</h1>");
    let err = t.validate().unwrap_err();
    assert_eq!(err.to_string(), "transmission requires a subject");
}

#[test]
fn validate_requires_html() {
    let t = Transmission::new()
        .recipient("recipient@test.com")
        .subject("Subject");
    let err = t.validate().unwrap_err();
    assert_eq!(err.to_string(), "transmission requires html content");
}

#[test]
fn struct_literal_construction() {
    let t = Transmission {
        recipients: vec!["recipient@test.com".into()],
        subject: "Subject".into(),
        html: "<h1>HTML</h1>".into(),
        plain_text: Some("PlainText".into()),
        ..Default::default()
    };
    assert!(t.validate().is_ok());
}

#[test]
fn presence_predicates() {
    let t = valid();
    assert!(!t.has_cc());
    assert!(!t.has_bcc());
    assert!(!t.has_attachments());

    let t = valid()
        .cc("cc@test.com")
        .bcc("bcc@test.com")
        .attach(Attachment::new("test.jpg", vec![1, 2, 3]));
    assert!(t.has_cc());
    assert!(t.has_bcc());
    assert!(t.has_attachments());
}

#[test]
fn attachment_content_type_guessed_from_filename() {
    assert_eq!(
        Attachment::new("report.pdf", vec![]).content_type(),
        "application/pdf"
    );
    assert_eq!(
        Attachment::new("blob.unknown-ext", vec![]).content_type(),
        "application/octet-stream"
    );
}
