use super::*;

fn account() -> AdminAccount {
    AdminAccount::new("admin", "admin123")
}

#[test]
fn matching_pair_yields_operator() {
    let user = account().verify("admin", "admin123").unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "admin");
    assert_eq!(user.email, "admin@admin.local");
}

#[test]
fn every_mismatch_is_the_same_error() {
    let acct = account();
    assert_eq!(acct.verify("admin", "wrong"), Err(CredentialsError::Invalid));
    assert_eq!(acct.verify("root", "admin123"), Err(CredentialsError::Invalid));
    assert_eq!(acct.verify("root", "wrong"), Err(CredentialsError::Invalid));
}

#[test]
fn empty_fields_are_rejected() {
    let acct = account();
    assert_eq!(acct.verify("", ""), Err(CredentialsError::Invalid));
    assert_eq!(acct.verify("admin", ""), Err(CredentialsError::Invalid));
}

#[test]
fn comparison_is_exact() {
    let acct = account();
    assert!(acct.verify("Admin", "admin123").is_err());
    assert!(acct.verify("admin ", "admin123").is_err());
    assert!(acct.verify("admin", "admin1234").is_err());
}

#[test]
fn error_message_is_generic() {
    assert_eq!(CredentialsError::Invalid.to_string(), "invalid credentials");
}

#[test]
fn debug_output_hides_digests() {
    let rendered = format!("{:?}", account());
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("digest"));
}
