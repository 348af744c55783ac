use super::*;

#[test]
fn rejected_credentials_get_generic_message() {
    assert_eq!(login_error_message(&LoginFailure::InvalidCredentials), "Неверный логин или пароль");
}

#[test]
fn transport_failure_gets_retry_message() {
    let failure = LoginFailure::Unavailable("login failed: 500".to_owned());
    assert_eq!(login_error_message(&failure), "Произошла ошибка. Попробуйте снова.");
}
