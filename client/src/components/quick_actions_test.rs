use super::*;

#[test]
fn backend_message_is_shown() {
    let msg = ActionMessage { success: Some(true), message: Some("Поиск статей запущен".to_owned()) };
    assert_eq!(trigger_outcome(Ok(msg)), (ToastKind::Success, "Поиск статей запущен".to_owned()));
}

#[test]
fn missing_message_uses_fallback() {
    assert_eq!(trigger_outcome(Ok(ActionMessage::default())), (ToastKind::Success, FALLBACK_MESSAGE.to_owned()));
    let blank = ActionMessage { success: None, message: Some(String::new()) };
    assert_eq!(trigger_outcome(Ok(blank)).1, FALLBACK_MESSAGE);
}

#[test]
fn transport_failure_is_error() {
    assert_eq!(
        trigger_outcome(Err("search failed: 502".to_owned())),
        (ToastKind::Error, FAILURE_MESSAGE.to_owned())
    );
}

#[test]
fn explicit_failure_flag_is_error() {
    let msg = ActionMessage { success: Some(false), message: None };
    assert_eq!(trigger_outcome(Ok(msg)).0, ToastKind::Error);
}
