use super::*;

#[test]
fn save_toasts() {
    assert_eq!(save_toast(true), (ToastKind::Success, "Настройки сохранены"));
    assert_eq!(save_toast(false), (ToastKind::Error, "Ошибка сохранения настроек"));
}
