//! Tests for the admin gate and the display-mode state machine

use gardenrs::core::gate::{AdminGate, AdminTab, GateError, Mode, ModeController};

fn controller() -> ModeController {
    ModeController::new(AdminGate::new("admin123"))
}

#[test]
fn test_gate_compares_exact_string() {
    let gate = AdminGate::new("admin123");
    assert!(gate.verify("admin123"));
    assert!(!gate.verify("admin"));
    assert!(!gate.verify("ADMIN123"));
    assert!(!gate.verify(""));
}

#[test]
fn test_starts_in_public_mode() {
    let controller = controller();
    assert_eq!(controller.mode(), Mode::Public);
    assert!(!controller.is_admin());
}

#[test]
fn test_login_with_correct_password() {
    let mut controller = controller();

    controller.login("admin123").unwrap();
    assert!(controller.is_admin());
    assert_eq!(controller.mode().tab(), Some(AdminTab::Radar));
}

#[test]
fn test_login_with_wrong_password_is_refused() {
    let mut controller = controller();

    assert_eq!(controller.login("letmein"), Err(GateError::BadPassword));
    assert_eq!(controller.mode(), Mode::Public);

    // No lockout: a later correct attempt still opens the workshop
    controller.login("admin123").unwrap();
    assert!(controller.is_admin());
}

#[test]
fn test_logout_returns_to_public() {
    let mut controller = controller();

    controller.login("admin123").unwrap();
    controller.logout();
    assert_eq!(controller.mode(), Mode::Public);

    // Logging out of the public view is harmless
    controller.logout();
    assert_eq!(controller.mode(), Mode::Public);
}

#[test]
fn test_tabs_switch_freely_inside_the_workshop() {
    let mut controller = controller();
    controller.login("admin123").unwrap();

    controller.switch_tab(AdminTab::Config).unwrap();
    assert_eq!(controller.mode().tab(), Some(AdminTab::Config));

    controller.switch_tab(AdminTab::Radar).unwrap();
    controller.switch_tab(AdminTab::Config).unwrap();
    assert_eq!(controller.mode().tab(), Some(AdminTab::Config));
}

#[test]
fn test_tab_switching_requires_admin_mode() {
    let mut controller = controller();
    assert_eq!(
        controller.switch_tab(AdminTab::Config),
        Err(GateError::NotAdmin)
    );
}

#[test]
fn test_tab_resets_on_each_login() {
    let mut controller = controller();

    controller.login("admin123").unwrap();
    controller.switch_tab(AdminTab::Config).unwrap();
    controller.logout();

    controller.login("admin123").unwrap();
    assert_eq!(controller.mode().tab(), Some(AdminTab::Radar));
}
