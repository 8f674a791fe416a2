use super::*;

// =========================================================
// 路径解析测试
// =========================================================

#[test]
fn parses_known_paths() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/categories"), AppRoute::Categories);
    assert_eq!(AppRoute::from_path("/licenses"), AppRoute::Licenses);
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
}

#[test]
fn paths_round_trip() {
    for route in [
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Categories,
        AppRoute::Licenses,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

// =========================================================
// 守卫测试
// =========================================================

#[test]
fn every_screen_except_login_requires_auth() {
    assert!(AppRoute::Dashboard.requires_auth());
    assert!(AppRoute::Categories.requires_auth());
    assert!(AppRoute::Licenses.requires_auth());
    assert!(!AppRoute::Login.requires_auth());
}

#[test]
fn only_login_redirects_when_authenticated() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
    assert!(!AppRoute::Licenses.should_redirect_when_authenticated());
}

#[test]
fn redirect_targets() {
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Dashboard);
}
