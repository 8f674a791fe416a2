use super::*;

// =========================================================
// 密钥展示测试
// =========================================================

#[test]
fn long_key_is_truncated_to_eight_chars() {
    assert_eq!(key_preview("ABCD-EFGH-IJKL"), "ABCD-EFG...");
}

#[test]
fn short_key_is_kept_verbatim() {
    assert_eq!(key_preview("ABC"), "ABC");
    assert_eq!(key_preview("12345678"), "12345678");
}

#[test]
fn truncation_respects_char_boundaries() {
    // 多字节字符不会被从中间截断
    assert_eq!(key_preview("ключключключ"), "ключключ...");
}

// =========================================================
// 状态徽章测试
// =========================================================

#[test]
fn badge_class_per_status() {
    assert_eq!(
        status_badge_class(LicenseStatus::Used),
        "badge badge-success"
    );
    assert_eq!(
        status_badge_class(LicenseStatus::Active),
        "badge badge-info"
    );
    assert_eq!(
        status_badge_class(LicenseStatus::Inactive),
        "badge badge-error"
    );
}

#[test]
fn used_badge_ignores_active_flag() {
    // used 的优先级高于 active：两个标志同时为真时仍展示 used
    let status = LicenseStatus::derive(true, true);
    assert_eq!(status_badge_class(status), "badge badge-success");
}
