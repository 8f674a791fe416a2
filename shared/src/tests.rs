use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn paginated(count: u64) -> PaginatedResponse<License> {
    PaginatedResponse {
        count,
        next: None,
        previous: None,
        results: Vec::new(),
    }
}

// =========================================================
// 状态派生测试
// =========================================================

#[test]
fn status_used_wins_over_active() {
    assert_eq!(LicenseStatus::derive(true, true), LicenseStatus::Used);
}

#[test]
fn status_used_wins_over_inactive() {
    assert_eq!(LicenseStatus::derive(true, false), LicenseStatus::Used);
}

#[test]
fn status_active_when_not_used() {
    assert_eq!(LicenseStatus::derive(false, true), LicenseStatus::Active);
}

#[test]
fn status_inactive_when_neither() {
    assert_eq!(LicenseStatus::derive(false, false), LicenseStatus::Inactive);
}

// =========================================================
// 分页推算测试
// =========================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(paginated(0).total_pages(), 0);
    assert_eq!(paginated(1).total_pages(), 1);
    assert_eq!(paginated(10).total_pages(), 1);
    assert_eq!(paginated(11).total_pages(), 2);
    assert_eq!(paginated(95).total_pages(), 10);
}

// =========================================================
// 序列化测试
// =========================================================

#[test]
fn license_deserializes_backend_shape() {
    let json = r#"{
        "id": 7,
        "key": "ABCD-EFGH-IJKL-MNOP",
        "category": 2,
        "category_name": "Pro",
        "is_active": true,
        "is_used": false,
        "device_id": null,
        "created_at": "2024-03-01T08:30:00Z"
    }"#;

    let license: License = serde_json::from_str(json).unwrap();
    assert_eq!(license.id, 7);
    assert_eq!(license.category_name, "Pro");
    assert_eq!(license.device_id, None);
    assert_eq!(license.status(), LicenseStatus::Active);
}

#[test]
fn category_stat_reads_orm_field_name() {
    let json = r#"{"category__name": "Trial", "count": 12}"#;
    let stat: CategoryStat = serde_json::from_str(json).unwrap();
    assert_eq!(stat.category_name, "Trial");
    assert_eq!(stat.count, 12);
}

#[test]
fn paginated_envelope_keeps_nullable_links() {
    let json = r#"{
        "count": 23,
        "next": "/api/items/?page=2",
        "previous": null,
        "results": []
    }"#;
    let page: PaginatedResponse<License> = serde_json::from_str(json).unwrap();
    assert_eq!(page.count, 23);
    assert!(page.next.is_some());
    assert!(page.previous.is_none());
    assert_eq!(page.total_pages(), 3);
}
