use super::*;

#[test]
fn default_query_only_carries_page() {
    let query = LicenseQuery::default();
    assert_eq!(query.to_query_string(), "?page=1");
}

#[test]
fn search_comes_before_page() {
    let query = LicenseQuery {
        search: "beta".to_string(),
        ..Default::default()
    };
    assert_eq!(query.to_query_string(), "?search=beta&page=1");
}

#[test]
fn search_value_is_percent_encoded() {
    let query = LicenseQuery {
        search: "a key&x=1".to_string(),
        ..Default::default()
    };
    assert_eq!(query.to_query_string(), "?search=a%20key%26x%3D1&page=1");
}

#[test]
fn category_filter_emits_id() {
    let query = LicenseQuery {
        category: Some(5),
        page: 3,
        ..Default::default()
    };
    assert_eq!(query.to_query_string(), "?category=5&page=3");
}

#[test]
fn active_status_maps_to_is_active() {
    let query = LicenseQuery {
        status: StatusFilter::Active,
        ..Default::default()
    };
    assert_eq!(query.to_query_string(), "?is_active=true&page=1");
}

#[test]
fn used_status_maps_to_is_used() {
    let query = LicenseQuery {
        status: StatusFilter::Used,
        ..Default::default()
    };
    assert_eq!(query.to_query_string(), "?is_used=true&page=1");
}

#[test]
fn all_facets_combined() {
    let query = LicenseQuery {
        search: "vip".to_string(),
        category: Some(2),
        status: StatusFilter::Used,
        page: 4,
    };
    assert_eq!(
        query.to_query_string(),
        "?search=vip&category=2&is_used=true&page=4"
    );
}

#[test]
fn status_filter_round_trips_select_values() {
    for status in [StatusFilter::All, StatusFilter::Active, StatusFilter::Used] {
        assert_eq!(StatusFilter::from_str(status.as_str()), status);
    }
    assert_eq!(StatusFilter::from_str("garbage"), StatusFilter::All);
}
