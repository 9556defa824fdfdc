use tenure_portal::domain::codes::{reason, status};
use tenure_portal::domain::filter::{FilterSelection, Sorting};
use tenure_portal::pagination::{PaginationState, PaginationUpdate};
use tenure_portal::search::{QueryModifier, build_query_param_sets};

fn pagination(current_page: i64, items_per_page: usize) -> PaginationState {
    let mut state = PaginationState::new(items_per_page);
    state.update(PaginationUpdate {
        total_items: None,
        current_page: Some(current_page),
    });
    state
}

#[test]
fn test_no_status_selection_yields_single_basic_set() {
    let filters = FilterSelection::default();
    let sets = build_query_param_sets(&filters, &pagination(1, 25));

    assert_eq!(sets.len(), 1);
    let set = &sets[0];
    assert!(!set.is_deleted);
    assert_eq!(set.page_num, Some(0));
    assert_eq!(set.page_size, Some(25));
    assert!(set.status.is_none());
    assert!(set.reason.is_none());
    assert!(set.sort_by.is_none());

    // No purpose selection still carries an (empty) purpose field; the
    // upstream treats an empty value list as match-any.
    let purpose = set.purpose.as_ref().unwrap();
    assert_eq!(purpose.modifier, QueryModifier::Equal);
    assert!(purpose.values.is_empty());
}

#[test]
fn test_decision_approved_expands_to_two_sets() {
    let filters = FilterSelection {
        status_codes: vec![status::DECISION_APPROVED.to_string()],
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));

    assert_eq!(sets.len(), 2);

    let direct = &sets[0];
    let direct_status = direct.status.as_ref().unwrap();
    assert_eq!(direct_status.modifier, QueryModifier::Equal);
    assert_eq!(direct_status.values, vec!["DISPOSITION IN GOOD STANDING"]);
    assert!(direct.reason.is_none());

    // Amendment approvals are encoded upstream as abandoned records with a
    // reason, so they need their own set.
    let amended = &sets[1];
    let amended_status = amended.status.as_ref().unwrap();
    assert!(amended_status.values.contains(&"ABANDONED".to_string()));
    assert!(amended_status.values.contains(&"WITHDRAWN".to_string()));
    let amended_reason = amended.reason.as_ref().unwrap();
    assert_eq!(amended_reason.modifier, QueryModifier::Equal);
    assert_eq!(amended_reason.values, vec![reason::AMENDMENT_APPROVED]);
}

#[test]
fn test_decision_not_approved_expands_symmetrically() {
    let filters = FilterSelection {
        status_codes: vec![status::DECISION_NOT_APPROVED.to_string()],
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));

    assert_eq!(sets.len(), 2);
    assert_eq!(
        sets[0].status.as_ref().unwrap().values,
        vec!["DISALLOWED"]
    );
    assert_eq!(
        sets[1].reason.as_ref().unwrap().values,
        vec![reason::AMENDMENT_NOT_APPROVED]
    );
}

#[test]
fn test_abandoned_excludes_amendment_outcomes() {
    let filters = FilterSelection {
        status_codes: vec![status::ABANDONED.to_string()],
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));

    assert_eq!(sets.len(), 1);
    let set = &sets[0];
    assert!(
        set.status
            .as_ref()
            .unwrap()
            .values
            .contains(&"CANCELLED".to_string())
    );
    let excluded = set.reason.as_ref().unwrap();
    assert_eq!(excluded.modifier, QueryModifier::NotEqual);
    assert_eq!(
        excluded.values,
        vec![reason::AMENDMENT_APPROVED, reason::AMENDMENT_NOT_APPROVED]
    );
}

#[test]
fn test_unresolvable_status_selections_are_dropped() {
    let filters = FilterSelection {
        status_codes: vec!["NOT A STATUS".to_string()],
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    assert!(sets.is_empty());
}

#[test]
fn test_selected_filters_flow_into_first_set() {
    let filters = FilterSelection {
        purpose_codes: vec!["AGRICULTURE".to_string()],
        status_codes: vec![status::APPLICATION_REVIEW_COMPLETE.to_string()],
        region_code: "SK - LAND MGMNT - SKEENA FIELD OFFICE".to_string(),
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(7, 17));

    let set = &sets[0];
    assert_eq!(set.page_num, Some(6));
    assert_eq!(set.page_size, Some(17));
    assert_eq!(set.purpose.as_ref().unwrap().values, vec!["AGRICULTURE"]);
    assert_eq!(
        set.status.as_ref().unwrap().values,
        vec!["OFFER ACCEPTED", "OFFERED"]
    );
    assert_eq!(
        set.business_unit.as_ref().unwrap().values,
        vec!["SK - LAND MGMNT - SKEENA FIELD OFFICE"]
    );
}

#[test]
fn test_region_resolves_through_taxonomy() {
    // The short alias resolves to the full office code.
    let filters = FilterSelection {
        region_code: "SK".to_string(),
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    assert_eq!(
        sets[0].business_unit.as_ref().unwrap().values,
        vec!["SK - LAND MGMNT - SKEENA FIELD OFFICE"]
    );

    // An empty or unknown region selection means no region constraint.
    for region in ["", "XX - NO SUCH OFFICE"] {
        let filters = FilterSelection {
            region_code: region.to_string(),
            ..FilterSelection::default()
        };
        let sets = build_query_param_sets(&filters, &pagination(1, 25));
        assert!(sets[0].business_unit.is_none());
    }
}

#[test]
fn test_applicant_becomes_text_filter() {
    let filters = FilterSelection {
        applicant: "smith".to_string(),
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    let client = sets[0].client.as_ref().unwrap();
    assert_eq!(client.modifier, QueryModifier::Text);
    assert_eq!(client.values, vec!["smith"]);

    let no_applicant = FilterSelection::default();
    let sets = build_query_param_sets(&no_applicant, &pagination(1, 25));
    assert!(sets[0].client.is_none());
}

#[test]
fn test_sort_by_requires_column_and_direction() {
    let mut filters = FilterSelection {
        sorting: Sorting::new("cl_file", 0),
        ..FilterSelection::default()
    };
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    assert!(sets[0].sort_by.is_none());

    filters.sorting = Sorting::new("", 1);
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    assert!(sets[0].sort_by.is_none());

    filters.sorting = Sorting::new("cl_file", -1);
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    assert_eq!(sets[0].sort_by.as_deref(), Some("-cl_file"));

    filters.sorting = Sorting::new("publishDate", 1);
    let sets = build_query_param_sets(&filters, &pagination(1, 25));
    assert_eq!(sets[0].sort_by.as_deref(), Some("+publishDate"));
}

#[test]
fn test_strip_pagination_clears_page_bounds() {
    let mut sets = build_query_param_sets(&FilterSelection::default(), &pagination(3, 25));
    for set in &mut sets {
        set.strip_pagination();
    }
    assert!(sets[0].page_num.is_none());
    assert!(sets[0].page_size.is_none());
}
