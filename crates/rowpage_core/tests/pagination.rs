//! Pagination over a table of stored records.

use proptest::prelude::*;
use rowpage_core::{paginate, read_all, CoreError, PageRequest, RowId};
use rowpage_testkit::prelude::*;

#[test]
fn default_request_over_250_records() {
    init_tracing();
    let table = group_table(250);
    let mut groups: Vec<GroupInfo> = Vec::new();

    let res = paginate(table.iter(), None, &mut groups).unwrap();

    assert_eq!(groups.len(), 100);
    assert_eq!(groups[0], GroupInfo::sample(1));
    assert_eq!(groups[99], GroupInfo::sample(100));
    assert_eq!(res.next_key, Some(RowId::from_u64(101)));
    assert_eq!(res.total, Some(250));
}

#[test]
fn offset_past_the_end() {
    let table = group_table(250);
    let req = PageRequest::new().offset(300).limit(50).count_total(true);
    let mut groups: Vec<GroupInfo> = Vec::new();

    let res = paginate(table.iter(), Some(&req), &mut groups).unwrap();

    assert!(groups.is_empty());
    assert_eq!(res.next_key, None);
    assert_eq!(res.total, Some(250));
}

#[test]
fn offset_and_key_are_exclusive() {
    let table = group_table(10);
    let (it, probe) = TrackedIterator::new(table.iter());
    let req = PageRequest::new()
        .offset(3)
        .key(RowId::from_u64(2))
        .limit(4);
    let mut groups: Vec<GroupInfo> = Vec::new();

    let err = paginate(it, Some(&req), &mut groups).unwrap_err();

    assert!(matches!(err, CoreError::InvalidRequest { .. }));
    assert!(err.to_string().contains("either offset or key"));
    assert_eq!(probe.loads(), 0);
    assert_eq!(probe.closes(), 1);
}

#[test]
fn cursor_walk_visits_every_record_once() {
    let table = group_table(250);
    let mut seen = Vec::new();
    let mut cursor: Option<RowId> = None;
    let mut pages = 0;

    loop {
        let mut req = PageRequest::new().limit(40).count_total(true);
        if let Some(key) = cursor.take() {
            req = req.key(key);
        }
        let (it, probe) = TrackedIterator::new(table.iter_from(req.key.as_ref()));
        let mut groups: Vec<GroupInfo> = Vec::new();

        let res = paginate(it, Some(&req), &mut groups).unwrap();
        pages += 1;
        assert_eq!(probe.closes(), 1);
        if req.key.is_some() {
            assert_eq!(res.total, None);
        }

        seen.extend(groups.into_iter().map(|g| g.group_id));
        match res.next_key {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    assert_eq!(pages, 7);
    assert_eq!(seen, (1..=250).collect::<Vec<_>>());
}

#[test]
fn offset_walk_matches_cursor_walk() {
    let table = group_table(95);
    let mut by_offset = Vec::new();
    let mut offset = 0;

    loop {
        let req = PageRequest::new().offset(offset).limit(20);
        let mut groups: Vec<GroupInfo> = Vec::new();
        let res = paginate(table.iter(), Some(&req), &mut groups).unwrap();
        offset += groups.len() as u64;
        by_offset.extend(groups);
        if !res.has_next() {
            break;
        }
    }

    assert_eq!(by_offset.len(), 95);
    assert_eq!(by_offset[94], GroupInfo::sample(95));
}

#[test]
fn invalid_query_is_not_an_empty_page() {
    let table = group_table(5);
    let mut groups: Vec<GroupInfo> = Vec::new();

    let err = paginate(table.iter_prefix(b""), None, &mut groups).unwrap_err();
    assert!(err.is_invalid());
}

#[test]
fn close_failure_is_reported() {
    let table = group_table(3);
    let (it, probe) = TrackedIterator::new(table.iter());
    let mut groups = vec![GroupInfo::sample(9)];

    let err = paginate(it.failing_close(), None, &mut groups).unwrap_err();
    assert!(matches!(err, CoreError::Storage { .. }));
    assert_eq!(groups, vec![GroupInfo::sample(9)]);
    assert_eq!(probe.closes(), 1);
}

#[test]
fn close_failure_after_full_read_keeps_destination() {
    let table = group_table(5);
    let (it, probe) = TrackedIterator::new(table.iter());
    let mut groups: Vec<GroupInfo> = Vec::new();

    let err = read_all(it.failing_close(), &mut groups).unwrap_err();
    assert!(matches!(err, CoreError::Storage { .. }));
    assert!(groups.is_empty());
    assert_eq!(probe.closes(), 1);
}

proptest! {
    #![proptest_config(PropTestConfig::quick().to_proptest_config())]

    #[test]
    fn offset_pages_are_exact(
        rows in PropTestConfig::quick().table_rows(),
        req in PropTestConfig::quick().offset_requests()
    ) {
        let table = group_table(rows);
        let mut groups: Vec<GroupInfo> = Vec::new();

        let res = paginate(table.iter(), Some(&req), &mut groups).unwrap();

        let limit = if req.limit == 0 { 100 } else { req.limit };
        let count_total = req.limit == 0 || req.count_total;
        let first = req.offset + 1;
        let last = (req.offset + limit).min(rows);
        let expected: Vec<u64> = (first..=last).collect();

        let got: Vec<u64> = groups.iter().map(|g| g.group_id).collect();
        prop_assert_eq!(got, expected);

        let next = req.offset + limit + 1;
        if next <= rows {
            prop_assert_eq!(res.next_key, Some(RowId::from_u64(next)));
        } else {
            prop_assert_eq!(res.next_key, None);
        }
        prop_assert_eq!(res.total, count_total.then_some(rows));
    }
}
