use super::*;

fn starts(table: &OffsetTable) -> Vec<usize> {
    table.spans().iter().map(|s| s.range.start).collect()
}

#[test]
fn offsets_follow_running_sum() {
    let t = allocate([("a", 5), ("b", 1), ("c", 1)]).unwrap();
    assert_eq!(starts(&t), [0, 5, 6]);
    assert_eq!(t.total(), 7);
    assert_eq!(t.start_of("c"), Some(6));
    assert_eq!(t.start_of("missing"), None);
}

#[test]
fn zero_length_section_does_not_shift_later_offsets() {
    let t = allocate([("a", 0), ("b", 3)]).unwrap();
    assert_eq!(starts(&t), [0, 0]);
    assert!(t.get("a").unwrap().range.is_empty());
    assert_eq!(t.total(), 3);

    let t = allocate([("a", 2), ("gap", 0), ("b", 2)]).unwrap();
    assert_eq!(starts(&t), [0, 2, 2]);
    assert_eq!(t.total(), 4);
}

#[test]
fn empty_list_has_no_slides() {
    let t = allocate(std::iter::empty()).unwrap();
    assert_eq!(t.total(), 0);
    assert!(t.spans().is_empty());
    assert!(t.section_of(0).is_none());
}

#[test]
fn spans_tile_the_whole_range_in_order() {
    let counts = [3usize, 0, 7, 1, 0, 0, 4, 2];
    let names: Vec<String> = (0..counts.len()).map(|i| format!("s{i}")).collect();
    let t = allocate(names.iter().map(String::as_str).zip(counts)).unwrap();

    assert_eq!(t.total(), counts.iter().sum::<usize>());
    let mut cursor = 0;
    for (span, &count) in t.spans().iter().zip(&counts) {
        assert_eq!(span.range.start, cursor);
        assert_eq!(span.range.len(), count);
        cursor = span.range.end;
    }
    assert_eq!(cursor, t.total());

    for index in 0..t.total() {
        let owners = t
            .spans()
            .iter()
            .filter(|s| s.range.contains(index))
            .count();
        assert_eq!(owners, 1, "slide {index} must have exactly one owner");
        assert!(t.section_of(index).unwrap().range.contains(index));
    }
}

#[test]
fn allocation_is_deterministic() {
    let entries = [("intro", 5), ("engines", 7), ("examples", 1)];
    assert_eq!(allocate(entries).unwrap(), allocate(entries).unwrap());
}

#[test]
fn duplicate_names_and_overflow_are_rejected() {
    assert!(matches!(
        allocate([("a", 1), ("a", 2)]),
        Err(DeckError::Configuration(_))
    ));
    assert!(matches!(
        allocate([("a", usize::MAX), ("b", 1)]),
        Err(DeckError::Configuration(_))
    ));
}

#[test]
fn section_of_skips_zero_length_spans() {
    let t = allocate([("a", 2), ("empty", 0), ("b", 1)]).unwrap();
    assert_eq!(t.section_of(1).unwrap().name, "a");
    assert_eq!(t.section_of(2).unwrap().name, "b");
    assert!(t.section_of(3).is_none());
}
