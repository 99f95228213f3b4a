use super::*;
use crate::style::registry::talk_styles;

fn noop(_: &mut SectionSlides<'_>, _: &StyleRegistry) -> DeckResult<()> {
    Ok(())
}

#[test]
fn negative_slide_count_is_a_configuration_error() {
    let err = Section::new("intro", -1, noop).unwrap_err();
    assert!(matches!(err, DeckError::Configuration(_)));
    assert!(err.to_string().contains("intro"));
}

#[test]
fn empty_name_is_rejected() {
    assert!(Section::new("  ", 1, noop).is_err());
}

#[test]
fn closures_and_functions_are_builders() {
    let s = Section::new("fn", 2, noop).unwrap();
    assert_eq!(s.name(), "fn");
    assert_eq!(s.slide_count(), 2);

    let header = "Topics".to_string();
    let c = Section::from_fn("closure", 0, move |_, _| {
        assert!(!header.is_empty());
        Ok(())
    })
    .unwrap();
    assert_eq!(c.slide_count(), 0);
    assert!(format!("{c:?}").contains("closure"));
}

#[test]
fn view_addresses_only_its_range() {
    let reg = talk_styles().unwrap();
    let mut backing = vec![Slide::new(); 2];
    let range = SlideRange::new(4, 6).unwrap();
    let mut view = SectionSlides::new("engines", range, &mut backing);

    assert_eq!(view.start(), 4);
    assert_eq!(view.len(), 2);
    assert_eq!(view.global_index(1).unwrap(), 5);

    view.append(1, crate::content::place::header(&reg, "Ebiten"))
        .unwrap();
    assert_eq!(view.get(1).unwrap().len(), 1);

    let err = view
        .append(2, crate::content::place::header(&reg, "Overflow"))
        .unwrap_err();
    assert!(matches!(err, DeckError::ContractViolation(_)));
    let msg = err.to_string();
    assert!(msg.contains("engines"));
    assert!(msg.contains("flat index 6"));
    assert!(msg.contains("[4, 6)"));

    assert!(view.global_index(2).is_err());
    assert!(view.get(7).is_err());
}
