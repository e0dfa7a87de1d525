use super::*;

#[test]
fn recognises_every_keyword() {
    assert_eq!(Directive::parse("COLOUR=#fff"), Some(Directive::PushColor("#fff")));
    assert_eq!(
        Directive::parse("BACKGROUND=12"),
        Some(Directive::PushBackground("12"))
    );
    assert_eq!(Directive::parse("EFFECT=WAVE"), Some(Directive::PushEffect("WAVE")));
    assert_eq!(Directive::parse("END_COLOUR"), Some(Directive::PopColor));
    assert_eq!(Directive::parse("END_BACKGROUND"), Some(Directive::PopBackground));
    assert_eq!(Directive::parse("END_EFFECT"), Some(Directive::PopEffect));
}

#[test]
fn other_shapes_are_ignored() {
    for body in [
        "",
        "=",
        "COLOUR",
        "COLOUR=",
        "colour=1",
        "COLOR=1",
        "COLOUR=1=2",
        "END_COLOUR=1",
        "=WAVE",
        "BOLD",
    ] {
        assert_eq!(Directive::parse(body), None, "body {body:?}");
    }
}

#[test]
fn trailing_empty_parts_are_dropped() {
    assert_eq!(Directive::parse("END_EFFECT=="), Some(Directive::PopEffect));
    assert_eq!(Directive::parse("EFFECT=WAVE="), Some(Directive::PushEffect("WAVE")));
}

#[test]
fn stacks_nest_and_unwind() {
    let mut s = ScopeStacks::new(Argb::BLACK);
    s.apply(Directive::PushColor("0xFF0000"));
    s.apply(Directive::PushColor("0x00FF00"));
    assert_eq!(s.color(), Argb(0x00FF00));
    s.apply(Directive::PopColor);
    assert_eq!(s.color(), Argb(0xFF0000));
    s.apply(Directive::PopColor);
    assert_eq!(s.color(), Argb::BLACK);
}

#[test]
fn popping_past_the_floor_is_a_noop() {
    let mut s = ScopeStacks::new(Argb::WHITE);
    for _ in 0..3 {
        s.apply(Directive::PopColor);
        s.apply(Directive::PopBackground);
        s.apply(Directive::PopEffect);
    }
    assert_eq!(s.color(), Argb::WHITE);
    assert_eq!(s.background(), None);
    assert!(s.effects().is_empty());
}

#[test]
fn malformed_colors_use_scope_fallbacks() {
    let mut s = ScopeStacks::new(Argb(7));
    s.apply(Directive::PushColor("nope"));
    s.apply(Directive::PushBackground("nope"));
    assert_eq!(s.color(), Argb(7));
    assert_eq!(s.background(), None);

    // The malformed push still occupies a stack slot.
    s.apply(Directive::PushBackground("#10"));
    assert_eq!(s.background(), Some(Argb(0x10)));
    s.apply(Directive::PopBackground);
    assert_eq!(s.background(), None);
}

#[test]
fn effect_names_keep_nesting_order() {
    let mut s = ScopeStacks::new(Argb::BLACK);
    s.apply(Directive::PushEffect("WAVE"));
    s.apply(Directive::PushEffect("JIGGLE"));
    assert_eq!(s.effects(), ["WAVE".to_string(), "JIGGLE".to_string()]);
    s.apply(Directive::PopEffect);
    assert_eq!(s.effects(), ["WAVE".to_string()]);
}
