use super::*;
use crate::layout::measure::VerticalMetrics;

/// Every glyph is 10px wide except `i` (4px) and space (5px).
struct TestMeasure;

impl TextMeasure for TestMeasure {
    fn measure_width(&self, ch: char, _font_size: f32) -> f32 {
        match ch {
            'i' => 4.0,
            ' ' => 5.0,
            _ => 10.0,
        }
    }

    fn vertical_metrics(&self, _font_size: f32) -> VerticalMetrics {
        VerticalMetrics {
            ascent: 12.0,
            descent: 4.0,
        }
    }
}

const PITCH: f32 = 20.0;

fn params(wrap_width: Option<f32>) -> LayoutParams {
    LayoutParams {
        wrap_width,
        font_size: 16.0,
        text_height: 16,
        line_margin: 4,
        default_color: Argb::BLACK,
    }
}

fn run(text: &str, wrap_width: Option<f32>) -> TextLayout {
    layout_markup(text, &TestMeasure, params(wrap_width))
}

fn glyphs_on_line(layout: &TextLayout, line: usize) -> String {
    layout
        .cells
        .iter()
        .filter(|c| c.line == line)
        .map(|c| c.glyph)
        .collect()
}

#[test]
fn plain_text_single_line() {
    let l = run("Hi", None);
    assert_eq!(l.cells.len(), 2);
    assert!(l.cells.iter().all(|c| c.color == Argb::BLACK));
    assert!(l.cells.iter().all(|c| c.background.is_none()));
    assert_eq!(l.line_widths, vec![14.0]);
    assert_eq!(l.width, 14.0);
    assert_eq!(l.height, PITCH);
    assert_eq!((l.cells[0].x, l.cells[1].x), (0.0, 10.0));
    assert_eq!(l.cells[1].height, 16);
}

#[test]
fn empty_text_still_has_one_line() {
    let l = run("", Some(50.0));
    assert!(l.cells.is_empty());
    assert_eq!(l.line_widths, vec![0.0]);
    assert_eq!(l.width, 0.0);
    assert_eq!(l.height, PITCH);
}

#[test]
fn color_scope_applies_only_inside_tags() {
    let l = run("[COLOUR=0xFF0000]A[END_COLOUR]B", None);
    assert_eq!(l.cells.len(), 2);
    assert_eq!(l.cells[0].color, Argb(0xFF0000));
    assert_eq!(l.cells[1].color, Argb::BLACK);
    assert_eq!(l.cells[1].x, 10.0);
}

#[test]
fn stray_end_tag_is_harmless() {
    let l = run("[END_COLOUR]Text", None);
    assert_eq!(l.cells.len(), 4);
    assert!(l.cells.iter().all(|c| c.color == Argb::BLACK));
}

#[test]
fn background_and_effect_scopes_nest() {
    let l = run(
        "[BACKGROUND=#112233][EFFECT=WAVE]a[EFFECT=JIGGLE]b[END_EFFECT]c[END_EFFECT][END_BACKGROUND]d",
        None,
    );
    let glyphs: String = l.cells.iter().map(|c| c.glyph).collect();
    assert_eq!(glyphs, "abcd");
    assert_eq!(l.cells[0].background, Some(Argb(0x112233)));
    assert_eq!(l.cells[0].effects, vec!["WAVE".to_string()]);
    assert_eq!(
        l.cells[1].effects,
        vec!["WAVE".to_string(), "JIGGLE".to_string()]
    );
    assert_eq!(l.cells[2].effects, vec!["WAVE".to_string()]);
    assert!(l.cells[3].effects.is_empty());
    assert_eq!(l.cells[3].background, None);
}

#[test]
fn unknown_effect_names_are_kept_for_evaluation() {
    let l = run("[EFFECT=UNKNOWN]X[END_EFFECT]", None);
    assert_eq!(l.cells[0].effects, vec!["UNKNOWN".to_string()]);
}

#[test]
fn explicit_newlines_break_without_emitting_cells() {
    let l = run("ab\n\ncd", None);
    assert_eq!(l.cells.len(), 4);
    assert_eq!(l.line_widths, vec![20.0, 0.0, 20.0]);
    assert_eq!(l.cells[2].y, 2.0 * PITCH);
    assert_eq!(l.cells[2].x, 0.0);
    assert_eq!(l.cells[2].line, 2);
    assert_eq!(l.height, 3.0 * PITCH);
    assert_eq!(l.width, 20.0);
}

#[test]
fn sequence_indices_are_dense_across_lines_and_tags() {
    let l = run("a[COLOUR=1]b\nc d[END_COLOUR]e", Some(25.0));
    for (i, c) in l.cells.iter().enumerate() {
        assert_eq!(c.index, i);
    }
}

#[test]
fn word_wrap_moves_partial_word_to_next_line() {
    // "Hello " is 55px wide, the whole phrase 105px.
    let l = run("Hello world", Some(80.0));
    assert_eq!(glyphs_on_line(&l, 0), "Hello ");
    assert_eq!(glyphs_on_line(&l, 1), "world");
    let world: Vec<_> = l.cells.iter().filter(|c| c.line == 1).collect();
    assert_eq!(world[0].x, 0.0);
    assert_eq!(world[1].x, 10.0);
    assert!(world.iter().all(|c| c.y == PITCH));
    assert_eq!(l.line_widths, vec![55.0, 50.0]);
    assert_eq!(l.width, 55.0);
    assert_eq!(l.height, 2.0 * PITCH);
}

#[test]
fn wrap_at_exact_space_boundary_breaks_after_space() {
    // The space itself reaches the wrap width.
    let l = run("Hello world", Some(55.0));
    assert_eq!(glyphs_on_line(&l, 0), "Hello ");
    assert_eq!(glyphs_on_line(&l, 1), "world");
    assert_eq!(l.cells[6].x, 0.0);
    assert_eq!(l.line_widths[0], 55.0);
}

#[test]
fn unbreakable_run_breaks_before_advancing_past_overflowing_cell() {
    let l = run("abcdefg", Some(30.0));
    assert_eq!(glyphs_on_line(&l, 0), "abc");
    assert_eq!(glyphs_on_line(&l, 1), "de");
    assert_eq!(glyphs_on_line(&l, 2), "fg");
    assert_eq!(glyphs_on_line(&l, 3), "");
    // Each closed line stops short of the cell that overflowed it.
    assert_eq!(l.line_widths, vec![20.0, 20.0, 20.0, 10.0]);
    let xs: Vec<f32> = l.cells.iter().map(|c| c.x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 10.0, 20.0, 10.0, 20.0]);
    assert_eq!(l.cells[2].y, 0.0);
    assert_eq!(l.cells[3].y, PITCH);
    assert_eq!(l.height, 4.0 * PITCH);
}

#[test]
fn long_word_after_a_wrap_does_not_reuse_old_space() {
    let l = run("ab cdefghij", Some(40.0));
    for c in &l.cells {
        assert!(c.x >= 0.0, "cell {:?} at negative x", c.glyph);
        assert!(c.right() <= 40.0 + 10.0);
    }
    assert_eq!(glyphs_on_line(&l, 0), "ab ");
    assert_eq!(glyphs_on_line(&l, 1), "cdef");
    assert_eq!(glyphs_on_line(&l, 2), "ghi");
    assert_eq!(glyphs_on_line(&l, 3), "j");
    assert_eq!(l.line_widths, vec![25.0, 30.0, 30.0, 20.0]);
}

#[test]
fn unbounded_width_never_wraps() {
    let text = "the quick brown fox jumps over the lazy dog";
    let l = run(text, None);
    assert_eq!(l.line_count(), 1);
    assert!(l.cells.iter().all(|c| c.line == 0 && c.y == 0.0));
}

#[test]
fn line_count_is_newlines_plus_wraps_plus_one() {
    let text = "one two three\nfour five six seven\n\neight";
    let l = run(text, Some(60.0));
    let newlines = text.matches('\n').count();
    let wraps = 5;
    assert_eq!(l.line_count(), newlines + wraps + 1);
    assert_eq!(
        l.line_widths,
        vec![35.0, 35.0, 50.0, 45.0, 39.0, 29.0, 50.0, 0.0, 44.0]
    );
    assert_eq!(glyphs_on_line(&l, 5), "six ");
    assert_eq!(glyphs_on_line(&l, 6), "seven");
    assert_eq!(glyphs_on_line(&l, 7), "");
    assert_eq!(glyphs_on_line(&l, 8), "eight");
}

#[test]
fn cells_share_y_per_line() {
    let l = run("aa bb cc dd ee ff", Some(35.0));
    for c in &l.cells {
        assert_eq!(c.y, c.line as f32 * PITCH);
        assert!(c.x >= 0.0);
    }
}

#[test]
fn tags_do_not_take_up_space() {
    let plain = run("ab cd", Some(30.0));
    let marked = run("[COLOUR=#f00]ab[END_COLOUR] [EFFECT=WAVE]cd[END_EFFECT]", Some(30.0));
    let pos = |l: &TextLayout| -> Vec<(f32, f32)> { l.cells.iter().map(|c| (c.x, c.y)).collect() };
    assert_eq!(pos(&plain), pos(&marked));
    assert_eq!(plain.line_widths, marked.line_widths);
}

#[test]
fn zero_wrap_width_puts_every_cell_on_its_own_line() {
    let l = run("abc", Some(0.0));
    assert_eq!(l.line_count(), 4);
    assert_eq!(l.line_widths, vec![0.0, 10.0, 10.0, 10.0]);
    let lines: Vec<usize> = l.cells.iter().map(|c| c.line).collect();
    assert_eq!(lines, vec![0, 1, 2]);
    assert_eq!((l.cells[0].x, l.cells[1].x, l.cells[2].x), (0.0, 10.0, 10.0));
}
