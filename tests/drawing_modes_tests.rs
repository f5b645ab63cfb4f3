//! Mode cycling, dispatch decisions and per-mode colors through the session
use e_sketch::color::{BLACK, CYAN, LIGHT_GREEN, RAINBOW_PALETTE};
use e_sketch::{GridTrait, KeyCommand, Label, Mode, PointerEvent, RecordingSurface, Rgb, Session};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_session(mode: Mode, seed: u64) -> Session<RecordingSurface> {
    Session::with_rng(
        RecordingSurface::new(),
        StdRng::seed_from_u64(seed),
        8,
        mode,
        640.0,
    )
    .unwrap()
}

#[test]
fn test_toggle_cycles_through_all_modes() {
    let mut session = new_session(Mode::Darkening, 1);
    let visited: Vec<Mode> = (0..4).map(|_| session.toggle_mode()).collect();
    assert_eq!(
        visited,
        vec![Mode::Hover, Mode::Click, Mode::Rainbow, Mode::Darkening]
    );

    let board = session.surface().board();
    assert_eq!(board.label(Label::CurrentMode), Some("Progressive Darkening"));
    assert_eq!(
        board.label(Label::Instructions),
        Some("Hover over squares to draw! Each square darkens by 10% with each interaction.")
    );
}

#[test]
fn test_toggle_updates_labels() {
    let mut session = new_session(Mode::Hover, 1);
    session.handle_key('m').unwrap();
    let board = session.surface().board();
    assert_eq!(board.label(Label::CurrentMode), Some("Click & Drag"));
    assert_eq!(board.label(Label::ToggleButton), Some("Toggle Mode: Click & Drag"));
    assert_eq!(board.label(Label::Instructions), Some("Click and drag to draw!"));
}

#[test]
fn test_click_mode_drag_drawing() {
    let mut session = new_session(Mode::Click, 1);
    session.surface_mut().take_commands();

    assert!(session.handle_pointer(PointerEvent::PointerEnter, Some(1)).is_none());
    assert!(session.surface().paints().is_empty());

    session.handle_pointer(PointerEvent::PointerDown, Some(0));
    session.surface_mut().take_commands();
    let paint = session.handle_pointer(PointerEvent::PointerEnter, Some(1));
    assert_eq!(paint.map(|p| p.color), Some(CYAN));
    assert_eq!(session.surface().paints().len(), 1);

    session.handle_pointer(PointerEvent::PointerUp, None);
    assert!(session.handle_pointer(PointerEvent::PointerEnter, Some(2)).is_none());
}

#[test]
fn test_pointer_leave_never_draws() {
    for mode in Mode::CYCLE {
        let mut session = new_session(mode, 1);
        session.surface_mut().take_commands();
        session.handle_pointer(PointerEvent::PointerLeave, Some(2));
        session.handle_pointer(PointerEvent::PointerDown, Some(3));
        session.surface_mut().take_commands();
        session.handle_pointer(PointerEvent::PointerLeave, Some(3));
        assert!(session.surface().paints().is_empty(), "{:?}", mode);
    }
}

#[test]
fn test_click_draws_in_every_mode() {
    for mode in Mode::CYCLE {
        let mut session = new_session(mode, 5);
        session.surface_mut().take_commands();
        assert!(session.handle_pointer(PointerEvent::Click, Some(7)).is_some());
        assert_eq!(session.surface().paints().len(), 1);
    }
}

#[test]
fn test_darkening_reaches_black_and_stays() {
    let mut session = new_session(Mode::Darkening, 1);
    let mut previous = LIGHT_GREEN;
    for step in 1..=10 {
        let color = session.draw_on(9).unwrap().color;
        assert!(color.r <= previous.r && color.g <= previous.g && color.b <= previous.b);
        assert_eq!(session.grid().get(9).unwrap().interaction_count(), step);
        previous = color;
    }
    assert_eq!(previous, BLACK);
    for _ in 0..5 {
        assert_eq!(session.draw_on(9).unwrap().color, BLACK);
    }
    assert_eq!(session.grid().get(9).unwrap().base_color(), Some(LIGHT_GREEN));
}

#[test]
fn test_hover_and_rainbow_leave_counters_alone() {
    for mode in [Mode::Hover, Mode::Click, Mode::Rainbow] {
        let mut session = new_session(mode, 11);
        session.handle_pointer(PointerEvent::Click, Some(0));
        let cell = session.grid().get(0).unwrap();
        assert_eq!(cell.interaction_count(), 0);
        assert_eq!(cell.base_color(), None);
    }
}

#[test]
fn test_rainbow_is_reproducible_with_a_seed() {
    let colors = |seed| -> Vec<Rgb> {
        let mut session = new_session(Mode::Rainbow, seed);
        (0..32)
            .filter_map(|i| session.handle_pointer(PointerEvent::PointerEnter, Some(i)))
            .map(|p| p.color)
            .collect()
    };
    let first = colors(77);
    assert_eq!(first.len(), 32);
    assert_eq!(first, colors(77));
    assert!(first.iter().all(|c| RAINBOW_PALETTE.contains(c)));
}

#[test]
fn test_key_commands() {
    let mut session = new_session(Mode::Darkening, 1);
    session.draw_on(0);
    assert_eq!(session.handle_key('R').unwrap(), Some(KeyCommand::Reset));
    assert_eq!(session.grid().touched_cells(), 0);

    session.surface_mut().push_prompt_reply(Some("abc"));
    assert_eq!(session.handle_key('n').unwrap(), Some(KeyCommand::Resize));
    assert_eq!(session.grid().side(), 8);
    assert_eq!(session.surface().warnings().len(), 1);
}

proptest! {
    #[test]
    fn darkening_is_monotonic_per_channel(draws in 1usize..30) {
        let mut session = new_session(Mode::Darkening, 1);
        let mut previous = LIGHT_GREEN;
        for _ in 0..draws {
            let color = session.draw_on(0).unwrap().color;
            prop_assert!(color.r <= previous.r);
            prop_assert!(color.g <= previous.g);
            prop_assert!(color.b <= previous.b);
            previous = color;
        }
        let count = session.grid().get(0).unwrap().interaction_count();
        prop_assert!((1..=10).contains(&count));
    }

    #[test]
    fn next_four_times_is_identity(start in 0usize..4, laps in 1usize..5) {
        let mode = Mode::CYCLE[start];
        let mut current = mode;
        for _ in 0..4 * laps {
            current = current.next();
        }
        prop_assert_eq!(current, mode);
    }
}
