use super::*;

// =============================================================
// Layout
// =============================================================

#[test]
fn layout_breakpoint_is_inclusive_for_touch() {
    assert_eq!(Layout::for_width(768.0, 768.0), Layout::Touch);
    assert_eq!(Layout::for_width(375.0, 768.0), Layout::Touch);
    assert_eq!(Layout::for_width(769.0, 768.0), Layout::Desktop);
    assert_eq!(Layout::for_width(1440.0, 768.0), Layout::Desktop);
}

#[test]
fn policy_default_is_pause_on_hover() {
    assert_eq!(StripPolicy::default(), StripPolicy::PauseOnHover);
}

// =============================================================
// Drag
// =============================================================

#[test]
fn drag_offset_is_base_minus_twice_delta() {
    let session = DragSession { start_x: 100.0, base_offset: 500.0 };
    for (x, expected) in [(100.0, 500.0), (130.0, 440.0), (60.0, 580.0), (350.0, 0.0)] {
        let got = session.offset_at(x, 2.0);
        assert!((got - expected).abs() < f64::EPSILON, "x={x}: got {got}, want {expected}");
    }
}

#[test]
fn tracker_ignores_moves_without_session() {
    let tracker = DragTracker::new(2.0);
    assert!(!tracker.is_active());
    assert_eq!(tracker.move_to(40.0), None);
}

#[test]
fn tracker_session_lifecycle() {
    let mut tracker = DragTracker::new(2.0);
    tracker.begin(20.0, 300.0);
    assert!(tracker.is_active());
    assert_eq!(tracker.move_to(50.0), Some(240.0));
    assert_eq!(tracker.move_to(10.0), Some(320.0));

    tracker.end();
    assert!(!tracker.is_active());
    assert_eq!(tracker.move_to(50.0), None);
}

#[test]
fn tracker_new_touch_rebases_offset() {
    let mut tracker = DragTracker::new(2.0);
    tracker.begin(0.0, 100.0);
    tracker.end();
    tracker.begin(200.0, 80.0);
    assert_eq!(tracker.move_to(190.0), Some(100.0));
}

// =============================================================
// AutoScroll
// =============================================================

#[test]
fn auto_scroll_limit_is_cards_times_width() {
    let scroll = AutoScroll::new(1.0, 430.0, 4);
    assert!((scroll.limit() - 1720.0).abs() < f64::EPSILON);
}

#[test]
fn auto_scroll_idle_until_started() {
    let mut scroll = AutoScroll::new(1.0, 430.0, 4);
    assert!(!scroll.is_active());
    assert_eq!(scroll.tick(), None);
    assert_eq!(scroll.offset(), 0.0);
}

#[test]
fn auto_scroll_advances_one_pixel_per_frame() {
    let mut scroll = AutoScroll::new(1.0, 430.0, 4);
    scroll.start();
    assert_eq!(scroll.tick(), Some(1.0));
    assert_eq!(scroll.tick(), Some(2.0));
    assert_eq!(scroll.tick(), Some(3.0));
}

#[test]
fn auto_scroll_wraps_once_per_cycle_within_bounds() {
    let mut scroll = AutoScroll::new(1.0, 430.0, 4);
    scroll.start();
    let mut wraps = 0;
    let mut previous = scroll.offset();
    for _ in 0..(1720 * 3) {
        let offset = scroll.tick().unwrap();
        assert!(offset >= 0.0);
        assert!(offset < 1720.0);
        if offset < previous {
            wraps += 1;
            assert_eq!(offset, 0.0);
        }
        previous = offset;
    }
    assert_eq!(wraps, 3);
}

#[test]
fn auto_scroll_wraps_exactly_at_limit() {
    let mut scroll = AutoScroll::new(1.0, 430.0, 4);
    scroll.start();
    for _ in 0..1719 {
        scroll.tick();
    }
    assert_eq!(scroll.offset(), 1719.0);
    assert_eq!(scroll.tick(), Some(0.0));
}

#[test]
fn auto_scroll_stop_freezes_and_resume_continues() {
    let mut scroll = AutoScroll::new(1.0, 430.0, 4);
    scroll.start();
    for _ in 0..10 {
        scroll.tick();
    }
    scroll.stop();
    assert_eq!(scroll.tick(), None);
    assert_eq!(scroll.offset(), 10.0);

    scroll.start();
    assert_eq!(scroll.tick(), Some(11.0));
}

#[test]
fn auto_scroll_with_no_cards_stays_at_zero() {
    let mut scroll = AutoScroll::new(1.0, 430.0, 0);
    scroll.start();
    assert_eq!(scroll.tick(), Some(0.0));
    assert_eq!(scroll.tick(), Some(0.0));
}
