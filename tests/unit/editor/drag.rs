use super::*;
use crate::composition::model::TextLayer;

fn store_with_text_at(position: Point) -> CompositionStore {
    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Text);
    let next = TextLayer {
        position,
        ..store.text_layer().cloned().unwrap()
    };
    store.set_text_layer(next);
    store.select_layer(SelectedLayer::Canvas);
    store
}

fn text_position(store: &CompositionStore) -> Point {
    store.text_layer().unwrap().position
}

#[test]
fn press_then_move_follows_offset() {
    let state = DragState::press(Point::new(50.0, 60.0), Point::new(10.0, 20.0));
    assert_eq!(state.offset(), Some(Vec2::new(40.0, 40.0)));
    assert_eq!(
        state.drag_to(Point::new(90.0, 100.0)),
        Some(Point::new(50.0, 60.0))
    );
    assert_eq!(
        state.drag_to(Point::new(50.0, 60.0)),
        Some(Point::new(10.0, 20.0))
    );
    assert_eq!(state.release(), DragState::Idle);
    assert_eq!(DragState::Idle.drag_to(Point::new(1.0, 1.0)), None);
}

#[test]
fn drag_scenario_with_leave() {
    let mut store = store_with_text_at(Point::new(10.0, 20.0));
    let mut state = DragState::default();
    let mut surface = DragSurface::new(&mut state, &mut store);

    surface.pointer_down(Point::new(50.0, 60.0));
    assert_eq!(surface.state().offset(), Some(Vec2::new(40.0, 40.0)));
    assert!(surface.pointer_move(Point::new(90.0, 100.0)));
    surface.pointer_leave();
    assert!(!surface.pointer_move(Point::new(200.0, 200.0)));
    assert_eq!(surface.state(), DragState::Idle);

    assert_eq!(text_position(&store), Point::new(50.0, 60.0));
    assert_eq!(store.selected_layer(), SelectedLayer::Text);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut store = store_with_text_at(Point::new(10.0, 20.0));
    let mut state = DragState::Idle;
    let mut surface = DragSurface::new(&mut state, &mut store);
    surface.handle(PointerEvent::move_to(Point::new(300.0, 300.0)));
    surface.handle(PointerEvent::Up);
    assert_eq!(text_position(&store), Point::new(10.0, 20.0));
    assert_eq!(store.selected_layer(), SelectedLayer::Canvas);
}

#[test]
fn up_and_leave_both_end_the_drag() {
    for end in [PointerEvent::Up, PointerEvent::Leave] {
        let mut store = store_with_text_at(Point::ORIGIN);
        let mut state = DragState::Idle;
        let mut surface = DragSurface::new(&mut state, &mut store);
        surface.handle(PointerEvent::down(Point::new(5.0, 5.0)));
        assert!(surface.state().is_dragging());
        surface.handle(end);
        assert!(!surface.state().is_dragging());
    }
}

#[test]
fn press_without_text_creates_layer_at_origin() {
    let mut store = CompositionStore::default();
    let mut state = DragState::Idle;
    let mut surface = DragSurface::new(&mut state, &mut store);
    surface.pointer_down(Point::new(7.0, 8.0));
    surface.pointer_move(Point::new(17.0, 28.0));
    assert_eq!(text_position(&store), Point::new(10.0, 20.0));
}

#[test]
fn move_keeps_content_and_style() {
    let mut store = store_with_text_at(Point::ORIGIN);
    let before = store.text_layer().cloned().unwrap();
    let mut state = DragState::Idle;
    let mut surface = DragSurface::new(&mut state, &mut store);
    surface.pointer_down(Point::new(1.0, 1.0));
    surface.pointer_move(Point::new(4.0, 5.0));
    let after = store.text_layer().unwrap();
    assert_eq!(after.content, before.content);
    assert_eq!(after.font_size, before.font_size);
    assert_eq!(after.color, before.color);
    assert_eq!(after.position, Point::new(3.0, 4.0));
}

#[test]
fn pointer_events_use_tagged_json() {
    let ev: PointerEvent = serde_json::from_str(r#"{ "kind": "down", "x": 1.5, "y": 2 }"#).unwrap();
    assert_eq!(ev, PointerEvent::down(Point::new(1.5, 2.0)));
    let ev: PointerEvent = serde_json::from_str(r#"{ "kind": "leave" }"#).unwrap();
    assert_eq!(ev, PointerEvent::Leave);
}
