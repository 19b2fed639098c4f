use super::*;
use crate::{Orientation, Point, SizePreset};

#[test]
fn session_start_state_is_empty() {
    let store = CompositionStore::default();
    assert_eq!(store.selected_layer(), SelectedLayer::Canvas);
    assert!(store.text_layer().is_none());
    assert!(store.canvas().is_unset());
    assert_eq!(store.canvas().size_preset, SizePreset::Original);
    assert_eq!(store.canvas().background_color, "#ffffff");
}

#[test]
fn selecting_text_creates_default_layer() {
    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Text);
    let text = store.visible_text().unwrap();
    assert_eq!(text.content, "Add text");
    assert_eq!(text.position, Point::ORIGIN);
    assert_eq!(text.font_size, 14.0);
    assert_eq!(text.color, "#000000");
}

#[test]
fn selecting_text_twice_is_idempotent() {
    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Text);
    let once = store.text_layer().cloned();
    store.select_layer(SelectedLayer::Text);
    assert_eq!(store.text_layer().cloned(), once);
}

#[test]
fn selecting_text_keeps_edited_layer() {
    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Text);
    let mut edited = store.text_layer().cloned().unwrap();
    edited.content = "hello".to_string();
    edited.position = Point::new(12.0, 30.0);
    store.set_text_layer(edited.clone());

    store.select_layer(SelectedLayer::Canvas);
    store.select_layer(SelectedLayer::Text);
    assert_eq!(store.text_layer(), Some(&edited));
}

#[test]
fn selecting_canvas_never_creates_text() {
    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Canvas);
    assert!(store.text_layer().is_none());
    assert_eq!(store.selected_layer(), SelectedLayer::Canvas);
}

#[test]
fn empty_content_counts_as_absent() {
    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Text);
    let mut deleted = store.text_layer().cloned().unwrap();
    deleted.content.clear();
    deleted.position = Point::new(99.0, 99.0);
    store.set_text_layer(deleted);
    assert!(store.text_layer().is_some());
    assert!(store.visible_text().is_none());

    store.select_layer(SelectedLayer::Text);
    let recreated = store.visible_text().unwrap();
    assert_eq!(recreated.position, Point::ORIGIN);
}

#[test]
fn set_canvas_replaces_wholesale() {
    let mut store = CompositionStore::default();
    let next = CanvasSpec {
        orientation: Orientation::Landscape,
        size_preset: SizePreset::from_name("16:9").unwrap(),
        height: 210.9375,
        background_color: "#112233".to_string(),
    };
    store.set_canvas(next.clone());
    assert_eq!(store.canvas(), &next);
}

#[test]
fn reset_clears_prior_edits() {
    let fresh = {
        let mut store = CompositionStore::default();
        store.select_layer(SelectedLayer::Text);
        store.text_layer().cloned()
    };

    let mut store = CompositionStore::default();
    store.select_layer(SelectedLayer::Text);
    let mut edited = store.text_layer().cloned().unwrap();
    edited.content = "sale".to_string();
    edited.font_size = 40.0;
    edited.position = Point::new(5.0, 6.0);
    store.set_text_layer(edited);
    store.set_canvas(CanvasSpec {
        height: 500.0,
        ..store.canvas().clone()
    });

    store.reset();
    assert!(store.text_layer().is_none());
    assert!(store.canvas().is_unset());
    assert_eq!(store.selected_layer(), SelectedLayer::Canvas);

    store.select_layer(SelectedLayer::Text);
    assert_eq!(store.text_layer().cloned(), fresh);
}

#[test]
fn config_defaults_flow_into_created_layers() {
    let mut cfg = EditorConfig::default();
    cfg.text.font_size = 22.0;
    cfg.canvas.background_color = "#000".to_string();
    let mut store = CompositionStore::new(cfg);
    assert_eq!(store.canvas().background_color, "#000");
    store.select_layer(SelectedLayer::Text);
    assert_eq!(store.visible_text().unwrap().font_size, 22.0);
}
