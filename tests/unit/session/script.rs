use super::*;
use crate::foundation::core::Point;

#[test]
fn events_parse_from_tagged_json() {
    let script = EditorScript::from_json_str(
        r##"{
            "events": [
                { "op": "select_layer", "layer": "text" },
                { "op": "pointer", "event": { "kind": "down", "x": 5, "y": 6 } },
                { "op": "set_text", "content": "hi" },
                { "op": "delete_text" },
                { "op": "font_size", "value": 18 },
                { "op": "text_color", "color": "#f00" },
                { "op": "orientation", "orientation": "landscape" },
                { "op": "size", "preset": "4:3" },
                { "op": "background_color", "color": "#222" }
            ]
        }"##,
    )
    .unwrap();

    assert_eq!(script.events.len(), 9);
    assert_eq!(
        script.events[0],
        EditorEvent::SelectLayer {
            layer: SelectedLayer::Text
        }
    );
    assert_eq!(
        script.events[1],
        EditorEvent::Pointer {
            event: PointerEvent::down(Point::new(5.0, 6.0))
        }
    );
    assert_eq!(script.events[3], EditorEvent::DeleteText);
    assert_eq!(
        script.events[6],
        EditorEvent::Orientation {
            orientation: Orientation::Landscape
        }
    );
}

#[test]
fn unknown_op_is_a_serde_error() {
    let err = EditorScript::from_json_str(r#"{ "events": [ { "op": "rotate" } ] }"#).unwrap_err();
    assert!(matches!(err, crate::PinError::Serde(_)));
}

#[test]
fn missing_script_file_names_the_path() {
    let err = EditorScript::from_path("target/nowhere/script.json").unwrap_err();
    assert!(err.to_string().contains("script.json"));
}
