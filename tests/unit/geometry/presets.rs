use super::*;

#[test]
fn lists_follow_display_order_and_share_square() {
    let portrait: Vec<_> = PORTRAIT_PRESETS.iter().map(|p| p.name).collect();
    assert_eq!(portrait, ["1:2", "9:16", "2:3", "3:4", "4:5", "1:1"]);
    let landscape: Vec<_> = LANDSCAPE_PRESETS.iter().map(|p| p.name).collect();
    assert_eq!(landscape, ["2:1", "16:9", "3:2", "4:3", "5:4", "1:1"]);
}

#[test]
fn portrait_ratios_are_tall_and_landscape_ratios_are_wide() {
    for p in PORTRAIT_PRESETS {
        assert!(p.height >= p.width, "{}", p.name);
    }
    for p in LANDSCAPE_PRESETS {
        assert!(p.width >= p.height, "{}", p.name);
    }
}

#[test]
fn size_choices_start_with_original() {
    let choices = size_choices(Orientation::Landscape);
    assert_eq!(choices.len(), LANDSCAPE_PRESETS.len() + 1);
    assert_eq!(choices[0], SizePreset::Original);
    assert_eq!(choices[2].name(), "16:9");
}

#[test]
fn names_resolve_and_unknown_names_fail() {
    assert_eq!(SizePreset::from_name("original").unwrap(), SizePreset::Original);
    assert_eq!(SizePreset::from_name("9:16").unwrap().name(), "9:16");
    let err = SizePreset::from_name("7:3").unwrap_err();
    assert!(err.to_string().contains("7:3"));
}

#[test]
fn serializes_as_plain_name() {
    let preset = SizePreset::from_name("4:5").unwrap();
    assert_eq!(serde_json::to_string(&preset).unwrap(), "\"4:5\"");
    assert_eq!(
        serde_json::to_string(&SizePreset::Original).unwrap(),
        "\"original\""
    );
    let back: SizePreset = serde_json::from_str("\"3:2\"").unwrap();
    assert_eq!(back.name(), "3:2");
    assert!(serde_json::from_str::<SizePreset>("\"huge\"").is_err());
}

#[test]
fn height_for_width_uses_ratio() {
    let p = find_preset("2:1").unwrap();
    assert_eq!(p.height_for_width(375.0), 187.5);
}
