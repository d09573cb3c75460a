use region_select::codec::{self, EncodedRegions};
use region_select::{Bounds, RegionStore, SelectionMode, SelectionSettings, SettingsFile, Shape};

fn shapes_and_bounds(store: &RegionStore) -> Vec<(Shape, Bounds)> {
    store
        .regions()
        .iter()
        .map(|region| (region.shape(), region.bounds))
        .collect()
}

#[test]
fn test_empty_store_round_trip() {
    let store = RegionStore::new();
    let encoded = codec::encode(&store);
    assert_eq!(encoded, EncodedRegions::default());

    let restored = RegionStore::new();
    assert_eq!(codec::parse_into(&restored, &encoded), 0);
    assert!(restored.is_empty());
}

#[test]
fn test_single_region_round_trip() {
    let store = RegionStore::new();
    store.add(SelectionMode::Ellipse, 12, -4, 3, 40);

    let encoded = codec::encode(&store);
    assert_eq!(encoded.boxes, "");
    assert_eq!(encoded.ellipses, "12,-4,3,40");

    let restored = RegionStore::new();
    codec::parse_into(&restored, &encoded);
    assert_eq!(shapes_and_bounds(&restored), shapes_and_bounds(&store));
}

#[test]
fn test_mixed_round_trip_orders_boxes_first() {
    let store = RegionStore::new();
    store.add(SelectionMode::Ellipse, 0, 0, 10, 10);
    store.add(SelectionMode::Box, 1, 1, 2, 2);
    store.add(SelectionMode::Ellipse, 5, 5, 6, 6);
    store.add(SelectionMode::Box, 3, 3, 4, 4);

    let encoded = codec::encode(&store);
    assert_eq!(encoded.boxes, "1,1,2,2;3,3,4,4");
    assert_eq!(encoded.ellipses, "0,0,10,10;5,5,6,6");

    let restored = RegionStore::new();
    assert_eq!(restored.parse(&encoded.boxes, &encoded.ellipses), 4);
    assert_eq!(
        shapes_and_bounds(&restored),
        vec![
            (Shape::Box, Bounds::new(1, 1, 2, 2)),
            (Shape::Box, Bounds::new(3, 3, 4, 4)),
            (Shape::Ellipse, Bounds::new(0, 0, 10, 10)),
            (Shape::Ellipse, Bounds::new(5, 5, 6, 6)),
        ]
    );

    // Encoding the restored store is stable
    assert_eq!(codec::encode(&restored), encoded);
}

#[test]
fn test_parse_replaces_existing_regions() {
    let store = RegionStore::new();
    store.add(SelectionMode::Box, 0, 0, 1, 1);
    store.add(SelectionMode::Box, 0, 0, 1, 1);

    store.parse("", "7,7,9,9");
    assert_eq!(store.count(), 1);
    assert_eq!(store.get(1).unwrap().shape(), Shape::Ellipse);
}

#[test]
fn test_corrupt_entry_keeps_the_rest() {
    let store = RegionStore::new();
    let loaded = store.parse("0,0,10,10;1,2,3;abc;20,20,30,30", "5,5,x,5;1,1,4,4;");

    assert_eq!(loaded, 3);
    assert_eq!(
        shapes_and_bounds(&store),
        vec![
            (Shape::Box, Bounds::new(0, 0, 10, 10)),
            (Shape::Box, Bounds::new(20, 20, 30, 30)),
            (Shape::Ellipse, Bounds::new(1, 1, 4, 4)),
        ]
    );
}

#[test]
fn test_parsed_regions_are_enabled() {
    let store = RegionStore::new();
    store.add(SelectionMode::Box, 0, 0, 10, 10);
    store.switch(1, false);

    let encoded = codec::encode(&store);
    let restored = RegionStore::new();
    codec::parse_into(&restored, &encoded);
    assert!(restored.status(1));
}

#[test]
fn test_settings_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("region_select_settings_{}", std::process::id()));
    let file = SettingsFile::new(dir.join("settings.json"));

    let store = RegionStore::new();
    store.add(SelectionMode::Box, 2, 2, 8, 8);
    let selected = store.add(SelectionMode::Ellipse, 20, 20, 40, 30);

    let settings = SelectionSettings::capture(&store, SelectionMode::Box, selected);
    file.save(&settings).unwrap();

    let loaded = file.load().unwrap();
    assert_eq!(loaded, settings);

    let restored = RegionStore::new();
    let (mode, restored_selected) = loaded.restore(&restored);
    assert_eq!(mode, SelectionMode::Box);
    assert_eq!(restored_selected, selected);
    assert_eq!(shapes_and_bounds(&restored), shapes_and_bounds(&store));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_settings_file_gives_defaults() {
    let file = SettingsFile::new(std::env::temp_dir().join("region_select_does_not_exist.json"));
    let settings = file.load().unwrap();

    assert_eq!(settings, SelectionSettings::default());
    assert!(settings.ellipse_mode);
}

#[test]
fn test_invalid_settings_document_is_an_error() {
    let path = std::env::temp_dir().join(format!("region_select_bad_{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();

    let result = SettingsFile::new(&path).load();
    assert!(matches!(result, Err(region_select::SettingsError::Json(_))));

    std::fs::remove_file(&path).ok();
}
