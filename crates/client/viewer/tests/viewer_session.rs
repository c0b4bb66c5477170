//! End-to-end cursor session against a small farm: terrain from a mock host,
//! named features from a static tile dataset.

use std::collections::HashMap;

use client_viewer::{
    HostOracle, InputSource, Narrator, TerrainOracle, TileDescriber, TileViewer, ViewerAction,
    ViewerEnv, Viewport, WorldTileDescriber,
};
use game_content::StaticTileRegistry;
use game_core::{
    AccessConfig, Bush, BushSize, Calendar, Crop, CropKind, Facing, HoeDirt, ItemNameTable,
    PixelVector, Position, Season, TILE_SIZE, TerrainFeature,
};

const DATASET: &str = r#"{
    "Farm": {
        "Shipping Bin": {"x": 7, "y": 5, "type": "container"},
        "Farmhouse Door": {"x": 5, "y": 3, "type": "door"}
    }
}"#;

struct Farm {
    player: PixelVector,
    facing: Option<Facing>,
    calendar: Calendar,
    terrain: HashMap<Position, TerrainFeature>,
    pointer: Option<PixelVector>,
}

impl Farm {
    fn new() -> Self {
        let parsnip = HoeDirt {
            watered: true,
            fertilized: false,
            crop: Some(Crop {
                kind: CropKind::Planted { harvest_item: 24 },
                ready_for_harvest: true,
                dead: false,
            }),
        };
        let mut bush = Bush::new(BushSize::Medium);
        bush.tile_sheet_offset = 1;

        Self {
            player: PixelVector::new(5 * TILE_SIZE + 32, 5 * TILE_SIZE + 32),
            facing: Some(Facing::Down),
            calendar: Calendar::new(Season::Spring, 16),
            terrain: HashMap::from([
                (Position::new(5, 6), TerrainFeature::Dirt(parsnip)),
                (Position::new(6, 6), bush.into()),
            ]),
            pointer: None,
        }
    }
}

impl HostOracle for Farm {
    fn player_position(&self) -> PixelVector {
        self.player
    }

    fn player_facing(&self) -> Option<Facing> {
        self.facing
    }

    fn map_size(&self) -> (i32, i32) {
        (40 * TILE_SIZE, 30 * TILE_SIZE)
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(0, 0, 20 * TILE_SIZE, 15 * TILE_SIZE)
    }

    fn is_over_menu(&self, _screen_point: PixelVector) -> bool {
        false
    }

    fn set_pointer_position(&mut self, screen_point: PixelVector) {
        self.pointer = Some(screen_point);
    }
}

impl TerrainOracle for Farm {
    fn location_name(&self) -> String {
        "Farm".to_string()
    }

    fn calendar(&self) -> Calendar {
        self.calendar
    }

    fn terrain_at(&self, tile: Position) -> Option<TerrainFeature> {
        self.terrain.get(&tile).cloned()
    }

    fn is_colliding(&self, tile: Position) -> bool {
        tile == Position::new(4, 6)
    }
}

#[derive(Default)]
struct Speech(Vec<String>);

impl Narrator for Speech {
    fn speak(&mut self, text: &str, interrupt: bool) {
        assert!(interrupt);
        self.0.push(text.to_string());
    }
}

struct Press(ViewerAction);

impl InputSource for Press {
    fn just_pressed(&self, action: ViewerAction) -> bool {
        self.0 == action
    }
}

fn items() -> ItemNameTable {
    ItemNameTable::new()
        .with(24, "Parsnip")
        .with(296, "Salmonberry")
}

fn step(
    viewer: &mut TileViewer,
    farm: &Farm,
    items: &ItemNameTable,
    tiles: &StaticTileRegistry,
    config: &AccessConfig,
    speech: &mut Speech,
    action: ViewerAction,
) {
    let describer = WorldTileDescriber::new(farm, items, tiles, config);
    let mut env = ViewerEnv {
        host: farm,
        describer: &describer,
        narrator: speech,
        config: &config.tile_cursor,
    };
    viewer.handle_input(&Press(action), &mut env);
}

#[test]
fn walking_the_cursor_around_the_farm() {
    let farm = Farm::new();
    let items = items();
    let tiles = StaticTileRegistry::parse(DATASET).unwrap();
    let config = AccessConfig::default();
    let mut speech = Speech::default();
    let mut viewer = TileViewer::new();

    assert_eq!(viewer.viewing_tile(&farm), Position::new(5, 6));

    let mut press = |viewer: &mut TileViewer, action| {
        step(viewer, &farm, &items, &tiles, &config, &mut speech, action)
    };

    press(&mut viewer, ViewerAction::Right);
    press(&mut viewer, ViewerAction::Left);
    press(&mut viewer, ViewerAction::Left);
    press(&mut viewer, ViewerAction::Up);
    press(&mut viewer, ViewerAction::Right);
    press(&mut viewer, ViewerAction::Right);
    press(&mut viewer, ViewerAction::Right);
    press(&mut viewer, ViewerAction::Up);
    press(&mut viewer, ViewerAction::Up);

    assert_eq!(
        speech.0,
        vec![
            "Harvestable Salmonberry Medium Bush, 6, 6",
            "Watered Harvestable Parsnip, 5, 6",
            "blocked, 4, 6",
            "empty, 4, 5",
            "empty, 5, 5",
            "empty, 6, 5",
            "Shipping Bin, 7, 5",
            "empty, 7, 4",
            "empty, 7, 3",
        ]
    );
}

#[test]
fn lock_keeps_cursor_relative_while_walking() {
    let mut farm = Farm::new();
    let items = items();
    let tiles = StaticTileRegistry::parse(DATASET).unwrap();
    let config = AccessConfig::default();
    let mut speech = Speech::default();
    let mut viewer = TileViewer::new();

    viewer.update(&mut farm, &config.tile_cursor);
    step(
        &mut viewer,
        &farm,
        &items,
        &tiles,
        &config,
        &mut speech,
        ViewerAction::Up,
    );
    step(
        &mut viewer,
        &farm,
        &items,
        &tiles,
        &config,
        &mut speech,
        ViewerAction::Up,
    );
    step(
        &mut viewer,
        &farm,
        &items,
        &tiles,
        &config,
        &mut speech,
        ViewerAction::ToggleRelativeLock,
    );
    assert_eq!(viewer.viewing_tile(&farm), Position::new(5, 4));

    // Walk up one tile and turn around; the locked cursor follows the player.
    farm.player -= PixelVector::new(0, TILE_SIZE);
    farm.facing = Some(Facing::Up);
    viewer.update(&mut farm, &config.tile_cursor);
    assert_eq!(viewer.viewing_tile(&farm), Position::new(5, 3));

    step(
        &mut viewer,
        &farm,
        &items,
        &tiles,
        &config,
        &mut speech,
        ViewerAction::ToggleRelativeLock,
    );
    // Unlocked again: the viewing offset was reset by the walk.
    assert_eq!(viewer.viewing_tile(&farm), Position::new(5, 3));
    assert_eq!(
        speech.0.last().map(String::as_str),
        Some("Relative cursor lock disabled.")
    );

    let cursor = viewer.cursor_position(&farm);
    viewer.update(&mut farm, &config.tile_cursor);
    assert_eq!(farm.pointer, Some(cursor));
}

#[test]
fn missing_dataset_still_describes_terrain() {
    let farm = Farm::new();
    let items = items();
    let tiles = StaticTileRegistry::empty();
    let config = AccessConfig {
        watered_toggle: false,
        ..AccessConfig::default()
    };
    let describer = WorldTileDescriber::new(&farm, &items, &tiles, &config);

    assert_eq!(
        describer.describe_at(Position::new(5, 6)),
        Some("Harvestable Parsnip".to_string())
    );
    assert_eq!(describer.describe_at(Position::new(7, 5)), None);
}
