//! Integration tests for lifegrid

use lifegrid::{PatternError, Symbols, World, COLS, ROWS};

const ALL_DEAD: &str = "\
........\n\
........\n\
........\n\
........\n\
........\n\
........\n\
........\n\
........\n";

const LONE_CELL: &str = "\
........\n\
........\n\
........\n\
...X....\n\
........\n\
........\n\
........\n\
........\n";

const BLOCK: &str = "\
........\n\
........\n\
...XX...\n\
...XX...\n\
........\n\
........\n\
........\n\
........\n";

// Horizontal blinker straddling the left/right edge: the triple occupies
// columns 7, 0, 1 of row 3, contiguous only through the wraparound.
const EDGE_BLINKER: &str = "\
........\n\
........\n\
........\n\
XX.....X\n\
........\n\
........\n\
........\n\
........\n";

fn world_from(pattern: &str) -> World {
    let mut world = World::new_with_seed(0);
    world
        .initialize_from_reader(pattern.as_bytes(), Symbols::default())
        .expect("pattern should parse");
    world
}

#[test]
fn test_initialization_round_trip() {
    for pattern in [ALL_DEAD, LONE_CELL, BLOCK, EDGE_BLINKER] {
        let world = world_from(pattern);
        assert_eq!(world.generation(), 1);
        assert_eq!(world.render_to_string(Symbols::default()), pattern);
    }
}

#[test]
fn test_all_dead_is_a_fixed_point() {
    let mut world = world_from(ALL_DEAD);
    world.run(10);
    assert_eq!(world.generation(), 11);
    assert_eq!(world.population(), 0);
    assert_eq!(world.render_to_string(Symbols::default()), ALL_DEAD);
}

#[test]
fn test_lone_cell_dies_in_one_generation() {
    let mut world = world_from(LONE_CELL);
    assert_eq!(world.population(), 1);
    world.advance();
    assert_eq!(world.population(), 0);
    assert_eq!(world.render_to_string(Symbols::default()), ALL_DEAD);
}

#[test]
fn test_block_is_a_still_life() {
    let mut world = world_from(BLOCK);
    for _ in 0..4 {
        world.advance();
        assert_eq!(world.render_to_string(Symbols::default()), BLOCK);
    }
}

#[test]
fn test_blinker_oscillates_across_the_edge() {
    let mut world = world_from(EDGE_BLINKER);

    // The wrapped horizontal triple flips to a vertical triple at its
    // center, column 0.
    world.advance();
    assert_eq!(world.population(), 3);
    assert!(world.is_alive(2, 0));
    assert!(world.is_alive(3, 0));
    assert!(world.is_alive(4, 0));

    // And back again
    world.advance();
    assert_eq!(world.render_to_string(Symbols::default()), EDGE_BLINKER);
}

#[test]
fn test_advance_matches_direct_rule_application() {
    let mut world = world_from(EDGE_BLINKER);

    // Independently compute generation 2 by applying the rule to a copy
    // of the committed grid.
    let before = *world.cells();
    world.advance();

    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(
                world.cells().get(row, col),
                before.next_state(row, col),
                "mismatch at ({row},{col})"
            );
        }
    }
}

#[test]
fn test_short_file_leaves_world_uninitialized() {
    let mut world = World::new_with_seed(0);
    let truncated = &ALL_DEAD[..30];
    let err = world
        .initialize_from_reader(truncated.as_bytes(), Symbols::default())
        .unwrap_err();
    assert!(matches!(err, PatternError::TooShort));
    assert_eq!(world.generation(), 0);
}

#[test]
fn test_bad_symbol_leaves_world_uninitialized() {
    let mut world = World::new_with_seed(0);
    let bad = ALL_DEAD.replacen('.', "o", 1);
    let err = world
        .initialize_from_reader(bad.as_bytes(), Symbols::default())
        .unwrap_err();
    assert!(matches!(err, PatternError::InvalidSymbol { found: b'o', .. }));
    assert_eq!(world.generation(), 0);
}

#[test]
fn test_pattern_file_round_trip_on_disk() {
    let path = std::env::temp_dir().join("lifegrid_test_pattern.txt");
    std::fs::write(&path, BLOCK).expect("Failed to write pattern file");

    let mut world = World::new_with_seed(0);
    world
        .initialize_from_file(&path, Symbols::default())
        .expect("Failed to load pattern file");
    assert_eq!(world.render_to_string(Symbols::default()), BLOCK);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_seeded_runs_are_identical() {
    let mut a = World::new_with_seed(9001);
    let mut b = World::new_with_seed(9001);
    a.initialize_random();
    b.initialize_random();
    a.run(20);
    b.run(20);

    assert_eq!(a.generation(), b.generation());
    assert_eq!(
        a.render_to_string(Symbols::default()),
        b.render_to_string(Symbols::default())
    );
}
