//! Consumer Tests - Outline Preview and Placement from Reach-Around Targets
//!
//! End-to-end: tick the engine, ask for the outline, then place with the
//! same target the way a host's "use" handler would.

use glam::{DVec3, IVec3};
use reacharound_engine::config::{FeatureToggles, ReacharoundConfig, Rgba};
use reacharound_engine::game::{PlacementContext, place_block, reacharound_outline};
use reacharound_engine::player::PlayerPose;
use reacharound_engine::reacharound::{ReacharoundEngine, TickContext};
use reacharound_engine::world::{
    BlockKind, BlockState, FluidHandling, HitResult, ItemStack, RaycastContext, ShapeType, SlabType,
    VoxelWorld, WorldQuery,
};

fn crosshair(world: &VoxelWorld, player: &PlayerPose) -> HitResult {
    world.raycast(
        &RaycastContext::new(player.camera_position, player.reach_point(), ShapeType::Outline, FluidHandling::None)
            .excluding(player.entity),
    )
}

fn colored_config() -> ReacharoundConfig {
    ReacharoundConfig {
        vertical_reacharound: true,
        horizontal_reacharound: true,
        outline_color_hex: "#00FF00".to_string(),
        ..Default::default()
    }
}

/// Tick, then place at the cached target. Returns the placed state.
fn tick_and_place(engine: &mut ReacharoundEngine, world: &mut VoxelWorld, player: &PlayerPose, aim: &HitResult) -> Option<BlockState> {
    engine.tick(&TickContext::new(&*world, player, aim));
    let target = engine.last_result()?;
    let ctx = PlacementContext::from_reacharound(engine, &*world, player, target);
    place_block(world, &ctx, &player.main_hand)
}

// ============================================================================
// Bridging Tests
// ============================================================================

#[test]
fn test_bridge_walks_out_over_the_void() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
    let mut engine = ReacharoundEngine::new(FeatureToggles::all());

    for step in 0..4 {
        let player = PlayerPose::new(DVec3::new(0.5, 65.0, 0.5 + step as f64), 0.0, 50.0)
            .holding(ItemStack::block(BlockKind::Solid, 64));
        let aim = crosshair(&world, &player);
        assert!(aim.is_miss(), "step {step} crosshair should miss");

        let placed = tick_and_place(&mut engine, &mut world, &player, &aim);
        assert_eq!(placed, Some(BlockState::Solid), "step {step}");
    }

    for z in 0..=4 {
        assert_eq!(world.block_state(IVec3::new(0, 64, z)), BlockState::Solid);
    }
}

#[test]
fn test_slab_bridge_from_full_block_places_top_slab() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
    let player = PlayerPose::new(DVec3::new(0.5, 65.0, 0.5), 0.0, 50.0)
        .holding(ItemStack::block(BlockKind::Slab, 8));
    let aim = crosshair(&world, &player);
    let mut engine = ReacharoundEngine::new(FeatureToggles::all());

    let placed = tick_and_place(&mut engine, &mut world, &player, &aim);
    assert_eq!(placed, Some(BlockState::Slab(SlabType::Top)));
    assert_eq!(world.block_state(IVec3::new(0, 64, 1)), BlockState::Slab(SlabType::Top));
}

#[test]
fn test_slab_bridge_on_bottom_slab_stays_at_slab_height() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Slab(SlabType::Bottom));
    let player = PlayerPose::new(DVec3::new(0.5, 64.5, 0.5), 0.0, 50.0)
        .holding(ItemStack::block(BlockKind::Slab, 8));
    let aim = crosshair(&world, &player);
    assert!(aim.is_miss());
    let mut engine = ReacharoundEngine::new(FeatureToggles::all());

    let placed = tick_and_place(&mut engine, &mut world, &player, &aim);
    assert!(engine.is_on_slab());
    assert_eq!(placed, Some(BlockState::Slab(SlabType::Bottom)));
    assert_eq!(world.block_state(IVec3::new(0, 64, 1)), BlockState::Slab(SlabType::Bottom));
}

#[test]
fn test_vertical_places_under_the_found_block() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 61, 0), BlockState::Solid);
    let player = PlayerPose::new(DVec3::new(0.5, 64.0, 0.5), 0.0, 90.0)
        .holding(ItemStack::block(BlockKind::Slab, 1));
    // Host crosshair reach fell short of the block
    let aim = HitResult::miss(player.camera_position + player.look * 3.0, player.look);
    let mut engine = ReacharoundEngine::new(FeatureToggles::all());

    let placed = tick_and_place(&mut engine, &mut world, &player, &aim);
    assert!(engine.is_last_result_vertical());
    // Placed against the underside, so the slab hugs the block above
    assert_eq!(placed, Some(BlockState::Slab(SlabType::Top)));
    assert_eq!(world.block_state(IVec3::new(0, 60, 0)), BlockState::Slab(SlabType::Top));
}

// ============================================================================
// Outline Tests
// ============================================================================

#[test]
fn test_outline_matches_what_gets_placed() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Slab(SlabType::Bottom));
    let player = PlayerPose::new(DVec3::new(0.5, 64.5, 0.5), 0.0, 50.0)
        .holding(ItemStack::block(BlockKind::Slab, 8));
    let aim = crosshair(&world, &player);
    let config = colored_config();
    let mut engine = ReacharoundEngine::new(config.features());
    engine.tick(&TickContext::new(&world, &player, &aim));

    let draw = reacharound_outline(&engine, &world, &player, Some(&aim), &config, 0.0).unwrap();
    assert_eq!(draw.color, Rgba::new(0, 255, 0, config.outline_alpha));

    let target = engine.last_result().unwrap();
    let ctx = PlacementContext::from_reacharound(&engine, &world, &player, target);
    let placed = place_block(&mut world, &ctx, &player.main_hand);
    assert_eq!(placed, Some(draw.state));
    assert_eq!(ctx.placement_pos, draw.block_pos);
}

#[test]
fn test_outline_hidden_outside_world_border() {
    let mut world = VoxelWorld::new().with_border(1);
    world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
    let player = PlayerPose::new(DVec3::new(0.5, 65.0, 0.5), 0.0, 50.0)
        .holding(ItemStack::block(BlockKind::Solid, 1));
    let aim = crosshair(&world, &player);
    let config = colored_config();
    let mut engine = ReacharoundEngine::new(config.features());
    engine.tick(&TickContext::new(&world, &player, &aim));

    // Targeting still happens; only the consumer refuses
    assert_eq!(engine.last_result().map(|r| r.block_pos), Some(IVec3::new(0, 64, 1)));
    assert!(reacharound_outline(&engine, &world, &player, Some(&aim), &config, 0.0).is_none());

    let ctx = PlacementContext::from_reacharound(&engine, &world, &player, engine.last_result().unwrap());
    assert_eq!(place_block(&mut world, &ctx, &player.main_hand), None);
}

#[test]
fn test_outline_hidden_when_features_off() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
    let player = PlayerPose::new(DVec3::new(0.5, 65.0, 0.5), 0.0, 50.0)
        .holding(ItemStack::block(BlockKind::Solid, 1));
    let aim = crosshair(&world, &player);
    let config = ReacharoundConfig::default();
    let mut engine = ReacharoundEngine::new(config.features());
    engine.tick(&TickContext::new(&world, &player, &aim));

    assert_eq!(engine.last_result(), None);
    assert!(reacharound_outline(&engine, &world, &player, Some(&aim), &config, 0.0).is_none());
}

#[test]
fn test_rainbow_outline_cycles_over_time() {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
    let player = PlayerPose::new(DVec3::new(0.5, 65.0, 0.5), 0.0, 50.0)
        .holding(ItemStack::block(BlockKind::Solid, 1));
    let aim = crosshair(&world, &player);
    let config = ReacharoundConfig { outline_alpha: 80, ..colored_config() };
    let config = ReacharoundConfig { outline_color_hex: String::new(), ..config };
    let mut engine = ReacharoundEngine::new(config.features());
    engine.tick(&TickContext::new(&world, &player, &aim));

    let early = reacharound_outline(&engine, &world, &player, Some(&aim), &config, 0.0).unwrap();
    let later = reacharound_outline(&engine, &world, &player, Some(&aim), &config, 1.0).unwrap();
    assert_ne!(early.color, later.color);
    assert_eq!(early.color.a, 80);
    assert_eq!(later.color.a, 80);
}
