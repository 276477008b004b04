//! Reach-Around Demo
//!
//! Run with: `cargo run --bin reach-demo [config.json]`
//!
//! Scripted, headless walk-through of the reach-around engine:
//! - Bridging: the player walks south off a platform, reach-around places the next block each step
//! - Slab bridging: the same while standing on bottom slabs
//! - Vertical: looking straight down over a ledge at a block hanging below
//!
//! Set `RUST_LOG=reacharound_engine=debug` to see target changes.

use glam::{DVec3, IVec3};
use tracing_subscriber::EnvFilter;

use reacharound_engine::config::ReacharoundConfig;
use reacharound_engine::game::{PlacementContext, place_block, reacharound_outline};
use reacharound_engine::player::PlayerPose;
use reacharound_engine::reacharound::{ReacharoundEngine, TickContext};
use reacharound_engine::world::{
    BlockKind, BlockState, FluidHandling, HitResult, ItemStack, RaycastContext, ShapeType, SlabType,
    VoxelWorld, WorldQuery,
};

/// Crosshair reach of the demo host, shorter than the block interaction range.
const CROSSHAIR_RANGE: f64 = 3.0;
const TICK_SECS: f64 = 0.05;

fn crosshair(world: &VoxelWorld, player: &PlayerPose) -> HitResult {
    let end = player.camera_position + player.look * CROSSHAIR_RANGE;
    world.raycast(
        &RaycastContext::new(player.camera_position, end, ShapeType::Outline, FluidHandling::None)
            .excluding(player.entity),
    )
}

/// One tick plus one "use" press. Returns whether a block was placed.
fn step(
    engine: &mut ReacharoundEngine,
    world: &mut VoxelWorld,
    player: &PlayerPose,
    config: &ReacharoundConfig,
    tick: u32,
) -> bool {
    let aim = crosshair(world, player);
    engine.tick(&TickContext::new(&*world, player, &aim));

    let time = tick as f64 * TICK_SECS;
    match reacharound_outline(engine, &*world, player, Some(&aim), config, time) {
        Some(draw) => println!(
            "  tick {tick:>2}: outline {:?} at {:?} (rgba {:?})",
            draw.state, draw.block_pos, draw.color
        ),
        None => println!("  tick {tick:>2}: no outline"),
    }

    let Some(target) = engine.last_result() else {
        return false;
    };
    let ctx = PlacementContext::from_reacharound(engine, &*world, player, target);
    match place_block(world, &ctx, &player.main_hand) {
        Some(state) => {
            println!(
                "           placed {:?} at {:?} against {} ({})",
                state,
                ctx.placement_pos,
                ctx.side(),
                if engine.is_last_result_vertical() { "vertical" } else { "horizontal" }
            );
            true
        }
        None => false,
    }
}

fn bridge(engine: &mut ReacharoundEngine, config: &ReacharoundConfig, on_slabs: bool) {
    let mut world = VoxelWorld::new().with_border(64);
    let (floor, feet_y, stack) = if on_slabs {
        (BlockState::Slab(SlabType::Bottom), 64.5, ItemStack::block(BlockKind::Slab, 64))
    } else {
        (BlockState::Solid, 65.0, ItemStack::block(BlockKind::Solid, 64))
    };
    world.fill(IVec3::new(-1, 64, -3), IVec3::new(1, 64, 0), floor);

    let mut player = PlayerPose::new(DVec3::new(0.5, feet_y, 0.5), 0.0, 50.0).holding(stack);
    let mut placed = 0;
    for tick in 0..6 {
        if step(engine, &mut world, &player, config, tick) {
            placed += 1;
            player = PlayerPose::new(player.position + DVec3::Z, player.yaw, player.pitch)
                .holding(player.main_hand.clone());
        }
    }
    println!("  bridge length: {placed} blocks ({} in world)", world.block_count());
}

fn vertical(engine: &mut ReacharoundEngine, config: &ReacharoundConfig) {
    let mut world = VoxelWorld::new();
    world.set_block(IVec3::new(0, 64, 0), BlockState::Solid);
    world.set_block(IVec3::new(0, 62, 1), BlockState::Solid);

    let player = PlayerPose::new(DVec3::new(0.5, 65.0, 0.95), 0.0, 85.0)
        .holding(ItemStack::block(BlockKind::Solid, 1));
    step(engine, &mut world, &player, config, 0);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ReacharoundConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => ReacharoundConfig {
            vertical_reacharound: true,
            horizontal_reacharound: true,
            outline_color_hex: "#33CCFF".to_string(),
            ..Default::default()
        },
    };

    let mut engine = ReacharoundEngine::new(config.features());
    if !engine.is_available() {
        println!("Reach-around is disabled by the configuration.");
        return;
    }

    println!("[Bridge] full blocks");
    bridge(&mut engine, &config, false);
    println!("[Bridge] bottom slabs");
    bridge(&mut engine, &config, true);
    println!("[Vertical] ledge");
    vertical(&mut engine, &config);
}
