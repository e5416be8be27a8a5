use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clusterfall::core::physics::PhysicsWorld;
use clusterfall::core::{find_group, BoardController, NullObserver, PieceRegistry};
use clusterfall::engine::SandboxWorld;
use clusterfall::types::{Piece, PieceColor, PieceId, Shape, Vec3, PIECE_RADIUS};

/// Dense 8x8 grid of same-kind pieces: the worst case for one flood fill.
fn dense_cluster() -> (PieceRegistry, SandboxWorld) {
    let mut world = SandboxWorld::new();
    let mut registry = PieceRegistry::new();
    let mut id = 0;
    for gx in 0..8 {
        for gz in 0..8 {
            id += 1;
            let piece = Piece::new(PieceId(id), Shape::Cube, PieceColor::Red);
            let pos = Vec3::new(gx as f32 - 3.5, PIECE_RADIUS, gz as f32 - 3.5);
            world.spawn_body(piece, pos);
            registry.register(piece);
        }
    }
    (registry, world)
}

/// Board full of pieces with no qualifying group: alternating colors keep
/// every component below the match threshold, so a tick is pure scan cost.
fn scan_only_board() -> (BoardController, SandboxWorld) {
    let mut board = BoardController::new(12345);
    let mut world = SandboxWorld::new();
    board.initialize(&mut world, &mut NullObserver);

    let mut id = 0;
    for gx in 0..8 {
        for gz in 0..8 {
            id += 1;
            let color = PieceColor::ALL[(gx + gz) % PieceColor::COUNT];
            let piece = Piece::new(PieceId(1000 + id), Shape::Sphere, color);
            let pos = Vec3::new(gx as f32 - 3.5, PIECE_RADIUS, gz as f32 - 3.5);
            world.spawn_body(piece, pos);
        }
    }
    world.step(0.0);
    let mut events = Vec::new();
    world.drain_volume_events(&mut events);
    for event in events {
        board.handle_volume_event(event, &mut world, &mut NullObserver);
    }
    (board, world)
}

fn bench_find_group(c: &mut Criterion) {
    let (registry, world) = dense_cluster();
    let seed = registry.get(PieceId(1)).unwrap();

    c.bench_function("find_group_64_piece_cluster", |b| {
        b.iter(|| find_group(black_box(seed), &registry, &world))
    });
}

fn bench_board_tick(c: &mut Criterion) {
    let (mut board, mut world) = scan_only_board();

    c.bench_function("board_tick_full_scan", |b| {
        b.iter(|| {
            // Zero dt: the clock never expires mid-bench, and the scan runs
            // against the same 64-piece board every iteration.
            board.tick(black_box(0.0), &mut world, &mut NullObserver);
        })
    });
}

fn bench_world_step(c: &mut Criterion) {
    let (_registry, mut world) = dense_cluster();

    c.bench_function("world_step_64_bodies", |b| {
        b.iter(|| {
            world.step(black_box(0.016));
        })
    });
}

fn bench_overlap_query(c: &mut Criterion) {
    let (_registry, world) = dense_cluster();

    c.bench_function("overlap_query", |b| {
        b.iter(|| {
            use clusterfall::core::PhysicsQuery;
            world.overlap(black_box(Vec3::new(0.0, PIECE_RADIUS, 0.0)), 1.1)
        })
    });
}

criterion_group!(
    benches,
    bench_find_group,
    bench_board_tick,
    bench_world_step,
    bench_overlap_query
);
criterion_main!(benches);
