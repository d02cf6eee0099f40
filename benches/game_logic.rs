use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{outcome, Board, GameState};

fn near_draw_board() -> Board {
    // X at 0,2,3,7 and O at 1,4,5,6 - one move from a draw.
    let mut game = GameState::new();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6] {
        game.apply_move(pos);
    }
    *game.board()
}

fn bench_outcome_scan(c: &mut Criterion) {
    let board = near_draw_board();

    c.bench_function("outcome_scan", |b| {
        b.iter(|| outcome(black_box(&board)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_full_draw_game", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
                game.apply_move(black_box(pos));
            }
            game.outcome()
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut game = GameState::new();
    game.apply_move(4);
    game.apply_move(0);

    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(&game).legal_moves())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameState::new();
    game.apply_move(4);
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_outcome_scan,
    bench_full_game,
    bench_legal_moves,
    bench_snapshot
);
criterion_main!(benches);
