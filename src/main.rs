//! Demo harness: runs the search over a small scripted position and reports
//! the chosen move and score.

use anyhow::{Context, Result};
use tracing::info;

use cerca_core::mock::{TreeBuilder, TreePosition};
use cerca_core::{Color, Move, PieceKind, Square};
use cerca_engine::{is_mate_score, select_best_move};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let depth = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u8>()
            .with_context(|| format!("invalid depth: {arg}"))?,
        None => 3,
    };

    info!(depth, "cerca starting");
    let mut pos = demo_position()?;

    match select_best_move(&mut pos, depth) {
        Some(result) => {
            info!(nodes = result.nodes, "search finished");
            println!(
                "bestmove {} ({})",
                result.best_move,
                format_score(result.score)
            );
        }
        None => println!("no move available"),
    }

    Ok(())
}

/// A middlegame-like scripted position: balanced material, with an
/// undefended black queen on d5 that White's d4 pawn can take, plus two
/// quiet alternatives.
fn demo_position() -> Result<TreePosition> {
    let mut builder = TreeBuilder::new();
    let root = builder.node(Color::White);
    builder.set_balanced_armies(root);

    let take_queen = Move::new(sq("d4")?, sq("d5")?, PieceKind::Pawn).with_capture(PieceKind::Queen);
    let after_capture = builder.node(Color::Black);
    builder.set_balanced_armies(after_capture);
    builder.set_count(after_capture, Color::Black, PieceKind::Queen, 0);
    builder.edge(root, take_queen, after_capture);

    for (from, to, piece) in [
        ("g1", "f3", PieceKind::Knight),
        ("a2", "a3", PieceKind::Pawn),
    ] {
        let child = builder.node(Color::Black);
        builder.set_balanced_armies(child);
        builder.edge(root, Move::new(sq(from)?, sq(to)?, piece), child);
    }

    builder.build(root).context("demo tree failed validation")
}

fn sq(name: &str) -> Result<Square> {
    Square::from_algebraic(name).with_context(|| format!("invalid square: {name}"))
}

fn format_score(score: i32) -> String {
    if is_mate_score(score) {
        let side = if score > 0 { "winning" } else { "losing" };
        format!("{side} mate")
    } else {
        format!("{:+.2}", f64::from(score) / 100.0)
    }
}
