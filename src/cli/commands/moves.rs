//! Moves command - List the legal moves of a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    game::{Board, Side},
};

#[derive(Parser, Debug)]
#[command(about = "List legal moves for a side")]
pub struct MovesArgs {
    /// Board as 9 row-major cells, e.g. "AAA...BBB" ('/' and spaces are ignored)
    #[arg(long, short = 'b', default_value = "AAA...BBB")]
    pub board: Board,

    /// Side to move (a or b)
    #[arg(long, short = 's', default_value = "a")]
    pub side: Side,
}

pub fn execute(args: MovesArgs) -> Result<()> {
    let board = args.board;
    let moves = board.legal_moves(args.side);

    print_section(&format!("Legal moves for {}", args.side));
    print!("{}", render_board(&board));
    println!();

    if moves.is_empty() {
        println!("{} is blocked: no legal moves", args.side);
    } else {
        for mv in &moves {
            let kind = if mv.is_diagonal() { "diagonal" } else { "straight" };
            println!("  {mv:<10} {kind}");
        }
    }

    println!();
    print_kv("Moves", &moves.len().to_string());
    let holders: Vec<String> = Side::both()
        .into_iter()
        .filter(|&side| board.is_winning(side))
        .map(|side| side.to_string())
        .collect();
    print_kv(
        "Line held by",
        &if holders.is_empty() {
            "none".to_string()
        } else {
            holders.join(", ")
        },
    );
    print_kv(
        "Session winner",
        &board
            .start_row_guarded_winner()
            .map_or_else(|| "none".to_string(), |side| side.to_string()),
    );
    Ok(())
}
