//! `pathway` — run a grid search and animate it in the terminal.

mod render;

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use pathway_core::{Board, BoardConfig};
use pathway_paths::{Algorithm, Playback};

use render::{Terminal, render_final, summary};

#[derive(Debug, Parser)]
#[command(name = "pathway", about = "Visualize Dijkstra, BFS and DFS on a grid")]
struct Cli {
    /// Search to run: dijkstra, bfs or dfs.
    #[arg(short, long, default_value_t = Algorithm::Dijkstra)]
    algorithm: Algorithm,

    /// Board layout file (`.` floor, `#` wall, `~` weighted, `S` start, `E` end).
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// JSON board configuration; ignored for dimensions when a layout is given.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between visited cells.
    #[arg(long, default_value_t = 10)]
    visit_delay_ms: u64,

    /// Milliseconds between path cells.
    #[arg(long, default_value_t = 50)]
    path_delay_ms: u64,

    /// Print the final board instead of animating it.
    #[arg(long)]
    no_animate: bool,
}

fn load_board(cli: &Cli) -> Result<Board, Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => serde_json::from_str::<BoardConfig>(&fs::read_to_string(path)?)?,
        None => BoardConfig::default(),
    };
    let board = match &cli.layout {
        Some(path) => Board::from_layout_weighted(&fs::read_to_string(path)?, config.weighted_cost)?,
        None => Board::new(config)?,
    };
    Ok(board)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let board = load_board(&cli)?;
    let traversal = cli.algorithm.run(&board.snapshot())?;
    let line = summary(&board, &traversal);
    log::info!("{line}");

    if cli.no_animate {
        println!("{}", render_final(&board, &traversal));
        println!("{line}");
        return Ok(());
    }

    let playback = Playback::new(
        Duration::from_millis(cli.visit_delay_ms),
        Duration::from_millis(cli.path_delay_ms),
    );
    let mut term = Terminal::init()?;
    term.draw_board(&board)?;
    if term.play(&board, playback.timeline(traversal.events()))? {
        term.finish(&board, &line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use pathway_core::{Cell, Point};
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pathway").chain(args.iter().copied())).unwrap()
    }

    const CONFIG: &str = r#"{
        "rows": 4,
        "cols": 6,
        "start": {"x": 0, "y": 0},
        "end": {"x": 5, "y": 3},
        "weighted_cost": 9
    }"#;

    #[test]
    fn layout_wins_but_keeps_config_weight() {
        let layout = file_with("S~E\n...\n");
        let config = file_with(CONFIG);
        let args = cli(&[
            "--layout",
            layout.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ]);
        let board = load_board(&args).unwrap();
        assert_eq!((board.grid().rows(), board.grid().cols()), (2, 3));
        assert_eq!(board.start(), Point::at(0, 0));
        assert_eq!(board.end(), Point::at(0, 2));
        assert_eq!(board.at(Point::at(0, 1)), Some(Cell::weighted(9)));
        assert_eq!(board.weighted_cost(), 9);
    }

    #[test]
    fn config_alone_sizes_the_board() {
        let config = file_with(CONFIG);
        let args = cli(&["--config", config.path().to_str().unwrap()]);
        let board = load_board(&args).unwrap();
        assert_eq!((board.grid().rows(), board.grid().cols()), (4, 6));
        assert_eq!(board.end(), Point::at(3, 5));
        assert_eq!(board.grid().count(Cell::is_wall), 0);
    }

    #[test]
    fn defaults_without_files() {
        let args = cli(&["--algorithm", "bfs", "--no-animate"]);
        assert_eq!(args.algorithm, Algorithm::Bfs);
        let board = load_board(&args).unwrap();
        assert_eq!(board.config(), &BoardConfig::default());
    }
}
