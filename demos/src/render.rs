//! Terminal rendering of boards and traversal playback.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathway_core::{Board, CellKind, Point};
use pathway_paths::{Cue, Step, Traversal, path_cost};

/// How a single board cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Floor,
    Wall,
    Weighted,
    Start,
    End,
    Visited,
    Path,
}

impl Glyph {
    /// Glyph of `p` on the static board.
    pub fn of(board: &Board, p: Point) -> Glyph {
        if board.is_start(p) {
            return Glyph::Start;
        }
        if board.is_end(p) {
            return Glyph::End;
        }
        match board.at(p).map(|c| c.kind()) {
            Some(CellKind::Wall) => Glyph::Wall,
            Some(CellKind::Weighted) => Glyph::Weighted,
            _ => Glyph::Floor,
        }
    }

    pub fn ch(self) -> char {
        match self {
            Glyph::Floor => '.',
            Glyph::Wall => '#',
            Glyph::Weighted => '~',
            Glyph::Start => 'S',
            Glyph::End => 'E',
            Glyph::Visited => 'o',
            Glyph::Path => '*',
        }
    }

    fn colors(self) -> (Color, Color) {
        match self {
            Glyph::Floor => (Color::DarkGrey, Color::Reset),
            Glyph::Wall => (Color::Black, Color::Grey),
            Glyph::Weighted => (Color::DarkYellow, Color::Reset),
            Glyph::Start => (Color::Black, Color::Green),
            Glyph::End => (Color::Black, Color::Red),
            Glyph::Visited => (Color::Cyan, Color::Reset),
            Glyph::Path => (Color::Black, Color::Yellow),
        }
    }
}

/// Glyph a step paints, or `None` for the endpoints, which keep their own.
fn step_glyph(board: &Board, step: Step) -> Option<Glyph> {
    let p = step.pos();
    if board.is_start(p) || board.is_end(p) {
        return None;
    }
    Some(match step {
        Step::Visit(_) => Glyph::Visited,
        Step::Path(_) => Glyph::Path,
    })
}

/// Plain-text rendering of the board after `traversal` finished: visited
/// cells marked `o` and the path marked `*`.
pub fn render_final(board: &Board, traversal: &Traversal) -> String {
    let grid = board.grid();
    let mut glyphs: Vec<Glyph> = grid.iter().map(|(p, _)| Glyph::of(board, p)).collect();
    for step in traversal.events() {
        if let (Some(g), Some(i)) = (step_glyph(board, step), grid.bounds().index(step.pos())) {
            glyphs[i] = g;
        }
    }
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for (i, g) in glyphs.iter().enumerate() {
        if i > 0 && i % grid.cols() as usize == 0 {
            out.push('\n');
        }
        out.push(g.ch());
    }
    out
}

/// One-line outcome of a run.
pub fn summary(board: &Board, traversal: &Traversal) -> String {
    match traversal.path() {
        Some(path) => format!(
            "{}: visited {} cells, path of {} cells costing {}",
            traversal.algorithm(),
            traversal.visited().len(),
            path.len(),
            path_cost(board.grid(), &path)
        ),
        None => format!(
            "{}: visited {} cells, end is unreachable",
            traversal.algorithm(),
            traversal.visited().len()
        ),
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// Raw-mode alternate-screen terminal. Restored on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    fn paint(&mut self, p: Point, glyph: Glyph) -> io::Result<()> {
        let (fg, bg) = glyph.colors();
        queue!(
            self.out,
            cursor::MoveTo(term_coord(p.col()), term_coord(p.row())),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(glyph.ch()),
            ResetColor
        )
    }

    pub fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        for (p, _) in board.grid().iter() {
            self.paint(p, Glyph::of(board, p))?;
        }
        self.out.flush()
    }

    /// Paint `cues` at their scheduled offsets. Returns `false` if the user
    /// pressed `q` or Esc before the end.
    pub fn play(&mut self, board: &Board, cues: impl Iterator<Item = Cue>) -> io::Result<bool> {
        let t0 = Instant::now();
        for cue in cues {
            let wait = cue.at.saturating_sub(t0.elapsed());
            if event::poll(wait)? && quit_requested()? {
                return Ok(false);
            }
            let remaining = cue.at.saturating_sub(t0.elapsed());
            if !remaining.is_zero() {
                std::thread::sleep(remaining);
            }
            if let Some(glyph) = step_glyph(board, cue.step) {
                self.paint(cue.step.pos(), glyph)?;
                self.out.flush()?;
            }
        }
        Ok(true)
    }

    /// Print `text` below the board and wait for a key press.
    pub fn finish(&mut self, board: &Board, text: &str) -> io::Result<()> {
        execute!(
            self.out,
            cursor::MoveTo(0, term_coord(board.grid().rows()).saturating_add(1)),
            Print(text),
            cursor::MoveToNextLine(1),
            Print("press any key to exit")
        )?;
        loop {
            if event::poll(Duration::from_millis(250))?
                && matches!(event::read()?, Event::Key(_))
            {
                return Ok(());
            }
        }
    }
}

/// Terminal coordinate for a board row or column, clamped to what a
/// terminal can address.
fn term_coord(v: i32) -> u16 {
    u16::try_from(v.max(0)).unwrap_or(u16::MAX)
}

fn quit_requested() -> io::Result<bool> {
    Ok(matches!(
        event::read()?,
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        })
    ))
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
