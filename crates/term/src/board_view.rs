//! BoardView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Phase, Point, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const LIGHT: Rgb = Rgb::new(240, 217, 181);
const DARK: Rgb = Rgb::new(181, 136, 99);
const VISITED: Rgb = Rgb::new(100, 149, 237);
const CURRENT: Rgb = Rgb::new(255, 215, 0);
const PATH: Rgb = Rgb::new(50, 205, 50);
const GOAL: Rgb = Rgb::new(220, 20, 60);
const EDGE: Rgb = Rgb::new(50, 50, 50);
const INK: Rgb = Rgb::new(0, 0, 0);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Width reserved to the right of the board for the side panel.
const PANEL_W: u16 = 24;

/// Where the board sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub board_size: u8,
}

impl BoardLayout {
    pub fn frame_w(&self) -> u16 {
        (self.board_size as u16) * self.cell_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        (self.board_size as u16) * self.cell_h + 2
    }

    /// Top-left terminal cell of a board square.
    pub fn cell_origin(&self, p: Position) -> (u16, u16) {
        let col = p.col.max(0) as u16;
        let row = p.row.max(0) as u16;
        (
            self.x + 1 + col * self.cell_w,
            self.y + 1 + row * self.cell_h,
        )
    }

    /// Board square under a terminal cell, if any.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Position> {
        let col = x.checked_sub(self.x + 1)? / self.cell_w;
        let row = y.checked_sub(self.y + 1)? / self.cell_h;
        if col >= self.board_size as u16 || row >= self.board_size as u16 {
            return None;
        }
        Some(Position::new(col as i8, row as i8))
    }

    /// Terminal cell at the center of a continuous board coordinate.
    fn point_cell(&self, p: Point) -> (u16, u16) {
        let px = (p.x * self.cell_w as f32).max(0.0).round() as u16;
        let py = (p.y * self.cell_h as f32).max(0.0).round() as u16;
        (
            self.x + 1 + px + self.cell_w / 2,
            self.y + 1 + py + self.cell_h / 2,
        )
    }
}

/// A lightweight terminal renderer for the search visualizer.
pub struct BoardView {
    /// Board square width in terminal columns.
    cell_w: u16,
    /// Board square height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 4x2 keeps squares roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, board_size: u8, viewport: Viewport) -> BoardLayout {
        let mut layout = BoardLayout {
            x: 0,
            y: 0,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            board_size,
        };
        let total_w = layout.frame_w() + 2 + PANEL_W;
        layout.x = viewport.width.saturating_sub(total_w) / 2;
        layout.y = viewport.height.saturating_sub(layout.frame_h()) / 2;
        layout
    }

    /// Board square under a terminal cell (for mouse clicks).
    pub fn square_at(
        &self,
        board_size: u8,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Position> {
        self.layout(board_size, viewport).square_at(x, y)
    }

    pub fn render(
        &self,
        session: &Session,
        cursor: Option<Position>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, cursor, viewport, &mut fb);
        fb
    }

    /// Render the session into an existing framebuffer.
    pub fn render_into(
        &self,
        session: &Session,
        cursor: Option<Position>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let size = session.board_size();
        let layout = self.layout(size, viewport);
        let phase = session.phase();
        let piece = session.search_piece().unwrap_or(session.piece());

        self.draw_border(fb, &layout);

        // Squares.
        for row in 0..size as i8 {
            for col in 0..size as i8 {
                let p = Position::new(col, row);
                let bg = square_bg(session, p);
                self.fill_square(fb, &layout, p, ' ', CellStyle::new(INK, bg));
            }
        }

        // Discovery edges: each discovered square points back at its predecessor.
        for &(from, to) in session.edges() {
            if Some(to) == session.goal() {
                continue;
            }
            let style = CellStyle::new(EDGE, square_bg(session, to));
            self.put_center(fb, &layout, to, edge_arrow(to, from), style);
        }

        // Move numbers once the animation is over.
        if phase == Phase::Finished {
            for (i, &p) in session.path().squares().iter().enumerate().skip(1) {
                let label = format!("{}", i);
                let (x, y) = layout.cell_origin(p);
                let lx = x + (self.cell_w.saturating_sub(label.len() as u16)) / 2;
                fb.put_str(lx, y + self.cell_h / 2, &label, CellStyle::new(INK, PATH).bold());
            }
        }

        if let Some(goal) = session.goal() {
            let style = CellStyle::new(GOAL, square_bg(session, goal)).bold();
            self.put_center(fb, &layout, goal, '●', style);
        }

        if let Some(start) = session.start() {
            let mut style = CellStyle::new(INK, square_bg(session, start)).bold();
            if session.animated_position().is_some() {
                style = style.dim();
            }
            self.put_center(fb, &layout, start, piece.symbol(), style);
        }

        // Animated piece, drawn last so it hops over everything.
        if let Some(point) = session.animated_position() {
            let (x, y) = layout.point_cell(point);
            let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or(LIGHT);
            fb.put_char(x, y, piece.symbol(), CellStyle::new(GOAL, bg).bold());
        }

        if let Some(cursor) = cursor {
            let (x, y) = layout.cell_origin(cursor);
            let cy = y + self.cell_h / 2;
            let style = CellStyle::new(GOAL, square_bg(session, cursor)).bold();
            fb.put_char(x, cy, '[', style);
            fb.put_char(x + self.cell_w - 1, cy, ']', style);
        }

        self.draw_side_panel(fb, session, viewport, &layout);

        if phase == Phase::Exhausted {
            self.draw_overlay_text(fb, &layout, "NO PATH");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let (x, y, w, h) = (layout.x, layout.y, layout.frame_w(), layout.frame_h());

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn fill_square(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        p: Position,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = layout.cell_origin(p);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn put_center(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        p: Position,
        ch: char,
        style: CellStyle,
    ) {
        let (x, y) = layout.cell_origin(p);
        fb.put_char(x + self.cell_w / 2, y + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w()).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = layout.y;
        let mut row = |fb: &mut FrameBuffer, label: &str, value: &str| {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_str(panel_x + 9, y, value, VALUE);
            y = y.saturating_add(1);
        };

        let piece = session.piece();
        row(fb, "PIECE", &format!("{} ({})", piece.as_str(), piece.symbol()));
        if let Some(ran) = session.search_piece().filter(|&ran| ran != piece) {
            row(fb, "SHOWN", ran.as_str());
        }
        row(fb, "PHASE", session.phase().as_str());

        let squares = (session.board_size() as usize) * (session.board_size() as usize);
        row(fb, "VISITED", &format!("{}/{}", session.visited_count(), squares));
        row(fb, "EDGES", &format!("{}", session.edges().len()));
        let moves = if session.path().is_empty() {
            "-".to_string()
        } else {
            format!("{}", session.path().move_count())
        };
        row(fb, "MOVES", &moves);

        let help = [
            "",
            "click/enter  select",
            "arrows/hjkl  cursor",
            "space        search",
            "r            reset",
            "q            quit",
            "",
            "1 N  2 K  3 R  4 B  5 Q",
        ];
        let mut hy = y.saturating_add(1);
        for line in help {
            if hy >= viewport.height {
                break;
            }
            fb.put_str(panel_x, hy, line, VALUE.dim());
            hy = hy.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.y.saturating_add(layout.frame_h() / 2);
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w().saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), GOAL).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Background of a square, by decreasing priority: search head, final path,
/// visited, plain checkerboard.
fn square_bg(session: &Session, p: Position) -> Rgb {
    let phase = session.phase();
    if phase == Phase::Searching && session.current_node() == Some(p) {
        return CURRENT;
    }
    if phase == Phase::Finished && session.path().contains(p) {
        return PATH;
    }
    if session.is_visited(p) && Some(p) != session.start() && Some(p) != session.goal() {
        return VISITED;
    }
    if (p.col + p.row) % 2 == 0 {
        LIGHT
    } else {
        DARK
    }
}

/// Arrow from `at` towards `towards`, by the sign of each axis.
fn edge_arrow(at: Position, towards: Position) -> char {
    let dc = (towards.col - at.col).signum();
    let dr = (towards.row - at.row).signum();
    match (dc, dr) {
        (-1, 0) => '←',
        (1, 0) => '→',
        (0, -1) => '↑',
        (0, 1) => '↓',
        (-1, -1) => '↖',
        (1, -1) => '↗',
        (-1, 1) => '↙',
        (1, 1) => '↘',
        _ => '·',
    }
}
