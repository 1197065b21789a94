use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub trait Splittable {
    fn split_equal<const N: usize>(area: Rect, direction: Direction) -> [Rect; N];
}

impl Splittable for Layout {
    fn split_equal<const N: usize>(area: Rect, direction: Direction) -> [Rect; N] {
        let n = N as u32;
        match direction {
            Direction::Horizontal => {
                Self::horizontal(Constraint::from_ratios([(1, n); N])).areas(area)
            }
            Direction::Vertical => Self::vertical(Constraint::from_ratios([(1, n); N])).areas(area),
        }
    }
}

/// Horizontally centers a column no wider than `max_width`.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(max_width)])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// The rectangle of `width` x `height` in the middle of `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    centered_column(row, width)
}
