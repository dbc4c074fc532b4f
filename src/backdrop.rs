use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

const STAR_SYMBOLS: [&str; 4] = ["·", "✦", "*", "."];

/// Dim starfield drawn behind the screen content, standing in for the
/// background image of a sleep app. Seeded once per mount so the sky does
/// not reshuffle on every redraw.
#[derive(Debug)]
pub struct Backdrop {
    seed: u64,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            seed: rand::random(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        // roughly one star per 24 cells
        let count = (area.area() / 24).max(1);

        for _ in 0..count {
            let x = area.x + rng.gen_range(0..area.width);
            let y = area.y + rng.gen_range(0..area.height);
            let symbol = STAR_SYMBOLS[rng.gen_range(0..STAR_SYMBOLS.len())];

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
            }
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_cells(backdrop: &Backdrop, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        backdrop.render(area, &mut buf);
        buf.content
            .iter()
            .map(|c| c.symbol().to_string())
            .collect()
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let area = Rect::new(0, 0, 40, 12);
        let a = rendered_cells(&Backdrop::with_seed(7), area);
        let b = rendered_cells(&Backdrop::with_seed(7), area);
        assert_eq!(a, b);
    }

    #[test]
    fn test_draws_at_least_one_star() {
        let area = Rect::new(0, 0, 40, 12);
        let cells = rendered_cells(&Backdrop::with_seed(42), area);
        let stars = cells.iter().filter(|s| s.as_str() != " ").count();
        assert!(stars > 0);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        Backdrop::with_seed(1).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert!(buf.content.iter().all(|c| c.symbol() == " "));
    }
}
