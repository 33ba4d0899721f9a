use crate::Energy;

/// Terminal scatter plot of one series, x being the shuffle count.
pub struct Scatter<'a> {
    label: &'a str,
    points: Vec<(usize, Energy)>,
}

impl<'a> Scatter<'a> {
    const ROWS: usize = 12;
    const COLUMN: usize = 3;
    const MARGIN: usize = 10;

    pub fn new(label: &'a str, points: Vec<(usize, Energy)>) -> Self {
        Self { label, points }
    }

    fn bounds(&self) -> (Energy, Energy) {
        self.points
            .iter()
            .map(|(_, y)| *y)
            .fold((Energy::INFINITY, Energy::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            })
    }

    /// which row each point lands on, 0 at the bottom
    fn row(&self, y: Energy) -> usize {
        let (lo, hi) = self.bounds();
        match hi - lo {
            d if d > 0. => ((y - lo) / d * (Self::ROWS - 1) as Energy).round() as usize,
            _ => Self::ROWS / 2,
        }
    }
}

impl std::fmt::Display for Scatter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.label)?;
        if self.points.is_empty() {
            return writeln!(f, "(no data)");
        }
        let (lo, hi) = self.bounds();
        let rows = self.points.iter().map(|(_, y)| self.row(*y)).collect::<Vec<_>>();
        for r in (0..Self::ROWS).rev() {
            match r {
                r if r == Self::ROWS - 1 => write!(f, "{:>w$.4} ┤", hi, w = Self::MARGIN)?,
                0 => write!(f, "{:>w$.4} ┤", lo, w = Self::MARGIN)?,
                _ => write!(f, "{:>w$} │", "", w = Self::MARGIN)?,
            }
            for &row in rows.iter() {
                match row == r {
                    true => write!(f, "{:^w$}", "●", w = Self::COLUMN)?,
                    false => write!(f, "{:^w$}", "", w = Self::COLUMN)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{:>w$} └", "", w = Self::MARGIN)?;
        for _ in 0..self.points.len() * Self::COLUMN {
            write!(f, "─")?;
        }
        writeln!(f)?;
        write!(f, "{:>w$}  ", "", w = Self::MARGIN)?;
        for (x, _) in self.points.iter() {
            write!(f, "{:^w$}", x, w = Self::COLUMN)?;
        }
        writeln!(f)?;
        writeln!(f, "{:>w$}  Number of Shuffles", "", w = Self::MARGIN)
    }
}
