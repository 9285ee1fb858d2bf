//! Range charts for the preflop tables.
//!
//! Renders each (format, position) table as a 13x13 grid for the terminal,
//! JSON and HTML.

use colored::Colorize;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::action::Action;
use super::preflop::{preflop_strategy, Position, TableFormat};
use crate::cards::card::RANK_CHARS;
use crate::cards::{Hand, NUM_HANDS};
use crate::error::Result;

/// Total number of two-card combinations.
const TOTAL_COMBOS: f64 = 1326.0;

/// Strategy for a single hand class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandStrategy {
    pub hand: String,
    pub fold: f64,
    pub call: f64,
    pub raise: f64,
}

impl HandStrategy {
    fn of(hand: &Hand, format: TableFormat, position: Position) -> Self {
        let dist = preflop_strategy(hand, position, representative_players(format));
        Self {
            hand: hand.label(),
            fold: dist.get(Action::Fold),
            call: dist.get(Action::Call),
            raise: dist.get(Action::Raise),
        }
    }

    /// Frequency of continuing (call or raise).
    pub fn play(&self) -> f64 {
        self.call + self.raise
    }
}

/// Player count that selects a table format.
fn representative_players(format: TableFormat) -> u8 {
    match format {
        TableFormat::SixMax => 6,
        TableFormat::NineMax => 9,
    }
}

/// One preflop table laid out as a 13x13 grid.
///
/// Pairs run down the diagonal, suited hands sit above it and offsuit hands
/// below it, aces in the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeChart {
    pub format: TableFormat,
    pub position: Position,
    pub display_name: String,
    /// Strategies indexed by hand label (e.g., "AA", "AKs").
    pub hands: FxHashMap<String, HandStrategy>,
    pub grid: Vec<Vec<HandStrategy>>,
}

impl RangeChart {
    pub fn new(format: TableFormat, position: Position) -> Self {
        let mut hands = FxHashMap::default();
        let mut grid = vec![vec![HandStrategy::default(); 13]; 13];

        for hand in Hand::all() {
            let (row, col) = hand.grid_position();
            let strat = HandStrategy::of(&hand, format, position);
            hands.insert(strat.hand.clone(), strat.clone());
            grid[row][col] = strat;
        }
        debug_assert_eq!(hands.len(), NUM_HANDS);

        Self {
            format,
            position,
            display_name: format!("{} {}", format, position),
            hands,
            grid,
        }
    }

    /// Combo-weighted frequency of an action over all 1326 starting hands.
    fn weighted(&self, freq: impl Fn(&HandStrategy) -> f64) -> f64 {
        let total: f64 = Hand::all()
            .filter_map(|h| self.hands.get(&h.label()).map(|s| freq(s) * h.num_combos() as f64))
            .sum();
        total / TOTAL_COMBOS
    }

    pub fn total_raise_freq(&self) -> f64 {
        self.weighted(|s| s.raise)
    }

    pub fn total_call_freq(&self) -> f64 {
        self.weighted(|s| s.call)
    }

    /// Print as a colored text grid showing the continue percentage.
    pub fn print_grid(&self) {
        let raise = self.total_raise_freq();
        let call = self.total_call_freq();
        println!("\n=== {} ===", self.display_name);
        println!(
            "Raise: {:.1}% | Call: {:.1}% | Fold: {:.1}%\n",
            raise * 100.0,
            call * 100.0,
            (1.0 - raise - call) * 100.0
        );

        print!("     ");
        for rank in RANK_CHARS.iter().rev() {
            print!("{:>5}", rank);
        }
        println!();

        for (row, rank) in RANK_CHARS.iter().rev().enumerate() {
            print!("{:>2}   ", rank);
            for col in 0..13 {
                let h = &self.grid[row][col];
                let pct = (h.play() * 100.0).round() as u32;
                let cell = format!("{:>4}", pct);
                if pct == 0 {
                    print!("{:>4} ", "-");
                } else if h.raise >= 0.8 {
                    print!("{} ", cell.black().on_green());
                } else if h.call >= 0.8 {
                    print!("{} ", cell.white().on_blue());
                } else {
                    print!("{} ", cell.black().on_yellow());
                }
            }
            println!();
        }
    }
}

/// Every chart plus export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartBook {
    pub metadata: ChartMetadata,
    pub charts: Vec<RangeChart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub title: String,
    pub timestamp: String,
}

impl ChartBook {
    pub fn new(title: &str) -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            metadata: ChartMetadata {
                title: title.to_string(),
                timestamp: secs.to_string(),
            },
            charts: Vec::new(),
        }
    }

    /// Charts for every table format and position.
    pub fn all(title: &str) -> Self {
        let mut book = Self::new(title);
        for format in TableFormat::ALL {
            for position in Position::ALL {
                book.add_chart(RangeChart::new(format, position));
            }
        }
        book
    }

    pub fn add_chart(&mut self, chart: RangeChart) {
        self.charts.push(chart);
    }

    pub fn get(&self, format: TableFormat, position: Position) -> Option<&RangeChart> {
        self.charts
            .iter()
            .find(|c| c.format == format && c.position == position)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn save_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(generate_html(self).as_bytes())?;
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("  {}", self.metadata.title);
        println!("========================================\n");

        for chart in &self.charts {
            chart.print_grid();
            println!();
        }
    }
}

/// Generate an HTML page with one grid per chart.
pub fn generate_html(book: &ChartBook) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Preflop Charts</title>
    <style>
        body { font-family: 'Segoe UI', Arial, sans-serif; background: #1a1a2e; color: #eee; padding: 20px; }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { text-align: center; color: #fff; }
        .metadata { text-align: center; color: #888; margin-bottom: 20px; }
        .chart { margin-bottom: 40px; background: #252540; padding: 20px; border-radius: 10px; }
        .chart h2 { margin: 0 0 15px 0; color: #fff; }
        .legend { display: flex; gap: 20px; margin-bottom: 15px; }
        .legend-item { display: flex; align-items: center; gap: 8px; }
        .legend-color { width: 20px; height: 20px; border-radius: 4px; }
        .grid { display: grid; grid-template-columns: repeat(13, 1fr); gap: 2px; }
        .cell { aspect-ratio: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; border-radius: 4px; font-size: 11px; font-weight: bold; }
        .cell .hand { font-size: 13px; }
        .cell .pct { font-size: 10px; opacity: 0.9; }
        .raise { color: white; }
        .call { color: white; }
        .fold { background: #444; color: #888; }
        .mixed { color: white; }
    </style>
</head>
<body>
<div class="container">
    <h1>Preflop Charts</h1>
    <div class="metadata">
"#,
    );

    html.push_str(&format!("{} | {} charts", book.metadata.title, book.charts.len()));
    html.push_str("</div>\n");

    for chart in &book.charts {
        html.push_str(&format!(
            r#"
    <div class="chart">
        <h2>{} (raise {:.1}%, call {:.1}%)</h2>
        <div class="legend">
            <div class="legend-item"><div class="legend-color" style="background: #2ecc71;"></div>Raise</div>
            <div class="legend-item"><div class="legend-color" style="background: #3498db;"></div>Call</div>
            <div class="legend-item"><div class="legend-color" style="background: #444;"></div>Fold</div>
        </div>
        <div class="grid">
"#,
            chart.display_name,
            chart.total_raise_freq() * 100.0,
            chart.total_call_freq() * 100.0
        ));

        for row in &chart.grid {
            for h in row {
                html.push_str(&html_cell(h));
            }
        }

        html.push_str("        </div>\n    </div>\n");
    }

    html.push_str("</div>\n</body>\n</html>");
    html
}

fn html_cell(h: &HandStrategy) -> String {
    let raise_pct = (h.raise * 100.0).round() as u32;
    let call_pct = (h.call * 100.0).round() as u32;

    let (class, style) = if raise_pct >= 80 {
        ("raise", format!("background: rgba(46, 204, 113, {:.2});", h.raise))
    } else if call_pct >= 80 {
        ("call", format!("background: rgba(52, 152, 219, {:.2});", h.call))
    } else if raise_pct + call_pct == 0 {
        ("fold", String::new())
    } else {
        let r = (h.raise * 255.0) as u32;
        let g = (h.call * 255.0) as u32;
        ("mixed", format!("background: rgb({}, {}, 100);", 46 + r / 2, 100 + g / 2))
    };

    let label = match (raise_pct, call_pct) {
        (0, 0) => String::from("-"),
        (r, 0) => format!("{}%", r),
        (0, c) => format!("{}%", c),
        (r, c) => format!("{}%/{}%", r, c),
    };

    format!(
        "            <div class=\"cell {}\" style=\"{}\"><span class=\"hand\">{}</span><span class=\"pct\">{}</span></div>\n",
        class, style, h.hand, label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_grid_layout() {
        let chart = RangeChart::new(TableFormat::SixMax, Position::BTN);
        assert_eq!(chart.hands.len(), NUM_HANDS);
        assert_eq!(chart.grid[0][0].hand, "AA");
        assert_eq!(chart.grid[0][1].hand, "AKs");
        assert_eq!(chart.grid[1][0].hand, "AKo");
        assert_eq!(chart.grid[12][12].hand, "22");
        assert_eq!(chart.grid[0][0].raise, 1.0);
    }

    #[test]
    fn test_chart_frequencies() {
        let utg = RangeChart::new(TableFormat::SixMax, Position::UTG);
        let btn = RangeChart::new(TableFormat::SixMax, Position::BTN);
        assert!(btn.total_raise_freq() > utg.total_raise_freq());

        let seven_deuce = &utg.hands["72o"];
        assert_eq!(seven_deuce.fold, 1.0);
        assert_eq!(seven_deuce.play(), 0.0);

        for chart in [&utg, &btn] {
            let fold = chart.weighted(|s| s.fold);
            let total = fold + chart.total_call_freq() + chart.total_raise_freq();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_book_and_html() {
        let book = ChartBook::all("test");
        assert_eq!(book.charts.len(), 10);
        assert!(book.get(TableFormat::NineMax, Position::SB).is_some());

        let html = generate_html(&book);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("9max BB"));
        assert_eq!(html.matches("class=\"cell ").count(), 10 * NUM_HANDS);
    }

    #[test]
    fn test_json_export() {
        let book = ChartBook::all("export");
        let json = serde_json::to_string(&book).unwrap();
        let back: ChartBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back.charts.len(), book.charts.len());
        assert_eq!(back.charts[3].hands["AA"], book.charts[3].hands["AA"]);
    }
}
