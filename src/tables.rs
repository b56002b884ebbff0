use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{report::ReportRow, statistics::RegionStatistics};

const UNAVAILABLE: &str = "unavailable";

pub fn build_price_table(rows: &[ReportRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "Region",
        "Number of AZs",
        "Min Price",
        "Max Price",
        "Mean Price",
        "Price Variance",
    ]);
    for row in rows {
        match &row.statistics {
            RegionStatistics::Available { n_zones, min, max, mean, variance } => {
                table.add_row(vec![
                    Cell::new(row.region).fg(Color::Cyan),
                    Cell::new(n_zones).set_alignment(CellAlignment::Center).fg(Color::Cyan),
                    Cell::new(price_cell(min.0))
                        .set_alignment(CellAlignment::Center)
                        .fg(Color::Green),
                    Cell::new(price_cell(max.0))
                        .set_alignment(CellAlignment::Center)
                        .fg(Color::Red),
                    Cell::new(price_cell(mean.0)).set_alignment(CellAlignment::Center),
                    Cell::new(price_cell(*variance)).set_alignment(CellAlignment::Center),
                ]);
            }
            RegionStatistics::Unavailable => {
                let mut cells = vec![Cell::new(row.region).fg(Color::Cyan)];
                cells.extend((0..5).map(|_| {
                    Cell::new(UNAVAILABLE)
                        .set_alignment(CellAlignment::Center)
                        .add_attribute(Attribute::Dim)
                }));
                table.add_row(cells);
            }
        }
    }
    table
}

/// Render a numeric cell at 3 decimals. `{:.3}` rounds half to even.
fn price_cell(value: f64) -> String {
    format!("{value:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_cell_rounds_half_to_even() {
        // 0.0625 and 0.1875 are exact in binary, so the ties are real.
        assert_eq!(price_cell(0.0625), "0.062");
        assert_eq!(price_cell(0.1875), "0.188");
    }

    #[test]
    fn test_price_cell_rounds_to_nearest() {
        assert_eq!(price_cell(0.004_166_666), "0.004");
        assert_eq!(price_cell(1e-8), "0.000");
    }
}
