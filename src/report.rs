use crate::table::FrequencyTable;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Serial,
    Parallel,
}

/// Final simulation results, rendered as the classic console table:
/// absolute and relative frequency per category, then totals.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub table: FrequencyTable,
    pub hands: u64,
    pub elapsed: Duration,
    pub workers: usize,
    pub mode: RunMode,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self.mode {
            RunMode::Serial => "Serial",
            RunMode::Parallel => "Parallel",
        };
        writeln!(f, "{:^72}", format!("Poker Hand Frequency Simulation [{variant} Version]"))?;
        writeln!(f, "{}", "=".repeat(72))?;
        writeln!(f, "  {:<18}{:>16}{:>30}", "Hand Type", "Frequency", "Relative Frequency (%)")?;
        writeln!(f, "{}", "-".repeat(72))?;
        for (category, count) in self.table.iter() {
            let relative = if self.hands == 0 {
                0.0
            } else {
                100.0 * count as f64 / self.hands as f64
            };
            writeln!(f, "  {:<18}{:>16}{:>30.6}", category.name(), count, relative)?;
        }
        writeln!(f, "{}", "-".repeat(72))?;
        writeln!(f, "    Hands Generated: {}", self.hands)?;
        writeln!(f, "   Elapsed Time (s): {:.3}", self.elapsed.as_secs_f64())?;
        writeln!(f, "    # of Workers: {}", self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Category;

    #[test]
    fn report_lists_every_category_once() {
        let mut table = FrequencyTable::new();
        for &category in Category::ALL.iter() {
            table.record(category);
        }
        let hands = table.total();
        let report = SimReport {
            table,
            hands,
            elapsed: Duration::from_millis(1500),
            workers: 4,
            mode: RunMode::Parallel,
        };
        let text = report.to_string();
        for category in Category::ALL {
            assert!(text.contains(category.name()), "{category}");
        }
        assert!(text.contains("[Parallel Version]"));
        assert!(text.contains("Hands Generated: 10"));
        assert!(text.contains("Elapsed Time (s): 1.500"));
    }

    #[test]
    fn serial_header_differs() {
        let report = SimReport {
            table: FrequencyTable::new(),
            hands: 0,
            elapsed: Duration::ZERO,
            workers: 1,
            mode: RunMode::Serial,
        };
        assert!(report.to_string().contains("[Serial Version]"));
    }
}
