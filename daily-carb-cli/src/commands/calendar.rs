use chrono::Local;
use clap::Args;

use daily_carb_core::{CalendarCell, CarbStore, MonthCalendar, StorageBackend, TargetStatus};

use super::day::status_marker;

#[derive(Args)]
pub struct CalendarCommand {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(long, short)]
    pub month: Option<String>,

    /// Show the month before
    #[arg(long, conflicts_with = "next")]
    pub previous: bool,

    /// Show the month after
    #[arg(long)]
    pub next: bool,
}

impl CalendarCommand {
    pub fn run<B: StorageBackend>(
        &self,
        store: &CarbStore<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let calendar = self.select_month(MonthCalendar::containing(Local::now().date_naive()))?;

        let data = store.get_all_data();
        let statuses = calendar.statuses(&data);

        println!("{:^28}", calendar.title());
        println!(" Sun Mon Tue Wed Thu Fri Sat");

        let mut lines = Vec::new();
        let mut line = String::new();
        for cell in calendar.cells() {
            match cell {
                CalendarCell::Blank => line.push_str("    "),
                CalendarCell::Day { day, date } => {
                    let status = statuses
                        .iter()
                        .find(|(d, _)| *d == date)
                        .map(|(_, s)| *s)
                        .unwrap_or(TargetStatus::NoData);
                    line.push_str(&format!(" {:>2}{}", day, status_marker(status)));
                }
            }
            if line.len() == 28 {
                lines.push(std::mem::take(&mut line));
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        for l in lines {
            println!("{}", l.trim_end());
        }

        println!();
        println!("  = within target   - below target   + over target");
        Ok(())
    }

    /// `--month` (or `current`), then stepped by `--previous`/`--next`.
    fn select_month(&self, current: MonthCalendar) -> Result<MonthCalendar, String> {
        let base = match &self.month {
            Some(m) => parse_month(m)?,
            None => current,
        };

        let stepped = if self.previous {
            base.previous()
        } else if self.next {
            base.next()
        } else {
            Some(base)
        };
        stepped.ok_or_else(|| "Month is out of range".to_string())
    }
}

/// Parses `YYYY-MM`.
fn parse_month(month: &str) -> Result<MonthCalendar, String> {
    let invalid = || format!("Invalid month '{}'. Use YYYY-MM.", month);

    let (year, month_num) = month.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;

    MonthCalendar::new(year, month_num).ok_or_else(invalid)
}
