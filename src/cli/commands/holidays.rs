use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::holiday::seed_holidays;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Holidays { year } = cmd {
        let year = year.unwrap_or_else(|| date::today().year());

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("DAY", 9),
            Column::new("HOLIDAY", 24),
        ]);
        for h in seed_holidays(year) {
            table.add_row(vec![
                h.date.to_string(),
                h.date.format("%A").to_string(),
                h.title,
            ]);
        }

        println!("Holidays {}\n", year);
        print!("{}", table.render());
    }
    Ok(())
}
