use super::presenter::status_glyph;
use super::schedule::ISO_DATE_FORMAT;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a table, one row per task in list order.
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();

        Ok(())
    }

    pub fn tasks_table(tasks: &[&Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "SCHEDULED", "TAGS", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![
                task.id().short(),
                task.title(),
                format!("{} {}", status_glyph(task.status()), task.status()),
                task.date_scheduled()
                    .map(|date| date.format(ISO_DATE_FORMAT).to_string())
                    .unwrap_or_else(|| "-".to_string()),
                task.tags.iter().cloned().collect::<Vec<_>>().join(", "),
                task.priority.as_deref().unwrap_or("-")
            ]);
        }

        table
    }
}
