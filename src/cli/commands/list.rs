use crate::cli::commands::common::{View, load_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{person_options, productivity_options};
use crate::core::normalize::WorkTable;
use crate::db::shared;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::ui::messages::{header, info, warning};
use crate::utils::mins2readable;
use crate::utils::table::{Align, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, sort } = cmd {
        let store = shared::open(&cfg.store_uri)?;

        header("📋 Registered Entries");

        let table = match load_view(&store) {
            View::NoData => {
                info("No data to display. Add your first entry with `rworklogger add`.");
                return Ok(());
            }
            View::Table(t) => t,
        };

        let mut view = filter.to_filter()?.apply(&table);

        if view.is_empty() {
            info("No data after filtering.");
            print_filter_options(&table);
            return Ok(());
        }

        if *sort {
            view.sort_by_date_desc();
        }

        match render_entries(&view) {
            Some(rendered) => println!("{}", rendered),
            None => {
                warning("No appropriate columns to display.");
                return Ok(());
            }
        }

        let total = view.total_minutes();
        println!(
            "\n{} entries | total {} ({} min)",
            view.len(),
            mins2readable(total, false),
            total
        );
    }
    Ok(())
}

/// Table of the displayable columns (date shown as `date_str`).
/// `None` when the documents carry none of them.
pub fn render_entries(view: &WorkTable) -> Option<String> {
    let fields: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| view.has_column(*f))
        .collect();

    if fields.is_empty() {
        return None;
    }

    let mut table = Table::new(
        fields
            .iter()
            .map(|f| {
                let (label, align) = match f {
                    Field::Date => ("date_str", Align::Left),
                    Field::Time => ("time", Align::Right),
                    other => (other.canonical(), Align::Left),
                };
                Column::new(label, align)
            })
            .collect(),
    );

    for row in &view.rows {
        table.add_row(
            fields
                .iter()
                .map(|f| row.text(*f).unwrap_or_else(|| "-".to_string()))
                .collect(),
        );
    }

    Some(table.render())
}

fn print_filter_options(table: &WorkTable) {
    let persons = person_options(table);
    let productivity = productivity_options(table);

    if !persons.is_empty() {
        println!("Persons: {}", persons.join(", "));
    }
    if !productivity.is_empty() {
        println!("Productivity: {}", productivity.join(", "));
    }
}
