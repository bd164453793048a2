//! Record listing for `typeahead records`.

use anyhow::Result;

use typeahead_core::models::Record;

use crate::config::Config;
use crate::data;

pub async fn list_records(config: &Config) -> Result<()> {
    let store = data::open_store(config)?;
    let records = store.list_all_records().await?;

    if records.is_empty() {
        println!("No records.");
    } else {
        print!("{}", format_table(&records));
    }

    Ok(())
}

/// Render records as a fixed-width `ID NAME CONTACT` table.
pub fn format_table(records: &[Record]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!("{:<6} {:<width$} CONTACT\n", "ID", "NAME", width = name_width);
    for r in records {
        out.push_str(&format!(
            "{:<6} {:<width$} {}\n",
            r.id,
            r.name,
            r.contact,
            width = name_width
        ));
    }
    out
}
