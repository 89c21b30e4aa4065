// edlp/src/commands/list.rs
//
// USE CASE: Show stored policies as a table.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use edlp_core::application::list_policies;
use edlp_core::infrastructure::adapters::DuckDbPolicyStore;
use edlp_core::infrastructure::export::export_headers;

pub async fn execute(db_path: String) -> anyhow::Result<()> {
    let store = DuckDbPolicyStore::new(&db_path)?;
    let records = list_policies(&store).await?;

    if records.is_empty() {
        println!("📭 No policies stored in {}", db_path);
        return Ok(());
    }

    let mut header = vec!["#"];
    header.extend(export_headers());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for record in &records {
        let mut row = vec![record.id.to_string()];
        row.extend(record.fields.values().iter().map(|v| v.to_string()));
        row.push(record.timestamp.clone());
        table.add_row(row);
    }

    println!("{table}");
    println!("📋 {} policy record(s)", records.len());
    Ok(())
}
