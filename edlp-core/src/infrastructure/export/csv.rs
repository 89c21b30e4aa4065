// edlp-core/src/infrastructure/export/csv.rs
//
// Spreadsheet-friendly export: UTF-8 BOM (so Excel picks the right encoding),
// a bare header row, then one fully-quoted row per record.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::domain::policy::{CATEGORIES, PolicyRecord};
use crate::infrastructure::error::InfrastructureError;

const UTF8_BOM: &[u8] = "\u{FEFF}".as_bytes();

const SUBMITTER_HEADERS: [&str; 3] = ["填寫人", "職級", "辦公室"];
const TIMESTAMP_HEADER: &str = "時間戳記";

/// Column labels in record field order: submitter columns, one per category
/// (its schema title), timestamp last.
pub fn export_headers() -> Vec<&'static str> {
    SUBMITTER_HEADERS
        .into_iter()
        .chain(CATEGORIES.iter().map(|c| c.title))
        .chain(std::iter::once(TIMESTAMP_HEADER))
        .collect()
}

// Rows are joined with `\n`, without a trailing one after the last row.
pub fn write_csv<W: Write>(records: &[PolicyRecord], mut out: W) -> Result<(), InfrastructureError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        let values = record.fields.values();
        writer.write_record(
            values
                .iter()
                .copied()
                .chain(std::iter::once(record.timestamp.as_str())),
        )?;
    }
    let rows = writer
        .into_inner()
        .map_err(|e| InfrastructureError::Io(e.into_error()))?;

    out.write_all(UTF8_BOM)?;
    out.write_all(export_headers().join(",").as_bytes())?;
    if let Some(rows) = rows.strip_suffix(b"\n") {
        out.write_all(b"\n")?;
        out.write_all(rows)?;
    }
    out.flush()?;
    Ok(())
}

pub fn render_csv(records: &[PolicyRecord]) -> Result<Vec<u8>, InfrastructureError> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(buffer)
}

/// `<prefix>_<YYYY-MM-DD>.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::policy::NewPolicyRecord;

    fn record(id: i64, name: &str, cc: &str) -> PolicyRecord {
        PolicyRecord::new(
            id,
            NewPolicyRecord {
                submitter_name: name.into(),
                submitter_role: "部門三級主管".into(),
                office: "瑞四office".into(),
                blacklist: "N/A".into(),
                whitelist: "N/A".into(),
                sender: "N/A".into(),
                keywords: "主題: 機密；內容: 報價".into(),
                attachment: "N/A".into(),
                sourcecode: "啟用".into(),
                dedup: "N/A".into(),
                approval: "時間: 30分, 超時: 自動通過".into(),
                cc: cc.into(),
                bcc: "N/A".into(),
            },
            "2026/10/15 09:30:00",
        )
    }

    #[test]
    fn test_csv_starts_with_bom_and_bare_header() -> anyhow::Result<()> {
        let bytes = render_csv(&[])?;
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes)?;
        assert_eq!(
            text.trim_start_matches('\u{FEFF}'),
            "填寫人,職級,辦公室,黑名單,白名單,收/發件人,關鍵字,附件,源代碼,文本查重,審批,抄送,密送,時間戳記"
        );
        Ok(())
    }

    #[test]
    fn test_rows_are_fully_quoted_and_escaped() -> anyhow::Result<()> {
        let records = [
            record(2, "Bob", "say \"hi\", boss"),
            record(1, "Amy", "N/A"),
        ];
        let text = String::from_utf8(render_csv(&records)?)?;
        assert!(!text.ends_with('\n'));
        let body: Vec<&str> = text.lines().skip(1).collect();

        insta::assert_snapshot!(body.join("\n"), @r###"
        "Bob","部門三級主管","瑞四office","N/A","N/A","N/A","主題: 機密；內容: 報價","N/A","啟用","N/A","時間: 30分, 超時: 自動通過","say ""hi"", boss","N/A","2026/10/15 09:30:00"
        "Amy","部門三級主管","瑞四office","N/A","N/A","N/A","主題: 機密；內容: 報價","N/A","啟用","N/A","時間: 30分, 超時: 自動通過","N/A","N/A","2026/10/15 09:30:00"
        "###);
        Ok(())
    }

    #[test]
    fn test_export_file_name_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date");
        assert_eq!(
            export_file_name("eDLP_Strategy_Export", date),
            "eDLP_Strategy_Export_2026-10-15.csv"
        );
    }
}
