// edlp/src/commands/submit.rs
//
// USE CASE: Validate -> Canonicalize -> Store, from a draft file.

use std::path::PathBuf;

use edlp_core::application::{SubmitOutcome, submit_draft};
use edlp_core::infrastructure::adapters::DuckDbPolicyStore;

use super::validate::{print_rejection, read_draft};

pub async fn execute(file: PathBuf, db_path: String) -> anyhow::Result<()> {
    let draft = read_draft(&file)?;
    let store = DuckDbPolicyStore::new(&db_path)?;

    match submit_draft(&store, &draft).await? {
        SubmitOutcome::Accepted(record) => {
            println!("✅ Policy #{} stored at {}", record.id, record.timestamp);
            Ok(())
        }
        SubmitOutcome::Rejected(report) => {
            print_rejection(&report);
            report.into_result()?;
            Ok(())
        }
    }
}
