use serde::Serialize;

use super::response::{ImportResponse, ImportResultRecord};

/// Display-ready projection of an [`ImportResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub success: bool,
    pub message: String,
    pub imported_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    pub entries: Vec<ResultEntry>,
}

/// One row of the result list, in server order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub identifier: String,
    pub outcome: EntryOutcome,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryOutcome {
    Success,
    Failure,
}

/// Project a response into its display model. Counts are shown verbatim and
/// entries keep server order; no correlation with the submitted records is
/// attempted beyond the opaque identifier.
pub fn summarize(response: &ImportResponse) -> ImportSummary {
    ImportSummary {
        success: response.success,
        message: response.message.clone(),
        imported_count: response.imported_count,
        skipped_count: response.skipped_count,
        failed_count: response.failed_count,
        entries: response.results.iter().map(to_entry).collect(),
    }
}

fn to_entry(record: &ImportResultRecord) -> ResultEntry {
    ResultEntry {
        identifier: record.identifier.clone(),
        outcome: if record.success {
            EntryOutcome::Success
        } else {
            EntryOutcome::Failure
        },
        message: record.message.clone(),
        credential_id: record.credential_id,
    }
}
