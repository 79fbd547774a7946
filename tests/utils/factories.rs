/// Test data factories for import payloads and endpoint responses
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use kanri::modules::batch_import::domain::{ImportResponse, ImportResultRecord};

static EXPORT_SEQ: AtomicU32 = AtomicU32::new(0);

/// Minimal valid export with `count` accounts.
pub fn export_json(count: usize) -> String {
    let accounts: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"email":"user{i}@example.com","idp":"Google","credentials":{{"refreshToken":"rt-{i}","region":"us-east-1"}}}}"#
            )
        })
        .collect();
    format!(
        r#"{{"version":"1.2.0","exportedAt":1700000000000,"accounts":[{}]}}"#,
        accounts.join(",")
    )
}

/// Export where every account is missing a usable refresh token.
pub fn export_json_without_tokens() -> String {
    r#"{"accounts":[{"credentials":{}},{"email":"b@example.com"}]}"#.to_string()
}

/// Write an export to a unique temp file and return its path.
pub fn write_export_file(content: &str, extension: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "kanri-export-{}-{}.{}",
        std::process::id(),
        EXPORT_SEQ.fetch_add(1, Ordering::Relaxed),
        extension
    ));
    std::fs::write(&path, content).expect("write export file");
    path
}

pub fn result_record(identifier: &str, success: bool) -> ImportResultRecord {
    ImportResultRecord {
        identifier: identifier.to_string(),
        success,
        message: if success {
            "imported".to_string()
        } else {
            "refresh token rejected".to_string()
        },
        credential_id: success.then_some(100),
    }
}

/// Response where every submitted account imported cleanly.
pub fn all_imported_response(identifiers: &[&str]) -> ImportResponse {
    ImportResponse {
        success: true,
        message: format!("Imported {} account(s)", identifiers.len()),
        imported_count: identifiers.len(),
        skipped_count: 0,
        failed_count: 0,
        results: identifiers
            .iter()
            .map(|id| result_record(id, true))
            .collect(),
    }
}

/// Response with a mixed per-record verdict and `success: false`.
pub fn partial_failure_response() -> ImportResponse {
    ImportResponse {
        success: false,
        message: "Imported 1 of 2 accounts".to_string(),
        imported_count: 1,
        skipped_count: 0,
        failed_count: 1,
        results: vec![
            result_record("user1@example.com", false),
            result_record("user0@example.com", true),
        ],
    }
}
