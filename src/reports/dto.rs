use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Request body for report generation.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

/// Handle to a generated artifact.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: &'static str,
    pub filename: String,
    pub download_url: String,
}

/// Ledger entry returned from the report listing.
#[derive(Debug, Serialize)]
pub struct ReportListItem {
    pub id: Uuid,
    pub topic: String,
    pub filename: String,
    pub download_url: String,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_response_serialization() {
        let resp = GenerateResponse {
            message: "Report generated successfully",
            filename: "report_alice_20240101_000000.html".into(),
            download_url: "/download/report_alice_20240101_000000.html".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("report_alice_20240101_000000.html"));
        assert!(json.contains("/download/"));
    }
}
