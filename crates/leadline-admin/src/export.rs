//! CSV serialization of the ledger.

use chrono::{SecondsFormat, Utc};
use leadline_core::{Error, LeadRecord, Result};

/// Column order of the export.
const HEADER: [&str; 8] = [
    "ID",
    "Timestamp",
    "Name",
    "Email",
    "Phone",
    "Condition",
    "Message",
    "UserAgent",
];

/// Serializes records into CSV text.
///
/// Fields containing a comma, a quote, or a newline are wrapped in
/// double quotes with embedded quotes doubled (the csv crate's
/// quote-when-necessary default). Returns `None` for an empty
/// sequence: an empty ledger exports nothing.
pub fn csv_string(records: &[LeadRecord]) -> Result<Option<String>> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|err| Error::storage(format!("csv header: {err}")))?;
    for record in records {
        let timestamp = record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
        writer
            .write_record([
                record.id.as_str(),
                timestamp.as_str(),
                record.name.as_str(),
                record.email.as_str(),
                record.phone.as_str(),
                record.condition_label(),
                record.message_or_default(),
                record.user_agent.as_str(),
            ])
            .map_err(|err| Error::storage(format!("csv row: {err}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::storage(format!("csv flush: {err}")))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|err| Error::storage(format!("csv encoding: {err}")))
}

/// Export filename stamped with the current instant.
///
/// The ISO timestamp is truncated to seconds and its colons replaced
/// so the name is filesystem-safe everywhere.
pub fn export_filename() -> String {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .replace(':', "-");
    format!("leadline-admin-contacts-{stamp}.csv")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use leadline_core::{Condition, LeadId};

    fn record_with_message(message: Option<&str>) -> LeadRecord {
        LeadRecord {
            id: LeadId::from_string("lead_1_abcdef01"),
            name: "Priya".to_string(),
            email: "p@x.com".to_string(),
            phone: "+911234".to_string(),
            condition: Some(Condition::Keratoconus),
            message: message.map(String::from),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            user_agent: "leadline/0.1 (linux; x86_64)".to_string(),
        }
    }

    #[test]
    fn test_empty_ledger_exports_nothing() {
        assert!(csv_string(&[]).unwrap().is_none());
    }

    #[test]
    fn test_header_row() {
        let csv = csv_string(&[record_with_message(None)]).unwrap().unwrap();
        let first_line = csv.lines().next().unwrap();
        assert_eq!(
            first_line,
            "ID,Timestamp,Name,Email,Phone,Condition,Message,UserAgent"
        );
    }

    #[test]
    fn test_quote_escaping_rule() {
        let csv = csv_string(&[record_with_message(Some("hello, \"world\""))])
            .unwrap()
            .unwrap();
        assert!(csv.contains("\"hello, \"\"world\"\"\""));
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let message = "line one\nline two, with \"quotes\"";
        let csv = csv_string(&[record_with_message(Some(message))])
            .unwrap()
            .unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "lead_1_abcdef01");
        assert_eq!(&rows[0][1], "2026-01-02T03:04:05Z");
        assert_eq!(&rows[0][6], message);
    }

    #[test]
    fn test_default_literals_in_export() {
        let mut record = record_with_message(None);
        record.condition = None;
        let csv = csv_string(&[record]).unwrap().unwrap();
        assert!(csv.contains("Not specified"));
        assert!(csv.contains("No additional message"));
    }

    #[test]
    fn test_export_filename_shape() {
        let name = export_filename();
        assert!(name.starts_with("leadline-admin-contacts-"));
        assert!(name.ends_with(".csv"));
        assert!(!name.contains(':'));
    }
}
