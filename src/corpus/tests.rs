use super::*;
use crate::hashing::statement_id;
use std::io::Write as _;

fn sample_record(statement: &str) -> CorpusRecord {
    CorpusRecord {
        id: statement_id(statement),
        statement: statement.to_string(),
        verdict: CorpusVerdict::True,
        source_name: "Reuters".to_string(),
        source_url: "https://www.reuters.com/fact-check/sample".to_string(),
        category: "science".to_string(),
    }
}

#[test]
fn test_from_records_accepts_valid_records() {
    let store = CorpusStore::from_records(vec![
        sample_record("Water boils at 100 degrees Celsius at sea level."),
        sample_record("The Earth orbits the Sun."),
    ])
    .expect("valid records");

    assert_eq!(store.len(), 2);
    assert!(!store.is_empty());
}

#[test]
fn test_from_records_rejects_empty_statement() {
    let mut record = sample_record("placeholder");
    record.statement = "   ".to_string();

    let result = CorpusStore::from_records(vec![record]);
    assert!(matches!(result, Err(CorpusError::EmptyStatement { index: 0 })));
}

#[test]
fn test_from_records_rejects_duplicate_ids() {
    let a = sample_record("The Earth orbits the Sun.");
    let b = a.clone();

    let result = CorpusStore::from_records(vec![a, b]);
    assert!(matches!(result, Err(CorpusError::DuplicateId { .. })));
}

#[test]
fn test_from_json_derives_missing_ids() {
    let json = r#"[
        {
            "statement": "The Earth orbits the Sun.",
            "verdict": "TRUE",
            "source_name": "NASA",
            "source_url": "https://www.nasa.gov/solar-system",
            "category": "science"
        }
    ]"#;

    let store = CorpusStore::from_json_str(json).expect("valid corpus JSON");
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.records()[0].id,
        statement_id("The Earth orbits the Sun.")
    );
    assert_eq!(store.records()[0].verdict, CorpusVerdict::True);
}

#[test]
fn test_from_json_rejects_unknown_verdict() {
    let json = r#"[
        {
            "statement": "The Earth orbits the Sun.",
            "verdict": "PROBABLY",
            "source_name": "NASA",
            "source_url": "https://www.nasa.gov/solar-system",
            "category": "science"
        }
    ]"#;

    assert!(matches!(
        CorpusStore::from_json_str(json),
        Err(CorpusError::Parse { .. })
    ));
}

#[test]
fn test_load_round_trips_through_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let json = r#"[
        {
            "statement": "Lightning never strikes the same place twice.",
            "verdict": "FALSE",
            "source_name": "National Weather Service",
            "source_url": "https://www.weather.gov/safety/lightning-myths",
            "category": "science"
        }
    ]"#;
    file.write_all(json.as_bytes()).expect("write corpus");

    let store = CorpusStore::load(file.path()).expect("load corpus");
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].verdict, CorpusVerdict::False);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = CorpusStore::load(std::path::Path::new("/nonexistent/corpus.json"));
    assert!(matches!(result, Err(CorpusError::Io { .. })));
}

#[test]
fn test_get_by_id() {
    let store = CorpusStore::starter();
    let first = &store.records()[0];
    assert_eq!(store.get(first.id).map(|r| r.id), Some(first.id));
    assert!(store.get(u64::MAX).is_none());
}

#[test]
fn test_starter_corpus_is_valid_and_diverse() {
    let store = CorpusStore::starter();
    assert!(store.len() >= 10);

    let verdicts: std::collections::HashSet<_> = store
        .records()
        .iter()
        .map(|r| format!("{:?}", r.verdict))
        .collect();
    assert_eq!(verdicts.len(), 3, "starter corpus covers all three verdicts");

    for record in store.records() {
        assert!(!record.statement.trim().is_empty());
        assert!(record.source_url.starts_with("https://"));
    }
}
