use super::*;

fn detector() -> LanguageRiskDetector {
    LanguageRiskDetector::new()
}

fn assert_valid(text: &str, phrases: &[SuspiciousPhrase]) {
    let mut last_end = 0;
    for p in phrases {
        assert!(p.start_pos >= last_end, "phrases overlap or are unsorted");
        assert!(p.end_pos > p.start_pos);
        assert!(text.is_char_boundary(p.start_pos));
        assert!(text.is_char_boundary(p.end_pos));
        assert_eq!(&text[p.start_pos..p.end_pos], p.phrase);
        last_end = p.end_pos;
    }
}

#[test]
fn test_lexicon_match_preserves_original_casing() {
    let text = "Shocking report claims the moon is hollow";
    let phrases = detector().scan(text);

    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].phrase, "Shocking");
    assert_eq!(phrases[0].start_pos, 0);
    assert_eq!(phrases[0].end_pos, 8);
    assert_eq!(phrases[0].reason, REASON_SENSATIONAL);
    assert_valid(text, &phrases);
}

#[test]
fn test_lexicon_match_mid_text_offsets() {
    let text = "This hidden truth was revealed yesterday";
    let phrases = detector().scan(text);

    let spans: Vec<&str> = phrases.iter().map(|p| p.phrase.as_str()).collect();
    assert_eq!(spans, vec!["hidden", "revealed"]);
    assert_eq!(phrases[0].start_pos, text.find("hidden").unwrap());
    assert_valid(text, &phrases);
}

#[test]
fn test_multiword_lexicon_entry() {
    let text = "what they don't want you to know about vaccines";
    let phrases = detector().scan(text);

    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].phrase, "they don't want you to know");
    assert_valid(text, &phrases);
}

#[test]
fn test_word_boundaries_respected() {
    // "lies" must not match inside "families".
    let text = "families believe the report";
    assert!(detector().scan(text).is_empty());
}

#[test]
fn test_caps_word_flagged() {
    let text = "The vaccine is DEADLY according to a blog";
    let phrases = detector().scan(text);

    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].phrase, "DEADLY");
    assert_eq!(phrases[0].reason, REASON_CAPS);
    assert_valid(text, &phrases);
}

#[test]
fn test_caps_allowlist_not_flagged() {
    let text = "WHO and NASA published the data";
    assert!(detector().scan(text).is_empty());
}

#[test]
fn test_short_caps_not_flagged() {
    let text = "US GDP is up";
    assert!(detector().scan(text).is_empty());
}

#[test]
fn test_exclamation_runs_flagged() {
    let text = "Wake up!!! The truth is out there";
    let phrases = detector().scan(text);

    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].phrase, "!!!");
    assert_eq!(phrases[0].reason, REASON_PUNCTUATION);
    assert_valid(text, &phrases);
}

#[test]
fn test_single_exclamation_not_flagged() {
    assert!(detector().scan("The earth is round!").is_empty());
}

#[test]
fn test_overlap_prefers_longest_earliest() {
    // "FAKE NEWS" matches the lexicon (9 bytes) and both words match the
    // caps detector; the longest-earliest span must win, then the run of '!'.
    let text = "FAKE NEWS!!!";
    let phrases = detector().scan(text);

    let spans: Vec<(&str, &str)> = phrases
        .iter()
        .map(|p| (p.phrase.as_str(), p.reason.as_str()))
        .collect();
    assert_eq!(
        spans,
        vec![
            ("FAKE NEWS", REASON_SENSATIONAL),
            ("!!!", REASON_PUNCTUATION),
        ]
    );
    assert_valid(text, &phrases);
}

#[test]
fn test_scan_handles_non_ascii_text() {
    let text = "Überraschend: SHOCKING Enthüllung!!";
    let phrases = detector().scan(text);

    let spans: Vec<&str> = phrases.iter().map(|p| p.phrase.as_str()).collect();
    assert_eq!(spans, vec!["SHOCKING", "!!"]);
    assert_valid(text, &phrases);
}

#[test]
fn test_scan_is_valid_on_varied_inputs() {
    let inputs = [
        "",
        "plain factual sentence about rainfall totals",
        "BREAKING!!! shocking SECRET revealed they don't want you to know!!",
        "¡¡Увага!! amazing THINGS",
        "exclusive exclusive exclusive",
        "a!b!!c!!!d!!!!",
    ];

    for input in inputs {
        let phrases = detector().scan(input);
        assert_valid(input, &phrases);
    }
}

#[test]
fn test_risk_score_zero_without_phrases() {
    assert_eq!(risk_score("totally neutral text", &[]), 0.0);
    assert_eq!(risk_score("", &[]), 0.0);
}

#[test]
fn test_risk_score_positive_when_flagged() {
    let d = detector();
    let text = "SHOCKING: 5G networks spread coronavirus";
    let phrases = d.scan(text);
    assert!(!phrases.is_empty());

    let risk = risk_score(text, &phrases);
    assert!(risk > 0.0);
    assert!(risk <= 1.0);
}

#[test]
fn test_risk_score_reflects_density_not_count() {
    let d = detector();

    let dense = "SHOCKING hoax lies";
    let dense_phrases = d.scan(dense);
    let dense_risk = risk_score(dense, &dense_phrases);

    let diluted = "SHOCKING hoax lies, but the remainder of this sentence is a long, \
                   sober, descriptive passage that keeps adding neutral context words";
    let diluted_phrases = d.scan(diluted);
    let diluted_risk = risk_score(diluted, &diluted_phrases);

    assert!(dense_risk > diluted_risk);
}
