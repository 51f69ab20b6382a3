use super::*;
use crate::credibility::CredibilityFingerprint;
use crate::entailment::Relation;
use crate::evidence::EvidenceItem;
use crate::language::SuspiciousPhrase;

fn item(source: &str, url: Option<&str>, relation: Relation, confidence: f32) -> EvidenceItem {
    EvidenceItem {
        text: format!("statement from {source}"),
        source: source.to_string(),
        url: url.map(str::to_string),
        relation,
        relation_confidence: confidence,
        similarity_score: 0.5,
    }
}

fn fingerprint(sc: f32, cc: u32, lr: f32, overall: f32) -> CredibilityFingerprint {
    CredibilityFingerprint {
        source_credibility: sc,
        corroboration_count: cc,
        language_risk: lr,
        overall_score: overall,
    }
}

fn phrase(text: &str) -> SuspiciousPhrase {
    SuspiciousPhrase {
        phrase: text.to_string(),
        start_pos: 0,
        end_pos: text.len(),
        reason: "sensational or emotionally charged language".to_string(),
    }
}

fn engine() -> VerdictEngine {
    VerdictEngine::default()
}

#[test]
fn test_no_evidence_is_unverified() {
    let decision = engine().decide(&[], &fingerprint(0.0, 0, 0.0, 0.3), &[], &[]);

    assert_eq!(decision.verdict, Verdict::Unverified);
    assert!(decision.confidence <= 0.5);
    assert!(
        decision
            .reasons
            .iter()
            .any(|r| r.contains("no independent sourced evidence"))
    );
}

#[test]
fn test_supported_claim_is_likely_true() {
    let evidence = vec![
        item("Reuters", Some("https://www.reuters.com/a"), Relation::Supports, 0.9),
        item("AP News", Some("https://apnews.com/b"), Relation::Supports, 0.9),
        item("BBC", Some("https://www.bbc.com/c"), Relation::Supports, 0.9),
    ];
    let decision = engine().decide(&evidence, &fingerprint(0.93, 3, 0.0, 0.97), &[], &[]);

    assert_eq!(decision.verdict, Verdict::LikelyTrue);
    assert!(decision.explanation.contains("supports"));
    assert!(decision.confidence > 0.8);
}

#[test]
fn test_contradicted_claim_is_likely_false() {
    // The 5G scenario: one contradicting WHO item, manipulative phrasing.
    let evidence = vec![item(
        "World Health Organization",
        Some("https://www.who.int/myth-busters"),
        Relation::Contradicts,
        0.9,
    )];
    let fp = fingerprint(0.9, 0, 0.45, 0.525);
    let phrases = vec![phrase("SHOCKING")];

    let decision = engine().decide(&evidence, &fp, &phrases, &[]);

    assert_eq!(decision.verdict, Verdict::LikelyFalse);
    assert!(decision.explanation.contains("contradicts"));
    assert!(decision.reasons.iter().any(|r| r.contains("no independent sourced evidence")));
    assert!(decision.reasons.iter().any(|r| r.contains("SHOCKING")));
}

#[test]
fn test_same_domain_conflict_is_mixed() {
    let evidence = vec![
        item("Example", Some("https://example.org/a"), Relation::Supports, 0.8),
        item("Example", Some("https://example.org/b"), Relation::Contradicts, 0.8),
    ];
    let decision = engine().decide(&evidence, &fingerprint(0.5, 1, 0.0, 0.6), &[], &[]);

    assert_eq!(decision.verdict, Verdict::Mixed);
    assert!(decision.explanation.contains("both ways"));
}

#[test]
fn test_unsourced_weak_evidence_is_unverified() {
    let evidence = vec![item("A forum post", None, Relation::Supports, 0.6)];
    let decision = engine().decide(&evidence, &fingerprint(0.0, 1, 0.0, 0.4), &[], &[]);

    assert_eq!(decision.verdict, Verdict::Unverified);
    assert!(decision.explanation.contains("unsourced"));
}

#[test]
fn test_conflicting_high_confidence_is_mixed_despite_directional_net() {
    let evidence = vec![
        item("A", Some("https://a.example/1"), Relation::Supports, 1.0),
        item("B", Some("https://b.example/1"), Relation::Supports, 0.75),
        item("C", Some("https://c.example/1"), Relation::Contradicts, 0.7),
    ];
    // net = (1.75 - 0.7) / 3 = 0.35, but overall fails the likely-true floor
    // and high-confidence items sit on both sides.
    let decision = engine().decide(&evidence, &fingerprint(0.5, 2, 0.0, 0.45), &[], &[]);

    assert_eq!(decision.verdict, Verdict::Mixed);
}

#[test]
fn test_confidence_formula() {
    let evidence = vec![item(
        "CDC",
        Some("https://www.cdc.gov/a"),
        Relation::Contradicts,
        0.9,
    )];
    let fp = fingerprint(0.9, 0, 0.0, 0.5);
    let decision = engine().decide(&evidence, &fp, &[], &[]);

    // |net| = 0.9 -> 0.9 * 0.7 + 0.3 * 0.5
    assert!((decision.confidence - 0.78).abs() < 1e-5);
}

#[test]
fn test_confidence_capped_at_one() {
    let thresholds = VerdictThresholds::default();
    let engine = VerdictEngine::new(thresholds);
    let evidence = vec![item(
        "CDC",
        Some("https://www.cdc.gov/a"),
        Relation::Supports,
        1.0,
    )];
    let decision = engine.decide(&evidence, &fingerprint(1.0, 5, 0.0, 1.0), &[], &[]);
    assert!(decision.confidence <= 1.0);
}

#[test]
fn test_reasons_are_capped_at_three_and_ordered() {
    let evidence = vec![
        item("Blog", Some("https://blog.example/a"), Relation::Contradicts, 0.8),
        item("Blog", Some("https://blog.example/b"), Relation::Contradicts, 0.7),
    ];
    let phrases = vec![phrase("URGENT"), phrase("SHOCKING"), phrase("BOMBSHELL")];
    let decision = engine().decide(&evidence, &fingerprint(0.5, 0, 0.6, 0.3), &phrases, &[]);

    assert!(decision.reasons.len() <= 3);
    assert!(decision.reasons[0].contains("no independent sourced evidence"));
    assert!(decision.reasons[1].contains("URGENT"));
    assert!(decision.reasons[1].contains("SHOCKING"));
    assert!(!decision.reasons[1].contains("BOMBSHELL"), "at most two phrases named");
    assert!(decision.reasons[2].contains("blog.example"));
}

#[test]
fn test_dominant_domain_ties_break_deterministically() {
    let evidence = vec![
        item("B", Some("https://bbb.example/1"), Relation::Neutral, 0.5),
        item("A", Some("https://aaa.example/1"), Relation::Neutral, 0.5),
    ];
    let fp = fingerprint(0.5, 1, 0.0, 0.6);

    let a = engine().decide(&evidence, &fp, &[], &[]);
    let b = engine().decide(&evidence, &fp, &[], &[]);
    assert_eq!(a.reasons, b.reasons);
    assert!(a.reasons.iter().any(|r| r.contains("aaa.example")));
}

#[test]
fn test_degraded_components_named_in_explanation() {
    let decision = engine().decide(
        &[],
        &fingerprint(0.0, 0, 0.0, 0.3),
        &[],
        &["entailment classifier".to_string()],
    );

    assert!(decision.explanation.contains("entailment classifier"));
}

#[test]
fn test_decision_is_deterministic() {
    let evidence = vec![
        item("Reuters", Some("https://www.reuters.com/a"), Relation::Supports, 0.9),
        item("Blog", Some("https://blog.example/a"), Relation::Contradicts, 0.4),
    ];
    let fp = fingerprint(0.7, 1, 0.1, 0.65);
    let phrases = vec![phrase("EXPOSED")];

    let a = engine().decide(&evidence, &fp, &phrases, &[]);
    let b = engine().decide(&evidence, &fp, &phrases, &[]);
    assert_eq!(a, b);
}

#[test]
fn test_all_neutral_evidence_is_mixed() {
    let evidence = vec![item(
        "Wikipedia",
        Some("https://en.wikipedia.org/wiki/Topic"),
        Relation::Neutral,
        0.5,
    )];
    let decision = engine().decide(&evidence, &fingerprint(0.75, 0, 0.0, 0.6), &[], &[]);

    // net is 0 with sourced, mid-credibility evidence: inconclusive, not unverified.
    assert_eq!(decision.verdict, Verdict::Mixed);
}

#[test]
fn test_verdict_serde_wire_format() {
    assert_eq!(
        serde_json::to_string(&Verdict::LikelyFalse).unwrap(),
        "\"LIKELY_FALSE\""
    );
    assert_eq!(
        serde_json::from_str::<Verdict>("\"UNVERIFIED\"").unwrap(),
        Verdict::Unverified
    );
}
