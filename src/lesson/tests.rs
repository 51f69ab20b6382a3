use super::*;
use crate::entailment::Relation;
use crate::evidence::EvidenceItem;
use crate::language::SuspiciousPhrase;

fn item(url: Option<&str>, relation: Relation) -> EvidenceItem {
    EvidenceItem {
        text: "statement".to_string(),
        source: "Outlet".to_string(),
        url: url.map(str::to_string),
        relation,
        relation_confidence: 0.8,
        similarity_score: 0.5,
    }
}

fn flagged() -> Vec<SuspiciousPhrase> {
    vec![SuspiciousPhrase {
        phrase: "SHOCKING".to_string(),
        start_pos: 0,
        end_pos: 8,
        reason: "sensational or emotionally charged language".to_string(),
    }]
}

fn mapper() -> LessonMapper {
    LessonMapper::new()
}

#[test]
fn test_manipulative_language_wins_over_everything() {
    let lesson = mapper().lesson(&flagged(), &[], true);
    assert_eq!(lesson.category, LessonCategory::LanguageAnalysis);
    assert!(lesson.tip.contains("official channel"));
}

#[test]
fn test_missing_author_is_second_priority() {
    let evidence = vec![item(Some("https://example.org/a"), Relation::Supports)];
    let lesson = mapper().lesson(&[], &evidence, true);
    assert_eq!(lesson.category, LessonCategory::SourceVerification);
    assert!(lesson.tip.contains("authorship"));
}

#[test]
fn test_unsourced_evidence_teaches_cross_referencing() {
    let evidence = vec![item(None, Relation::Supports)];
    let lesson = mapper().lesson(&[], &evidence, false);
    assert_eq!(lesson.category, LessonCategory::CrossReferencing);
    assert!(lesson.tip.contains("independent corroboration"));
}

#[test]
fn test_no_evidence_also_teaches_cross_referencing() {
    let lesson = mapper().lesson(&[], &[], false);
    assert_eq!(lesson.category, LessonCategory::CrossReferencing);
}

#[test]
fn test_conflicting_evidence_teaches_bias_awareness() {
    let evidence = vec![
        item(Some("https://a.example/1"), Relation::Supports),
        item(Some("https://b.example/1"), Relation::Contradicts),
    ];
    let lesson = mapper().lesson(&[], &evidence, false);
    assert_eq!(lesson.category, LessonCategory::BiasAwareness);
}

#[test]
fn test_default_rule_is_evidence_evaluation() {
    let evidence = vec![
        item(Some("https://a.example/1"), Relation::Supports),
        item(Some("https://b.example/1"), Relation::Supports),
    ];
    let lesson = mapper().lesson(&[], &evidence, false);
    assert_eq!(lesson.category, LessonCategory::EvidenceEvaluation);
}

#[test]
fn test_lesson_is_deterministic() {
    let evidence = vec![item(Some("https://a.example/1"), Relation::Supports)];
    let a = mapper().lesson(&[], &evidence, false);
    let b = mapper().lesson(&[], &evidence, false);
    assert_eq!(a, b);
}

#[test]
fn test_category_serde_uses_snake_case_tags() {
    assert_eq!(
        serde_json::to_string(&LessonCategory::SourceVerification).unwrap(),
        "\"source_verification\""
    );
    assert_eq!(LessonCategory::BiasAwareness.to_string(), "bias_awareness");
}
