//! Knowledge-base article models.

use serde::{Deserialize, Serialize};

/// A knowledge-base article from the corpus snapshot.
///
/// Identity is `id`, stable across syncs. `embedding` is absent in the
/// snapshot on disk and attached in memory after backfill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub body: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Article {
    /// Whether this article carries a usable embedding vector.
    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|v| !v.is_empty())
    }
}

/// Confidence label derived from a rerank relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// `high` above 0.65, `medium` above 0.45, `low` otherwise.
    pub fn from_relevance(relevance: f32) -> Self {
        if relevance > 0.65 {
            Self::High
        } else if relevance > 0.45 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Diagnostic score block attached to returned articles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ScoreDetail {
    /// Embedding-stage cosine similarity as a display percentage, e.g. "93.21%".
    pub embedding_similarity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

/// An article scored against a query.
///
/// `similarity` is set by the embedding stage; `relevance` and `confidence`
/// only after reranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    pub similarity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
    pub scores: ScoreDetail,
}

impl ScoredArticle {
    /// A candidate scored by the embedding stage only.
    pub fn from_similarity(article: Article, similarity: f32) -> Self {
        Self {
            scores: ScoreDetail {
                embedding_similarity: format_percent(similarity),
                relevance_score: None,
                confidence: None,
            },
            article,
            similarity,
            relevance: None,
        }
    }

    /// Attach the rerank stage's relevance score and derived confidence.
    pub fn with_relevance(mut self, relevance: f32) -> Self {
        self.scores.relevance_score = Some(format_percent(relevance));
        self.scores.confidence = Some(Confidence::from_relevance(relevance));
        self.relevance = Some(relevance);
        self
    }
}

fn format_percent(score: f32) -> String {
    format!("{:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: "How to reset a password".to_string(),
            body: "Step by step instructions".to_string(),
            link: "https://kb.example.com/1".to_string(),
            embedding: None,
        }
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(Confidence::from_relevance(0.66), Confidence::High);
        assert_eq!(Confidence::from_relevance(0.65), Confidence::Medium);
        assert_eq!(Confidence::from_relevance(0.46), Confidence::Medium);
        assert_eq!(Confidence::from_relevance(0.45), Confidence::Low);
        assert_eq!(Confidence::from_relevance(0.0), Confidence::Low);
    }

    #[test]
    fn has_embedding_requires_non_empty_vector() {
        let mut a = article("1");
        assert!(!a.has_embedding());
        a.embedding = Some(vec![]);
        assert!(!a.has_embedding());
        a.embedding = Some(vec![0.1]);
        assert!(a.has_embedding());
    }

    #[test]
    fn scored_article_formats_percentages() {
        let scored = ScoredArticle::from_similarity(article("1"), 0.9321);
        assert_eq!(scored.scores.embedding_similarity, "93.21%");
        assert!(scored.scores.confidence.is_none());

        let scored = scored.with_relevance(0.5);
        assert_eq!(scored.scores.relevance_score.as_deref(), Some("50.00%"));
        assert_eq!(scored.scores.confidence, Some(Confidence::Medium));
    }

    #[test]
    fn snapshot_article_deserializes_without_embedding() {
        let json = r#"{"id":"42","title":"t","body":"b","link":"l"}"#;
        let a: Article = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "42");
        assert!(a.embedding.is_none());
    }
}
