//! Question record, category enumeration and feed filter types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed set of question categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Aqidah,
    Ibadah,
    Muamalah,
    Akhlak,
    Sejarah,
    Fiqih,
}

impl Category {
    /// All categories, in the order the feed's chip row shows them.
    pub const ALL: [Category; 6] = [
        Category::Aqidah,
        Category::Ibadah,
        Category::Muamalah,
        Category::Akhlak,
        Category::Sejarah,
        Category::Fiqih,
    ];

    /// Display name, identical to the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Aqidah => "Aqidah",
            Category::Ibadah => "Ibadah",
            Category::Muamalah => "Muamalah",
            Category::Akhlak => "Akhlak",
            Category::Sejarah => "Sejarah",
            Category::Fiqih => "Fiqih",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection for the feed view: a single category or the
/// "all categories" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only questions in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a question in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// A posted question, stored in the `posts` collection.
///
/// The id is allocated by the store before the record is persisted, so the
/// stored document is self-describing. A question transitions from
/// unanswered to answered exactly once and is never deleted or edited
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Store-generated document id.
    pub id: String,
    /// Uid of the author.
    pub user_id: String,
    /// Display name of the author at posting time.
    pub user_name: String,
    /// Free-text body of the question.
    pub question: String,
    /// Category the author filed it under.
    pub category: Category,
    /// Creation time; the feed is ordered by this, descending.
    pub timestamp: DateTime<Utc>,
    /// Whether an ustadz has answered.
    #[serde(default)]
    pub answered: bool,
    /// Answer body, present once answered.
    #[serde(default)]
    pub answer: Option<String>,
    /// Uid of the responder.
    #[serde(default)]
    pub ustadz_id: Option<String>,
    /// Display name of the responder.
    #[serde(default)]
    pub ustadz_name: Option<String>,
    /// When the answer was written.
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Build a fresh, unanswered question. The empty id is filled in by the
    /// store gateway before the write.
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        question: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            question: question.into(),
            category,
            timestamp: Utc::now(),
            answered: false,
            answer: None,
            ustadz_id: None,
            ustadz_name: None,
            answered_at: None,
        }
    }
}

/// Partial update that marks a question as answered.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPatch {
    /// The answer body.
    pub answer: String,
    /// Uid of the responder.
    pub ustadz_id: String,
    /// Display name of the responder.
    pub ustadz_name: String,
    /// Always true; serialized so the stored record flips atomically with
    /// the answer fields.
    pub answered: bool,
    /// When the answer was written.
    pub answered_at: DateTime<Utc>,
}

impl AnswerPatch {
    /// Build the update set for an answer written now.
    pub fn new(
        answer: impl Into<String>,
        ustadz_id: impl Into<String>,
        ustadz_name: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            ustadz_id: ustadz_id.into(),
            ustadz_name: ustadz_name.into(),
            answered: true,
            answered_at: Utc::now(),
        }
    }
}
