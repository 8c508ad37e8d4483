//! Quiz scoring. Maps an answer sequence to a result bucket.
//!
//! Pure functions over an immutable [`Quiz`]; the session that collects the
//! answers lives in `usecases::quiz_session`.

use crate::domain::entities::{Answer, Quiz, ResultBucket, ScoringMode};

/// What the answers added up to, before bucket matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tally {
    /// Sum of weights, or number of correct answers.
    Score(i64),
    /// Most frequent category label; `None` when no answer carried one.
    Dominant(Option<String>),
}

/// Tally plus the matched bucket (if any). Owned so it can outlive the session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub mode: ScoringMode,
    pub tally: Tally,
    pub result: Option<ResultBucket>,
}

impl QuizOutcome {
    pub fn score(&self) -> Option<i64> {
        match self.tally {
            Tally::Score(s) => Some(s),
            Tally::Dominant(_) => None,
        }
    }
}

/// Scores `answers` against `quiz` and returns the first matching bucket.
///
/// `None` is a normal outcome (score outside every range, or no category
/// label at all); callers render a fallback.
pub fn score_quiz<'q>(quiz: &'q Quiz, answers: &[Answer]) -> Option<&'q ResultBucket> {
    let tally = tally(quiz.scoring_mode(), answers);
    match_result(quiz, &tally)
}

/// Like [`score_quiz`] but keeps the tally for display.
pub fn evaluate(quiz: &Quiz, answers: &[Answer]) -> QuizOutcome {
    let mode = quiz.scoring_mode();
    let tally = tally(mode, answers);
    let result = match_result(quiz, &tally).cloned();
    QuizOutcome {
        mode,
        tally,
        result,
    }
}

/// Reduces answers under `mode`. Answers of another variant contribute nothing.
pub fn tally(mode: ScoringMode, answers: &[Answer]) -> Tally {
    match mode {
        ScoringMode::Numeric => Tally::Score(
            answers
                .iter()
                .map(|a| match a {
                    Answer::Numeric(w) => *w,
                    _ => 0,
                })
                .sum(),
        ),
        ScoringMode::Correctness => Tally::Score(
            answers
                .iter()
                .filter(|a| matches!(a, Answer::Correctness(true)))
                .count() as i64,
        ),
        ScoringMode::Category => Tally::Dominant(dominant_category(answers)),
    }
}

/// Most frequent label; ties go to the label seen first.
fn dominant_category(answers: &[Answer]) -> Option<String> {
    // Insertion-ordered tally; category quizzes have a handful of labels.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for answer in answers {
        let Answer::Category(Some(label)) = answer else {
            continue;
        };
        match counts.iter_mut().find(|entry| entry.0 == label.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((label, n));
        }
    }
    best.map(|(label, _)| label.to_string())
}

fn match_result<'q>(quiz: &'q Quiz, tally: &Tally) -> Option<&'q ResultBucket> {
    match tally {
        Tally::Score(score) => quiz.results.iter().find(|r| r.contains(*score)),
        Tally::Dominant(Some(label)) => quiz
            .results
            .iter()
            .find(|r| r.category.as_deref() == Some(label.as_str())),
        Tally::Dominant(None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AnswerOption, Question};

    fn bucket(min: Option<i64>, max: Option<i64>, title: &str) -> ResultBucket {
        ResultBucket {
            min_score: min,
            max_score: max,
            category: None,
            title: title.to_string(),
            description: String::new(),
        }
    }

    fn typed(label: &str, title: &str) -> ResultBucket {
        ResultBucket {
            min_score: None,
            max_score: None,
            category: Some(label.to_string()),
            title: title.to_string(),
            description: String::new(),
        }
    }

    fn quiz(mode: ScoringMode, results: Vec<ResultBucket>) -> Quiz {
        Quiz {
            id: "t".to_string(),
            title: "Test".to_string(),
            emoji: String::new(),
            hook: None,
            category: "psychology".to_string(),
            questions: vec![Question {
                id: 1,
                text: "?".to_string(),
                options: vec![AnswerOption::default()],
            }],
            results,
            scoring: Some(mode),
        }
    }

    fn labels(ls: &[&str]) -> Vec<Answer> {
        ls.iter().map(|l| Answer::Category(Some(l.to_string()))).collect()
    }

    #[test]
    fn test_numeric_sum_picks_high_bucket() {
        let q = quiz(
            ScoringMode::Numeric,
            vec![bucket(Some(0), Some(5), "Low"), bucket(Some(6), Some(10), "High")],
        );
        let answers = vec![Answer::Numeric(3), Answer::Numeric(4)];
        assert_eq!(score_quiz(&q, &answers).map(|r| r.title.as_str()), Some("High"));
    }

    #[test]
    fn test_numeric_sum_range_edges_inclusive() {
        let q = quiz(
            ScoringMode::Numeric,
            vec![bucket(Some(0), Some(5), "Low"), bucket(Some(6), Some(10), "High")],
        );
        assert_eq!(
            score_quiz(&q, &[Answer::Numeric(5)]).map(|r| r.title.as_str()),
            Some("Low")
        );
        assert_eq!(
            score_quiz(&q, &[Answer::Numeric(6)]).map(|r| r.title.as_str()),
            Some("High")
        );
    }

    #[test]
    fn test_score_outside_all_ranges_is_none() {
        let q = quiz(
            ScoringMode::Numeric,
            vec![bucket(Some(0), Some(5), "Low"), bucket(Some(6), Some(10), "High")],
        );
        assert!(score_quiz(&q, &[Answer::Numeric(11)]).is_none());
        assert!(score_quiz(&q, &[Answer::Numeric(-2)]).is_none());
    }

    #[test]
    fn test_overlapping_ranges_first_wins() {
        let q = quiz(
            ScoringMode::Numeric,
            vec![bucket(Some(0), Some(8), "First"), bucket(Some(5), Some(10), "Second")],
        );
        assert_eq!(
            score_quiz(&q, &[Answer::Numeric(6)]).map(|r| r.title.as_str()),
            Some("First")
        );
    }

    #[test]
    fn test_missing_bounds_default_to_0_and_100() {
        let q = quiz(
            ScoringMode::Numeric,
            vec![bucket(Some(50), None, "Upper"), bucket(None, Some(49), "Lower")],
        );
        assert_eq!(
            score_quiz(&q, &[Answer::Numeric(100)]).map(|r| r.title.as_str()),
            Some("Upper")
        );
        assert_eq!(
            score_quiz(&q, &[Answer::Numeric(0)]).map(|r| r.title.as_str()),
            Some("Lower")
        );
        assert!(score_quiz(&q, &[Answer::Numeric(101)]).is_none());
    }

    #[test]
    fn test_correctness_counts_correct_answers() {
        let q = quiz(
            ScoringMode::Correctness,
            vec![bucket(Some(0), Some(1), "Keep practicing"), bucket(Some(2), Some(3), "Sharp")],
        );
        let answers = vec![
            Answer::Correctness(true),
            Answer::Correctness(false),
            Answer::Correctness(true),
        ];
        let outcome = evaluate(&q, &answers);
        assert_eq!(outcome.score(), Some(2));
        assert_eq!(outcome.result.map(|r| r.title), Some("Sharp".to_string()));
    }

    #[test]
    fn test_category_majority() {
        let q = quiz(
            ScoringMode::Category,
            vec![typed("anxious", "Anxious"), typed("secure", "Secure")],
        );
        let answers = labels(&["anxious", "secure", "secure"]);
        assert_eq!(score_quiz(&q, &answers).map(|r| r.title.as_str()), Some("Secure"));
    }

    #[test]
    fn test_category_tie_goes_to_first_seen() {
        let q = quiz(
            ScoringMode::Category,
            vec![typed("avoidant", "Avoidant"), typed("secure", "Secure")],
        );
        let answers = labels(&["secure", "avoidant", "avoidant", "secure"]);
        assert_eq!(score_quiz(&q, &answers).map(|r| r.title.as_str()), Some("Secure"));
    }

    #[test]
    fn test_category_unlabelled_answers_ignored() {
        let q = quiz(ScoringMode::Category, vec![typed("secure", "Secure")]);
        let mut answers = vec![Answer::Category(None), Answer::Category(None)];
        assert!(score_quiz(&q, &answers).is_none());
        assert_eq!(evaluate(&q, &answers).tally, Tally::Dominant(None));

        answers.push(Answer::Category(Some("secure".to_string())));
        assert_eq!(score_quiz(&q, &answers).map(|r| r.title.as_str()), Some("Secure"));
    }

    #[test]
    fn test_category_without_matching_bucket_is_none() {
        let q = quiz(ScoringMode::Category, vec![typed("secure", "Secure")]);
        let outcome = evaluate(&q, &labels(&["fearful"]));
        assert_eq!(outcome.tally, Tally::Dominant(Some("fearful".to_string())));
        assert!(outcome.result.is_none());
    }

    #[test]
    fn test_numeric_property_over_many_sequences() {
        let q = quiz(
            ScoringMode::Numeric,
            vec![
                bucket(Some(0), Some(9), "A"),
                bucket(Some(10), Some(19), "B"),
                bucket(Some(20), Some(29), "C"),
            ],
        );
        for a in 0..12i64 {
            for b in 0..12i64 {
                let answers = vec![Answer::Numeric(a), Answer::Numeric(b), Answer::Numeric(a)];
                let sum = 2 * a + b;
                let expected = q.results.iter().find(|r| r.contains(sum));
                assert_eq!(score_quiz(&q, &answers), expected, "sum {}", sum);
            }
        }
    }
}
