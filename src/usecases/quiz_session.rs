//! One play-through of a quiz. Explicit session state: current question,
//! answers so far, outcome once finished.

use crate::domain::scoring;
use crate::domain::{Answer, DomainError, Question, Quiz, QuizOutcome, ScoringMode};
use std::sync::Arc;
use tracing::debug;

/// What the UI should render next.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizStep {
    /// Quiz has no questions; nothing to play.
    Empty,
    /// Render question `index`.
    Next { index: usize },
    /// Last question answered; show the outcome.
    Finished(QuizOutcome),
}

pub struct QuizSession {
    quiz: Arc<Quiz>,
    mode: ScoringMode,
    current: usize,
    answers: Vec<Answer>,
    outcome: Option<QuizOutcome>,
}

impl QuizSession {
    /// Start a session. Returns the first step alongside it.
    pub fn start(quiz: Arc<Quiz>) -> (Self, QuizStep) {
        let mode = quiz.scoring_mode();
        let session = Self {
            quiz,
            mode,
            current: 0,
            answers: Vec::new(),
            outcome: None,
        };
        let step = session.first_step();
        (session, step)
    }

    fn first_step(&self) -> QuizStep {
        if self.quiz.questions.is_empty() {
            QuizStep::Empty
        } else {
            QuizStep::Next { index: 0 }
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// The question awaiting an answer; `None` when empty or finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.outcome.is_some() {
            return None;
        }
        self.quiz.questions.get(self.current)
    }

    /// (1-based position, total questions).
    pub fn progress(&self) -> (usize, usize) {
        let total = self.quiz.questions.len();
        ((self.current + 1).min(total), total)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Answer the current question with option `option_index`.
    ///
    /// The answer is recorded before deciding what comes next, so answering
    /// the last question always scores.
    pub fn select(&mut self, option_index: usize) -> Result<QuizStep, DomainError> {
        let question = self.current_question().ok_or_else(|| {
            DomainError::InvalidInput("no question awaiting an answer".to_string())
        })?;
        let option = question.options.get(option_index).ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "option {} out of range for question {}",
                option_index, question.id
            ))
        })?;
        let answer = self.mode.answer_for(option);
        debug!(quiz = %self.quiz.id, question = question.id, ?answer, "answer recorded");
        self.answers.push(answer);

        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
            return Ok(QuizStep::Next {
                index: self.current,
            });
        }

        let outcome = scoring::evaluate(&self.quiz, &self.answers);
        debug!(
            quiz = %self.quiz.id,
            tally = ?outcome.tally,
            result = outcome.result.as_ref().map(|r| r.title.as_str()),
            "quiz finished"
        );
        self.outcome = Some(outcome.clone());
        Ok(QuizStep::Finished(outcome))
    }

    /// Clear answers and go back to the first question.
    pub fn restart(&mut self) -> QuizStep {
        self.current = 0;
        self.answers.clear();
        self.outcome = None;
        self.first_step()
    }
}
