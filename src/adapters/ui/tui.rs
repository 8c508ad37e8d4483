//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu: quizzes, red flag polls, "my flags" builder, shared links.

use crate::adapters::ui::progress;
use crate::domain::share;
use crate::domain::{
    DomainError, Flag, FlagKind, FlagSelection, Poll, Quiz, QuizOutcome, ScoringMode, ShareMessage,
    Vote,
};
use crate::ports::InputPort;
use crate::usecases::catalog_service::CATEGORY_FILTERS;
use crate::usecases::{
    CatalogService, FlagService, PollSession, QuizSession, QuizStep, SharedFlags, VoteReveal,
};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, MultiSelect, Select, Text};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Prompt option carrying a value next to its label.
#[derive(Clone)]
struct Choice<T> {
    value: T,
    label: String,
}

impl<T> Choice<T> {
    fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Quizzes,
    Polls,
    MyFlags,
    OpenLink,
    Quit,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AfterResult {
    Again,
    Share,
    Back,
}

/// Red prompt prefix and green highlight for every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("🚩").with_fg(Color::LightRed))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightGreen))
        .with_selected_checkbox(Styled::new("[x]").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// Esc goes back (`None`); Ctrl-C aborts the whole UI.
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Err(DomainError::Ui("interrupted".into())),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn select<T: Clone>(message: &str, choices: Vec<Choice<T>>) -> Result<Option<T>, DomainError> {
    Ok(answered(Select::new(message, choices).prompt())?.map(|c| c.value))
}

fn print_share(msg: &ShareMessage) {
    println!();
    println!("{} {}", "Share:".bold(), msg.title.as_str().italic());
    println!("{}", msg.to_clipboard());
    println!();
}

/// Unknown ids are a state: report "not found" and hand back `None`.
fn found<T>(res: Result<T, DomainError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_not_found() => {
            info!(error = %e, "lookup missed");
            println!("{}", e.to_string().yellow());
            println!("Pick one from the main menu instead.");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    catalog: Arc<CatalogService>,
    flags: Arc<FlagService>,
    site_url: String,
    quiz_transition: Duration,
    poll_reveal: Duration,
}

impl TuiInputPort {
    pub fn new(
        catalog: Arc<CatalogService>,
        flags: Arc<FlagService>,
        site_url: impl Into<String>,
        quiz_transition: Duration,
        poll_reveal: Duration,
    ) -> Self {
        Self {
            catalog,
            flags,
            site_url: site_url.into(),
            quiz_transition,
            poll_reveal,
        }
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quizzes
    // ─────────────────────────────────────────────────────────────────────────

    async fn browse_quizzes(&self) -> Result<(), DomainError> {
        let categories = CATEGORY_FILTERS
            .iter()
            .map(|(id, label)| Choice::new(*id, *label))
            .collect();
        let Some(category) = select("Category", categories)? else {
            return Ok(());
        };

        let quizzes = self.catalog.quizzes(category);
        if quizzes.is_empty() {
            println!("No quizzes in this category yet.");
            return Ok(());
        }
        let choices = quizzes
            .iter()
            .map(|q| Choice::new(Arc::clone(q), format!("{} {}  [{}]", q.emoji, q.title, q.category)))
            .collect();
        let Some(quiz) = select("Pick a quiz", choices)? else {
            return Ok(());
        };
        self.play_quiz(quiz).await
    }

    async fn play_quiz(&self, quiz: Arc<Quiz>) -> Result<(), DomainError> {
        info!(quiz = %quiz.id, "quiz started");
        println!();
        println!("{} {}", quiz.emoji, quiz.title.as_str().bold());
        if let Some(hook) = &quiz.hook {
            println!("{}", hook.as_str().italic());
        }

        let (mut session, mut step) = QuizSession::start(quiz);
        loop {
            match step {
                QuizStep::Empty => {
                    println!("This quiz has no questions yet.");
                    return Ok(());
                }
                QuizStep::Next { .. } => {
                    let Some(question) = session.current_question() else {
                        return Ok(());
                    };
                    let (pos, total) = session.progress();
                    println!();
                    progress::draw_step("Question", pos, total);
                    let choices = question
                        .options
                        .iter()
                        .enumerate()
                        .map(|(i, o)| Choice::new(i, o.text.clone()))
                        .collect();
                    let Some(index) = select(&question.text, choices)? else {
                        return Ok(());
                    };
                    step = session.select(index)?;
                    if matches!(step, QuizStep::Next { .. }) {
                        Self::pause(self.quiz_transition).await;
                    }
                }
                QuizStep::Finished(_) => {
                    let Some(outcome) = session.outcome().cloned() else {
                        return Ok(());
                    };
                    self.render_outcome(session.quiz(), &outcome);
                    let actions = vec![
                        Choice::new(AfterResult::Again, "Retake quiz"),
                        Choice::new(AfterResult::Share, "Share result"),
                        Choice::new(AfterResult::Back, "Back to menu"),
                    ];
                    match select("What next?", actions)? {
                        Some(AfterResult::Again) => step = session.restart(),
                        Some(AfterResult::Share) => match &outcome.result {
                            Some(result) => print_share(&share::quiz_result(
                                &self.site_url,
                                session.quiz(),
                                result,
                            )),
                            None => println!("Nothing to share without a result."),
                        },
                        Some(AfterResult::Back) | None => return Ok(()),
                    }
                }
            }
        }
    }

    fn render_outcome(&self, quiz: &Quiz, outcome: &QuizOutcome) {
        println!();
        match &outcome.result {
            Some(result) => {
                println!("{} {}", "You got:".bold(), result.title.as_str().bold().magenta());
                if !result.description.is_empty() {
                    println!("{}", result.description);
                }
            }
            None => {
                println!("{}", "We couldn't match a result to your answers.".yellow());
            }
        }
        if let Some(score) = outcome.score() {
            match outcome.mode {
                ScoringMode::Correctness => {
                    println!("Score: {} / {}", score, quiz.questions.len())
                }
                _ => println!("Score: {}", score),
            }
        }
        println!();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Polls
    // ─────────────────────────────────────────────────────────────────────────

    async fn browse_polls(&self) -> Result<(), DomainError> {
        let choices = self
            .catalog
            .polls()
            .iter()
            .map(|p| Choice::new(Arc::clone(p), format!("{} {}", p.emoji, p.title)))
            .collect::<Vec<_>>();
        if choices.is_empty() {
            println!("No polls yet.");
            return Ok(());
        }
        let Some(poll) = select("Pick a poll", choices)? else {
            return Ok(());
        };
        self.play_poll(poll).await
    }

    async fn play_poll(&self, poll: Arc<Poll>) -> Result<(), DomainError> {
        info!(poll = %poll.id, "poll started");
        println!();
        println!("{} {}", poll.emoji, poll.title.as_str().bold());
        if !poll.description.is_empty() {
            println!("{}", poll.description);
        }

        let mut session = PollSession::new(poll);
        if session.is_empty() {
            println!("This poll has no statements yet.");
            return Ok(());
        }
        loop {
            while !session.is_complete() {
                let index = session.current_index();
                let total = session.poll().items.len();
                let text = session.poll().items[index].text.clone();
                println!();
                progress::draw_step("Statement", index + 1, total);
                let votes = vec![
                    Choice::new(Vote::Yes, "🚩 Red Flag"),
                    Choice::new(Vote::No, "✓ Not a Flag"),
                ];
                let Some(vote) = select(&text, votes)? else {
                    return Ok(());
                };
                let reveal = session.record_vote(index, vote)?;
                Self::render_reveal(&reveal);
                Self::pause(self.poll_reveal).await;
            }

            let summary = session.summary();
            println!();
            println!(
                "You flagged {} out of {} as red flags",
                summary.flagged.to_string().bold().red(),
                summary.total.to_string().bold()
            );
            for verdict in &summary.verdicts {
                println!(
                    "  {} {}  {}",
                    verdict.marker(),
                    verdict.text,
                    format!("{}% agree", verdict.yes_percent).dim()
                );
            }

            let actions = vec![
                Choice::new(AfterResult::Again, "Vote again"),
                Choice::new(AfterResult::Share, "Share"),
                Choice::new(AfterResult::Back, "Back to menu"),
            ];
            match select("What next?", actions)? {
                Some(AfterResult::Again) => session.restart(),
                Some(AfterResult::Share) => {
                    print_share(&share::poll_summary(&self.site_url, session.poll(), &summary));
                    return Ok(());
                }
                Some(AfterResult::Back) | None => return Ok(()),
            }
        }
    }

    fn render_reveal(reveal: &VoteReveal) {
        println!("  🚩 Red Flag   {}", progress::percent_bar(reveal.yes_percent, 20).red());
        println!("  ✓ Not a Flag {}", progress::percent_bar(reveal.no_percent, 20).green());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // My flags
    // ─────────────────────────────────────────────────────────────────────────

    fn pick_flags(
        &self,
        kind: FlagKind,
        selection: &mut FlagSelection,
    ) -> Result<bool, DomainError> {
        let flags = self.catalog.flags(kind);
        let choices: Vec<Choice<u32>> = flags
            .iter()
            .filter_map(|f| {
                f.share_number(kind)
                    .map(|n| Choice::new(n, format!("{} {}", f.emoji, f.text)))
            })
            .collect();
        let defaults: Vec<usize> = choices
            .iter()
            .enumerate()
            .filter(|(_, c)| selection.ids(kind).contains(&c.value))
            .map(|(i, _)| i)
            .collect();
        let message = format!("My {} {}", kind, kind.marker());
        let picked = MultiSelect::new(&message, choices)
            .with_default(&defaults)
            .prompt();
        let Some(picked) = answered(picked)? else {
            return Ok(false);
        };

        let picked: BTreeSet<u32> = picked.into_iter().map(|c| c.value).collect();
        let changed: Vec<u32> = picked
            .symmetric_difference(selection.ids(kind))
            .copied()
            .collect();
        for n in changed {
            selection.toggle(kind, n);
        }
        Ok(true)
    }

    fn build_my_flags(&self) -> Result<(), DomainError> {
        let mut selection = FlagSelection::default();
        loop {
            if !self.pick_flags(FlagKind::Red, &mut selection)? {
                return Ok(());
            }
            if !self.pick_flags(FlagKind::Green, &mut selection)? {
                return Ok(());
            }
            if selection.is_empty() {
                println!("Pick at least one flag to make a card.");
                return Ok(());
            }

            let msg = self.flags.share(&selection);
            info!(
                red = selection.red.len(),
                green = selection.green.len(),
                "flag card created"
            );
            let (red, green) = self.flags.resolve(&selection);
            Self::render_card(&red, &green);
            print_share(&msg);

            let actions = vec![
                Choice::new(AfterResult::Again, "Edit flags"),
                Choice::new(AfterResult::Back, "Back to menu"),
            ];
            match select("What next?", actions)? {
                Some(AfterResult::Again) => continue,
                _ => return Ok(()),
            }
        }
    }

    fn render_card(red: &[Flag], green: &[Flag]) {
        println!();
        if !red.is_empty() {
            println!("{}", format!("🚩 My Red Flags ({})", red.len()).bold().red());
            for f in red {
                println!("  {} {}", f.emoji, f.text);
            }
        }
        if !green.is_empty() {
            println!("{}", format!("💚 My Green Flags ({})", green.len()).bold().green());
            for f in green {
                println!("  {} {}", f.emoji, f.text);
            }
        }
    }

    fn show_shared(&self, link: &str) -> Result<(), DomainError> {
        match self.flags.open_shared(link) {
            Ok(shared) => {
                self.render_shared(&shared);
                Ok(())
            }
            Err(e) if e.is_bad_link() => {
                info!(error = %e, "shared link rejected");
                println!("{}", "This link is invalid or has expired.".yellow());
                println!("Create your own from \"My flags\" in the main menu.");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn render_shared(&self, shared: &SharedFlags) {
        Self::render_card(&shared.red, &shared.green);
        print_share(&self.flags.reshare(shared));
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let menu = vec![
                Choice::new(MenuAction::Quizzes, "🧩 Quizzes"),
                Choice::new(MenuAction::Polls, "🚩 Red flag polls"),
                Choice::new(MenuAction::MyFlags, "💚 My flags"),
                Choice::new(MenuAction::OpenLink, "🔗 Open a shared link"),
                Choice::new(MenuAction::Quit, "Quit"),
            ];
            let action = match select("Main menu", menu)? {
                Some(a) => a,
                None => MenuAction::Quit,
            };
            match action {
                MenuAction::Quizzes => self.browse_quizzes().await?,
                MenuAction::Polls => self.browse_polls().await?,
                MenuAction::MyFlags => self.build_my_flags()?,
                MenuAction::OpenLink => {
                    let link = answered(Text::new("Paste the link or code:").prompt())?;
                    if let Some(link) = link {
                        self.show_shared(&link)?;
                    }
                }
                MenuAction::Quit => return Ok(()),
            }
        }
    }

    async fn open_quiz(&self, id: &str) -> Result<(), DomainError> {
        let Some(quiz) = found(self.catalog.quiz(id))? else {
            return Ok(());
        };
        self.play_quiz(quiz).await
    }

    async fn open_poll(&self, id: &str) -> Result<(), DomainError> {
        let Some(poll) = found(self.catalog.poll(id))? else {
            return Ok(());
        };
        self.play_poll(poll).await
    }

    async fn open_shared(&self, link: &str) -> Result<(), DomainError> {
        self.show_shared(link)
    }
}
