//! Command surface
//!
//! Text commands shared by the interactive loop and one-shot invocations.
//! Parsing is separate from execution so both can be tested without a
//! terminal.

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::explanations::{ExplanationCatalog, Situation};
use crate::history::HistoryStore;
use crate::router::{universal_emotions, EmotionRoute, EmotionRouter};
use crate::taxonomy::LevelId;

/// Most labels a single selection may carry
pub const MAX_SELECTION: usize = 3;

pub const HELP: &str = "\
Commands:
  route <emotion>, <emotion>, <emotion>   route up to three emotions
  search <text>                           ranked search over emotion words
  terms                                   list every searchable term
  why <level> [situation ...]             explain a level (e.g. why fear urge-to-vent)
  history                                 recently felt emotions
  clear                                   forget recently felt emotions
  help                                    this message
  quit                                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Route(Vec<String>),
    Search(String),
    Terms,
    Why { level: LevelId, situations: Vec<Situation> },
    History,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank input yields `None`.
    pub fn parse(input: &str) -> Result<Option<Command>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "route" => {
                let mut labels: Vec<String> = rest
                    .split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect();
                if labels.is_empty() {
                    bail!("Usage: route <emotion>, <emotion>, <emotion>");
                }
                if labels.len() > MAX_SELECTION {
                    warn!(
                        "Only the first {} emotions are used; ignoring {:?}",
                        MAX_SELECTION,
                        &labels[MAX_SELECTION..]
                    );
                    labels.truncate(MAX_SELECTION);
                }
                Command::Route(labels)
            }
            "search" => {
                if rest.is_empty() {
                    bail!("Usage: search <text>");
                }
                Command::Search(rest.to_string())
            }
            "why" => {
                let mut words = rest.split_whitespace();
                let Some(level) = words.next() else {
                    bail!("Usage: why <level> [situation ...]");
                };
                let level: LevelId = level.parse()?;
                let situations = words
                    .map(|w| w.parse::<Situation>())
                    .collect::<Result<Vec<_>, _>>()?;
                Command::Why { level, situations }
            }
            "terms" => Command::Terms,
            "history" => Command::History,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for a list.", other),
        };

        Ok(Some(command))
    }
}

/// Executes commands against a router, explanation catalog and history store
pub struct CommandRunner {
    router: EmotionRouter,
    explanations: ExplanationCatalog,
    history: Arc<dyn HistoryStore>,
}

impl CommandRunner {
    pub fn new(router: EmotionRouter, explanations: ExplanationCatalog, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            router,
            explanations,
            history,
        }
    }

    pub fn router(&self) -> &EmotionRouter {
        &self.router
    }

    /// Run a command and return the text to show. `Quit` renders nothing.
    pub async fn execute(&self, command: &Command) -> Result<String> {
        match command {
            Command::Route(labels) => self.route(labels).await,
            Command::Search(query) => Ok(self.search(query)),
            Command::Terms => Ok(self.terms()),
            Command::Why { level, situations } => Ok(self.why(*level, situations)),
            Command::History => self.recent().await,
            Command::Clear => {
                self.history.clear().await.context("Failed to clear history")?;
                Ok("History cleared.".to_string())
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    async fn route(&self, labels: &[String]) -> Result<String> {
        let route = self.router.get_primary_route(labels);

        let recognized = labels
            .iter()
            .find(|label| self.router.find_cluster_by_emotion(label).is_some());
        match recognized {
            Some(label) => {
                self.history
                    .add(label, route.primary_level_id)
                    .await
                    .context("Failed to record history")?;
            }
            None => debug!("No recognized emotion in {:?}; history untouched", labels),
        }

        let mut out = render_route(&route);
        let unknown: Vec<&str> = labels
            .iter()
            .map(String::as_str)
            .filter(|label| self.router.find_cluster_by_emotion(label).is_none())
            .collect();
        if !unknown.is_empty() {
            let _ = write!(out, "\nNot recognized: {}", unknown.join(", "));
        }
        Ok(out)
    }

    fn search(&self, query: &str) -> String {
        let matches = self.router.fuzzy_match_emotion(query);
        if matches.is_empty() {
            return format!(
                "No matches for '{}'. Common feelings: {}",
                query.trim(),
                universal_emotions().join(", ")
            );
        }

        let mut out = String::new();
        for m in &matches {
            let _ = writeln!(out, "{:>3}  {:<20} {} ({})", m.score, m.label, m.level_id.name(), m.cluster_id);
        }
        out.trim_end().to_string()
    }

    fn terms(&self) -> String {
        let terms = self.router.all_emotion_terms();
        let mut out = String::new();
        for term in &terms {
            let _ = writeln!(out, "{:<24} {:<12} {}", term.label, term.level_id.id(), term.cluster_id);
        }
        let _ = write!(out, "{} terms", terms.len());
        out
    }

    fn why(&self, level: LevelId, situations: &[Situation]) -> String {
        let mut out = format!(
            "{} ({}) · opposite: {}\n",
            level.name(),
            level.calibration(),
            level.antithesis()
        );

        match self.explanations.get(level) {
            Some(explanation) => {
                let _ = writeln!(out, "\nWhere it comes from:\n  {}", explanation.reservoir);
                let _ = writeln!(out, "\nThe trap:\n  {}", explanation.coping_trap(situations));
                let _ = write!(out, "\nAnother angle:\n  {}", explanation.third_angle);
            }
            None => {
                let _ = write!(
                    out,
                    "\nThe trap:\n  {}",
                    self.explanations.coping_trap_text(level, situations)
                );
            }
        }
        out
    }

    async fn recent(&self) -> Result<String> {
        let entries = self.history.recent().await.context("Failed to read history")?;
        if entries.is_empty() {
            return Ok("Nothing recorded yet.".to_string());
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|e| {
                format!(
                    "{}  {} -> {}",
                    e.timestamp.format("%Y-%m-%d %H:%M"),
                    e.emotion,
                    e.level_id.name()
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

fn render_route(route: &EmotionRoute) -> String {
    let primary = route.primary_level_id;
    let mut out = format!("Primary:    {} ({})", primary.name(), primary.calibration());

    if !route.secondary_level_ids.is_empty() {
        let names: Vec<&str> = route.secondary_level_ids.iter().map(LevelId::name).collect();
        let _ = write!(out, "\nSecondary:  {}", names.join(", "));
    }
    if !route.related_chapter_ids.is_empty() {
        let _ = write!(out, "\nChapters:   {}", route.related_chapter_ids.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InMemoryHistory;

    fn runner() -> (CommandRunner, Arc<InMemoryHistory>) {
        let history = Arc::new(InMemoryHistory::default());
        let runner = CommandRunner::new(EmotionRouter::standard(), ExplanationCatalog::standard(), history.clone());
        (runner, history)
    }

    #[test]
    fn test_parse_route() {
        let command = Command::parse("route Shame,  Guilt ,").unwrap().unwrap();
        assert_eq!(command, Command::Route(vec!["Shame".to_string(), "Guilt".to_string()]));

        let command = Command::parse("ROUTE a, b, c, d, e").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Route(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );

        assert!(Command::parse("route").is_err());
        assert!(Command::parse("route , ,").is_err());
    }

    #[test]
    fn test_parse_why() {
        let command = Command::parse("why Fear urge-to-vent overthinking").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Why {
                level: LevelId::Fear,
                situations: vec![Situation::UrgeToVent, Situation::Overthinking],
            }
        );

        assert!(Command::parse("why").is_err());
        assert!(Command::parse("why dread").is_err());
        assert!(Command::parse("why fear shouting").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("terms").unwrap(), Some(Command::Terms));
        assert_eq!(Command::parse("search  burn out ").unwrap(), Some(Command::Search("burn out".to_string())));
        assert!(Command::parse("search").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[tokio::test]
    async fn test_route_records_first_recognized_label() {
        let (runner, history) = runner();

        let command = Command::Route(vec!["glorp".to_string(), "Burned out".to_string(), "Anxious".to_string()]);
        let out = runner.execute(&command).await.unwrap();
        assert!(out.starts_with("Primary:    Apathy (50)"));
        assert!(out.contains("Secondary:  Fear"));
        assert!(out.ends_with("Not recognized: glorp"));

        let recent = history.recent().await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].emotion, "Burned out");
        assert_eq!(recent[0].level_id, LevelId::Apathy);
    }

    #[tokio::test]
    async fn test_unrecognized_route_leaves_history_alone() {
        let (runner, history) = runner();
        let out = runner.execute(&Command::Route(vec!["glorp".to_string()])).await.unwrap();
        assert!(out.starts_with("Primary:    Fear"));
        assert!(history.recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_suggests_universal_emotions() {
        let (runner, _) = runner();
        let out = runner.execute(&Command::Search("zzzz".to_string())).await.unwrap();
        assert!(out.contains("stressed, anxious, frustrated, sad, numb, ashamed"));

        let out = runner.execute(&Command::Search("anxious".to_string())).await.unwrap();
        assert!(out.lines().next().unwrap().starts_with("100  Anxious"));
    }

    #[tokio::test]
    async fn test_why_uses_situation_trap() {
        let (runner, _) = runner();
        let fear = ExplanationCatalog::standard().get(LevelId::Fear).cloned().unwrap();

        let command = Command::Why {
            level: LevelId::Fear,
            situations: vec![Situation::UrgeToEscape],
        };
        let out = runner.execute(&command).await.unwrap();
        assert!(out.contains(fear.coping_traps.escape.as_deref().unwrap()));
        assert!(out.contains(&fear.third_angle));

        let command = Command::Why {
            level: LevelId::Joy,
            situations: Vec::new(),
        };
        let out = runner.execute(&command).await.unwrap();
        assert!(out.starts_with("Joy (540)"));
        assert!(!out.contains("Another angle"));
    }

    #[tokio::test]
    async fn test_history_and_clear() {
        let (runner, _) = runner();
        assert_eq!(runner.execute(&Command::History).await.unwrap(), "Nothing recorded yet.");

        runner.execute(&Command::Route(vec!["Sad".to_string()])).await.unwrap();
        let out = runner.execute(&Command::History).await.unwrap();
        assert!(out.ends_with("Sad -> Grief"));

        runner.execute(&Command::Clear).await.unwrap();
        assert_eq!(runner.execute(&Command::History).await.unwrap(), "Nothing recorded yet.");
    }
}
