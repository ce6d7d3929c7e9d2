use crate::error::{GameSimError, Result};
use crate::game::{GameResult, GameTime, Play, PlayByPlayEvent, PlayKind};
use crate::utils::{clock_text, ordinal};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Built-in English templates. `{0}` and `{1}` take player names, quarter and
/// overtime lines take an ordinal.
pub fn default_templates() -> HashMap<PlayKind, String> {
    [
        (PlayKind::Injury, "{0} was injured!"),
        (PlayKind::Tov, "{0} turned the ball over"),
        (PlayKind::Stl, "{0} stole the ball from {1}"),
        (PlayKind::FgAtRim, "{0} made a dunk/layup"),
        (PlayKind::FgAtRimAndOne, "{0} made a dunk/layup and got fouled!"),
        (PlayKind::FgLowPost, "{0} made a low post shot"),
        (PlayKind::FgLowPostAndOne, "{0} made a low post shot and got fouled!"),
        (PlayKind::FgMidRange, "{0} made a mid-range shot"),
        (PlayKind::FgMidRangeAndOne, "{0} made a mid-range shot and got fouled!"),
        (PlayKind::Tp, "{0} made a three pointer shot"),
        (PlayKind::TpAndOne, "{0} made a three pointer and got fouled!"),
        (PlayKind::BlkAtRim, "{0} blocked {1}'s dunk/layup"),
        (PlayKind::BlkLowPost, "{0} blocked {1}'s low post shot"),
        (PlayKind::BlkMidRange, "{0} blocked {1}'s mid-range shot"),
        (PlayKind::BlkTp, "{0} blocked {1}'s three pointer"),
        (PlayKind::MissAtRim, "{0} missed a dunk/layup"),
        (PlayKind::MissLowPost, "{0} missed a low post shot"),
        (PlayKind::MissMidRange, "{0} missed a mid-range shot"),
        (PlayKind::MissTp, "{0} missed a three pointer"),
        (PlayKind::Orb, "{0} grabbed the offensive rebound"),
        (PlayKind::Drb, "{0} grabbed the defensive rebound"),
        (PlayKind::Ast, "(assist: {0})"),
        (PlayKind::Quarter, "Start of {0} quarter"),
        (PlayKind::Overtime, "Start of {0} overtime period"),
        (PlayKind::Ft, "{0} made a free throw"),
        (PlayKind::MissFt, "{0} missed a free throw"),
        (PlayKind::Pf, "Foul on {0}"),
        (PlayKind::FoulOut, "{0} fouled out"),
        (PlayKind::Sub, "Substitution: {0} for {1}"),
    ]
    .into_iter()
    .map(|(kind, text)| (kind, text.to_string()))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayByPlayLine {
    /// Team the line belongs to, `None` for period boundaries.
    pub team: Option<usize>,
    pub period: usize,
    /// Time left in the period, `M:SS`.
    pub clock: String,
    pub text: String,
}

impl Display for PlayByPlayLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Q{} {}] {}", self.period, self.clock, self.text)
    }
}

/// Turns the structured event log of a game into text.
pub struct PlayByPlayRenderer {
    templates: HashMap<PlayKind, String>,
}

impl Default for PlayByPlayRenderer {
    fn default() -> Self {
        PlayByPlayRenderer {
            templates: default_templates(),
        }
    }
}

impl PlayByPlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every play kind must have a template, otherwise the first missing one is reported.
    pub fn with_templates(templates: HashMap<PlayKind, String>) -> Result<Self> {
        if let Some(kind) = PlayKind::ALL.into_iter().find(|kind| !templates.contains_key(kind)) {
            return Err(GameSimError::MissingTemplate(kind));
        }

        Ok(PlayByPlayRenderer { templates })
    }

    /// Empty when the game was simulated without a play-by-play log.
    pub fn render(&self, result: &GameResult) -> Result<Vec<PlayByPlayLine>> {
        let Some(events) = result.play_by_play.as_ref() else {
            return Ok(Vec::new());
        };

        let mut lines: Vec<PlayByPlayLine> = Vec::new();

        for event in events {
            match event {
                PlayByPlayEvent::Play { time, team, play } => {
                    let names = Self::names(result, *team, play);
                    let text = self.fill(play.kind(), &names)?;

                    if let Play::Assist { .. } = play {
                        // Credited on the most recent made shot
                        if let Some(last) = lines.iter_mut().rev().find(|l| l.team.is_some()) {
                            last.text = format!("{} {}", last.text, text);
                        }
                        continue;
                    }

                    lines.push(Self::line(Some(*team), time, text));
                }
                PlayByPlayEvent::Quarter { time, quarter } => {
                    let text = self.fill(PlayKind::Quarter, &[ordinal(*quarter)])?;
                    lines.push(Self::line(None, time, text));
                }
                PlayByPlayEvent::Overtime { time, overtime } => {
                    let text = self.fill(PlayKind::Overtime, &[ordinal(*overtime)])?;
                    lines.push(Self::line(None, time, text));
                }
                PlayByPlayEvent::Init { .. }
                | PlayByPlayEvent::Stat { .. }
                | PlayByPlayEvent::Substitution { .. } => {}
            }
        }

        Ok(lines)
    }

    fn fill(&self, kind: PlayKind, names: &[String]) -> Result<String> {
        let template = self.templates.get(&kind).ok_or(GameSimError::MissingTemplate(kind))?;

        Ok(names
            .iter()
            .enumerate()
            .fold(template.clone(), |text, (i, name)| text.replace(&format!("{{{}}}", i), name)))
    }

    fn names(result: &GameResult, team: usize, play: &Play) -> Vec<String> {
        let own = &result.teams[team];
        let other = &result.teams[1 - team];

        let mut names = vec![own.player_name(play.player()).to_string()];
        if let Some((idx, opponent)) = play.other_player() {
            let roster = if opponent { other } else { own };
            names.push(roster.player_name(idx).to_string());
        }

        names
    }

    fn line(team: Option<usize>, time: &GameTime, text: String) -> PlayByPlayLine {
        PlayByPlayLine {
            team,
            period: time.period,
            clock: clock_text(time.clock),
            text,
        }
    }
}

/// Box score summary lines, one per player who got on the court.
pub fn box_score_lines(result: &GameResult, team: usize) -> Vec<String> {
    result.teams[team]
        .players
        .iter()
        .filter(|p| p.stat.min > 0.0)
        .sorted_by(|a, b| b.stat.min.total_cmp(&a.stat.min))
        .map(|p| {
            format!(
                "{:<24} {:>2} {:>5.1} min {:>3} pts {:>2}-{:<2} fg {:>2} reb {:>2} ast {:>+3}",
                p.name,
                p.pos.short_name(),
                p.stat.min,
                p.stat.pts,
                p.stat.fg,
                p.stat.fga,
                p.stat.trb(),
                p.stat.ast,
                p.pm
            )
        })
        .collect()
}
