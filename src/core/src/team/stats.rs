use serde::{Deserialize, Serialize};

/// Counting stats tracked for players and rolled into team totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Gs,
    Fg,
    Fga,
    FgAtRim,
    FgaAtRim,
    FgLowPost,
    FgaLowPost,
    FgMidRange,
    FgaMidRange,
    Tp,
    Tpa,
    Ft,
    Fta,
    Orb,
    Drb,
    Ast,
    Tov,
    Stl,
    Blk,
    Ba,
    Pf,
    Pts,
}

impl Stat {
    /// Stats that stay on the player line and are never added to the team total.
    pub fn is_player_only(self) -> bool {
        matches!(self, Stat::Gs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    pub gs: u32,
    pub min: f64,
    pub fg: u32,
    pub fga: u32,
    pub fg_at_rim: u32,
    pub fga_at_rim: u32,
    pub fg_low_post: u32,
    pub fga_low_post: u32,
    pub fg_mid_range: u32,
    pub fga_mid_range: u32,
    pub tp: u32,
    pub tpa: u32,
    pub ft: u32,
    pub fta: u32,
    pub orb: u32,
    pub drb: u32,
    pub ast: u32,
    pub tov: u32,
    pub stl: u32,
    pub blk: u32,
    pub ba: u32,
    pub pf: u32,
    pub pts: u32,
}

impl StatLine {
    fn counter_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Gs => &mut self.gs,
            Stat::Fg => &mut self.fg,
            Stat::Fga => &mut self.fga,
            Stat::FgAtRim => &mut self.fg_at_rim,
            Stat::FgaAtRim => &mut self.fga_at_rim,
            Stat::FgLowPost => &mut self.fg_low_post,
            Stat::FgaLowPost => &mut self.fga_low_post,
            Stat::FgMidRange => &mut self.fg_mid_range,
            Stat::FgaMidRange => &mut self.fga_mid_range,
            Stat::Tp => &mut self.tp,
            Stat::Tpa => &mut self.tpa,
            Stat::Ft => &mut self.ft,
            Stat::Fta => &mut self.fta,
            Stat::Orb => &mut self.orb,
            Stat::Drb => &mut self.drb,
            Stat::Ast => &mut self.ast,
            Stat::Tov => &mut self.tov,
            Stat::Stl => &mut self.stl,
            Stat::Blk => &mut self.blk,
            Stat::Ba => &mut self.ba,
            Stat::Pf => &mut self.pf,
            Stat::Pts => &mut self.pts,
        }
    }

    pub fn add(&mut self, stat: Stat, amount: u32) {
        *self.counter_mut(stat) += amount;
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Gs => self.gs,
            Stat::Fg => self.fg,
            Stat::Fga => self.fga,
            Stat::FgAtRim => self.fg_at_rim,
            Stat::FgaAtRim => self.fga_at_rim,
            Stat::FgLowPost => self.fg_low_post,
            Stat::FgaLowPost => self.fga_low_post,
            Stat::FgMidRange => self.fg_mid_range,
            Stat::FgaMidRange => self.fga_mid_range,
            Stat::Tp => self.tp,
            Stat::Tpa => self.tpa,
            Stat::Ft => self.ft,
            Stat::Fta => self.fta,
            Stat::Orb => self.orb,
            Stat::Drb => self.drb,
            Stat::Ast => self.ast,
            Stat::Tov => self.tov,
            Stat::Stl => self.stl,
            Stat::Blk => self.blk,
            Stat::Ba => self.ba,
            Stat::Pf => self.pf,
            Stat::Pts => self.pts,
        }
    }

    pub fn trb(&self) -> u32 {
        self.orb + self.drb
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    #[serde(flatten)]
    pub line: StatLine,
    pub pm: i32,

    /// 1 is fully rested, 0 is exhausted.
    pub energy: f64,
    pub court_time: f64,
    pub bench_time: f64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        PlayerStats {
            line: StatLine::default(),
            pm: 0,
            energy: 1.0,
            court_time: 0.0,
            bench_time: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    #[serde(flatten)]
    pub line: StatLine,
    pub pts_qtrs: Vec<u32>,
}

impl Default for TeamStats {
    fn default() -> Self {
        TeamStats {
            line: StatLine::default(),
            pts_qtrs: vec![0],
        }
    }
}

impl TeamStats {
    pub fn start_period(&mut self) {
        self.pts_qtrs.push(0);
    }

    pub fn add_period_points(&mut self, amount: u32) {
        match self.pts_qtrs.last_mut() {
            Some(points) => *points += amount,
            None => self.pts_qtrs.push(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut line = StatLine::default();
        line.add(Stat::Pts, 3);
        line.add(Stat::Pts, 2);
        line.add(Stat::Orb, 1);
        line.add(Stat::Drb, 4);

        assert_eq!(line.get(Stat::Pts), 5);
        assert_eq!(line.trb(), 5);
        assert_eq!(line.get(Stat::Ast), 0);
    }

    #[test]
    fn test_player_only_stats() {
        assert!(Stat::Gs.is_player_only());
        assert!(!Stat::Pts.is_player_only());
        assert!(!Stat::Pf.is_player_only());
    }

    #[test]
    fn test_player_stats_start_rested() {
        let stats = PlayerStats::default();
        assert_eq!(stats.energy, 1.0);
        assert_eq!(stats.pm, 0);
    }

    #[test]
    fn test_period_points() {
        let mut stats = TeamStats::default();
        stats.add_period_points(10);
        stats.start_period();
        stats.add_period_points(7);

        assert_eq!(stats.pts_qtrs, vec![10, 7]);
    }

    #[test]
    fn test_stat_line_serializes_camel_case() {
        let mut line = StatLine::default();
        line.add(Stat::FgaAtRim, 2);

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["fgaAtRim"], 2);
    }
}
