use serde::{Deserialize, Serialize};

/// Individual composite ratings, each roughly in `[0, 1]`.
///
/// These are fixed for the whole game. Fatigue is applied when a rating is read,
/// never written back here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompositeRatings {
    pub dribbling: f64,
    pub passing: f64,
    pub rebounding: f64,
    pub defense: f64,
    pub defense_perimeter: f64,
    pub defense_interior: f64,
    pub blocking: f64,
    pub usage: f64,
    pub turnovers: f64,
    pub stealing: f64,
    pub fouling: f64,
    pub shooting_at_rim: f64,
    pub shooting_low_post: f64,
    pub shooting_mid_range: f64,
    pub shooting_three_pointer: f64,
    pub shooting_ft: f64,
    pub athleticism: f64,
    pub endurance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompositeRating {
    Dribbling,
    Passing,
    Rebounding,
    Defense,
    DefensePerimeter,
    DefenseInterior,
    Blocking,
    Usage,
    Turnovers,
    Stealing,
    Fouling,
    ShootingAtRim,
    ShootingLowPost,
    ShootingMidRange,
    ShootingThreePointer,
    ShootingFt,
    Athleticism,
    Endurance,
}

impl CompositeRating {
    pub const ALL: [CompositeRating; 18] = [
        CompositeRating::Dribbling,
        CompositeRating::Passing,
        CompositeRating::Rebounding,
        CompositeRating::Defense,
        CompositeRating::DefensePerimeter,
        CompositeRating::DefenseInterior,
        CompositeRating::Blocking,
        CompositeRating::Usage,
        CompositeRating::Turnovers,
        CompositeRating::Stealing,
        CompositeRating::Fouling,
        CompositeRating::ShootingAtRim,
        CompositeRating::ShootingLowPost,
        CompositeRating::ShootingMidRange,
        CompositeRating::ShootingThreePointer,
        CompositeRating::ShootingFt,
        CompositeRating::Athleticism,
        CompositeRating::Endurance,
    ];
}

impl CompositeRatings {
    /// Same value for every rating.
    pub fn flat(value: f64) -> Self {
        let mut ratings = CompositeRatings::default();
        for rating in CompositeRating::ALL {
            *ratings.get_mut(rating) = value;
        }
        ratings
    }

    pub fn get(&self, rating: CompositeRating) -> f64 {
        match rating {
            CompositeRating::Dribbling => self.dribbling,
            CompositeRating::Passing => self.passing,
            CompositeRating::Rebounding => self.rebounding,
            CompositeRating::Defense => self.defense,
            CompositeRating::DefensePerimeter => self.defense_perimeter,
            CompositeRating::DefenseInterior => self.defense_interior,
            CompositeRating::Blocking => self.blocking,
            CompositeRating::Usage => self.usage,
            CompositeRating::Turnovers => self.turnovers,
            CompositeRating::Stealing => self.stealing,
            CompositeRating::Fouling => self.fouling,
            CompositeRating::ShootingAtRim => self.shooting_at_rim,
            CompositeRating::ShootingLowPost => self.shooting_low_post,
            CompositeRating::ShootingMidRange => self.shooting_mid_range,
            CompositeRating::ShootingThreePointer => self.shooting_three_pointer,
            CompositeRating::ShootingFt => self.shooting_ft,
            CompositeRating::Athleticism => self.athleticism,
            CompositeRating::Endurance => self.endurance,
        }
    }

    pub fn get_mut(&mut self, rating: CompositeRating) -> &mut f64 {
        match rating {
            CompositeRating::Dribbling => &mut self.dribbling,
            CompositeRating::Passing => &mut self.passing,
            CompositeRating::Rebounding => &mut self.rebounding,
            CompositeRating::Defense => &mut self.defense,
            CompositeRating::DefensePerimeter => &mut self.defense_perimeter,
            CompositeRating::DefenseInterior => &mut self.defense_interior,
            CompositeRating::Blocking => &mut self.blocking,
            CompositeRating::Usage => &mut self.usage,
            CompositeRating::Turnovers => &mut self.turnovers,
            CompositeRating::Stealing => &mut self.stealing,
            CompositeRating::Fouling => &mut self.fouling,
            CompositeRating::ShootingAtRim => &mut self.shooting_at_rim,
            CompositeRating::ShootingLowPost => &mut self.shooting_low_post,
            CompositeRating::ShootingMidRange => &mut self.shooting_mid_range,
            CompositeRating::ShootingThreePointer => &mut self.shooting_three_pointer,
            CompositeRating::ShootingFt => &mut self.shooting_ft,
            CompositeRating::Athleticism => &mut self.athleticism,
            CompositeRating::Endurance => &mut self.endurance,
        }
    }

    /// Multiplies every rating by `factor` (home court advantage).
    pub fn scale(&mut self, factor: f64) {
        for rating in CompositeRating::ALL {
            *self.get_mut(rating) *= factor;
        }
    }
}

/// Team-level ratings consumed by the possession logic. Recomputed every possession
/// from the five players on the court.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRatings {
    pub dribbling: f64,
    pub passing: f64,
    pub rebounding: f64,
    pub defense: f64,
    pub defense_perimeter: f64,
    pub blocking: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Synergy {
    pub off: f64,
    pub def: f64,
    pub reb: f64,
}
