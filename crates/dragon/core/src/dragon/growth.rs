//! Age counter and the derived life stage / visual scale.

use crate::config::LifeStageConfig;
use crate::state::LifeStage;

impl LifeStageConfig {
    /// Life stage for an age in ticks.
    pub fn stage_at(&self, ticks_alive: u32) -> LifeStage {
        if ticks_alive >= self.adult_start {
            LifeStage::Adult
        } else if ticks_alive >= self.juvenile_start {
            LifeStage::Juvenile
        } else {
            LifeStage::Hatchling
        }
    }

    /// Visual scale for an age in ticks.
    ///
    /// Piecewise linear: `hatchling_scale -> juvenile_scale` over the
    /// hatchling range, `juvenile_scale -> 1.0` over the juvenile range, then
    /// constant.
    pub fn scale_at(&self, ticks_alive: u32) -> f32 {
        match self.stage_at(ticks_alive) {
            LifeStage::Adult => 1.0,
            LifeStage::Juvenile => {
                let progress = (ticks_alive - self.juvenile_start) as f32
                    / (self.adult_start - self.juvenile_start) as f32;
                lerp(self.juvenile_scale, 1.0, progress)
            }
            LifeStage::Hatchling => {
                let progress = ticks_alive as f32 / self.juvenile_start as f32;
                lerp(self.hatchling_scale, self.juvenile_scale, progress)
            }
        }
    }
}

fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}

/// Stage transition observed by the growth controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageChange {
    pub from: LifeStage,
    pub to: LifeStage,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthController {
    curve: LifeStageConfig,
    ticks_alive: u32,
    stage: LifeStage,
    scale: f32,
}

impl GrowthController {
    pub fn new(curve: LifeStageConfig, ticks_alive: u32) -> Self {
        Self {
            curve,
            ticks_alive,
            stage: curve.stage_at(ticks_alive),
            scale: curve.scale_at(ticks_alive),
        }
    }

    /// Fully grown controller (`ticks_alive = adult_start`).
    pub fn adult(curve: LifeStageConfig) -> Self {
        Self::new(curve, curve.adult_start)
    }

    pub fn ticks_alive(&self) -> u32 {
        self.ticks_alive
    }

    pub fn stage(&self) -> LifeStage {
        self.stage
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn curve(&self) -> &LifeStageConfig {
        &self.curve
    }

    /// Advances one tick. The counter stops at `adult_start`.
    pub fn tick(&mut self) -> Option<StageChange> {
        if self.ticks_alive < self.curve.adult_start {
            self.ticks_alive += 1;
        }
        self.rederive()
    }

    /// Overrides the age (load, commands) and re-derives immediately.
    pub fn set_ticks_alive(&mut self, ticks_alive: u32) -> Option<StageChange> {
        self.ticks_alive = ticks_alive;
        self.rederive()
    }

    fn rederive(&mut self) -> Option<StageChange> {
        let from = self.stage;
        self.stage = self.curve.stage_at(self.ticks_alive);
        self.scale = self.curve.scale_at(self.ticks_alive);
        (from != self.stage).then_some(StageChange {
            from,
            to: self.stage,
        })
    }
}
