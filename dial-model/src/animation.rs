use fugit::MillisDurationU32;
use micromath::F32Ext;

use crate::{Angle, FULL_TURN};

pub const DEFAULT_ANIMATION_DURATION: MillisDurationU32 = MillisDurationU32::from_ticks(350);

const TURN: f32 = FULL_TURN as f32;

/// Which way the indicator travels when the target crosses 0°/360°.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationPath {
    #[default]
    ShortestArc,
    /// Straight from the old number to the new one, possibly the long way round.
    Direct,
}

/// Linear tween of the indicator angle.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorAnimation {
    from: f32,
    travel: f32,
    target: Angle,
    elapsed: MillisDurationU32,
    duration: MillisDurationU32,
    path: RotationPath,
}

impl IndicatorAnimation {
    pub fn new(angle: Angle, duration: MillisDurationU32, path: RotationPath) -> Self {
        Self {
            from: angle.into(),
            travel: 0.0,
            target: angle,
            elapsed: duration,
            duration,
            path,
        }
    }

    /// Starts a new tween from wherever the indicator is drawn right now.
    /// Returns `false` if `target` is already where it is heading.
    pub fn retarget(&mut self, target: Angle) -> bool {
        if target == self.target {
            return false;
        }
        let start = self.current();
        self.travel = match self.path {
            RotationPath::ShortestArc => shortest_travel(start, target.into()),
            RotationPath::Direct => f32::from(target) - start,
        };
        self.from = start;
        self.target = target;
        self.elapsed = MillisDurationU32::from_ticks(0);
        true
    }

    pub fn advance(&mut self, dt: MillisDurationU32) {
        let ticks = self
            .elapsed
            .ticks()
            .saturating_add(dt.ticks())
            .min(self.duration.ticks());
        self.elapsed = MillisDurationU32::from_ticks(ticks);
    }

    /// Displayed angle in degrees, in `[0, 360)`.
    pub fn current(&self) -> f32 {
        normalize(self.from + self.travel * self.progress())
    }

    pub fn target(&self) -> Angle {
        self.target
    }

    pub fn path(&self) -> RotationPath {
        self.path
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn progress(&self) -> f32 {
        if self.duration.ticks() == 0 {
            return 1.0;
        }
        self.elapsed.ticks() as f32 / self.duration.ticks() as f32
    }
}

fn normalize(degrees: f32) -> f32 {
    F32Ext::rem_euclid(degrees, TURN)
}

/// Signed travel along the shorter arc, in `(-180, 180]`.
fn shortest_travel(from: f32, to: f32) -> f32 {
    let delta = normalize(to - from);
    if delta > TURN / 2.0 {
        delta - TURN
    } else {
        delta
    }
}
