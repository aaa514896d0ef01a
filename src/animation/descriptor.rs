use crate::foundation::error::{ScrimError, ScrimResult};

/// Repeat policy of an animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play once.
    Once,
    /// Repeat until removed.
    Forever {
        /// Play alternately forward and backward.
        autoreverse: bool,
    },
    /// Repeat a fixed number of times.
    Times {
        /// Number of repetitions.
        count: u32,
        /// Play alternately forward and backward.
        autoreverse: bool,
    },
}

impl Repeat {
    /// Whether repetitions alternate direction.
    pub fn autoreverses(self) -> bool {
        match self {
            Repeat::Once => false,
            Repeat::Forever { autoreverse } => autoreverse,
            Repeat::Times { autoreverse, .. } => autoreverse,
        }
    }

    /// Repeat count in native-animation terms: 0 = play once,
    /// `f32::MAX` = forever.
    pub fn repeat_count(self) -> f32 {
        match self {
            Repeat::Once => 0.0,
            Repeat::Forever { .. } => f32::MAX,
            Repeat::Times { count, .. } => count as f32,
        }
    }
}

/// Parameters of the spring timing model.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringParams {
    /// Mass attached to the spring.
    pub mass: f64,
    /// Spring stiffness coefficient.
    pub stiffness: f64,
    /// Viscous damping coefficient.
    pub damping: f64,
    /// Initial velocity of the attached object.
    pub initial_velocity: f64,
}

impl SpringParams {
    /// Build validated spring parameters.
    ///
    /// Mass and stiffness must be positive, damping strictly positive (an
    /// undamped spring never settles), and all values finite.
    pub fn new(
        mass: f64,
        stiffness: f64,
        damping: f64,
        initial_velocity: f64,
    ) -> ScrimResult<Self> {
        if !(mass.is_finite() && stiffness.is_finite() && damping.is_finite())
            || !initial_velocity.is_finite()
        {
            return Err(ScrimError::animation("spring parameters must be finite"));
        }
        if mass <= 0.0 {
            return Err(ScrimError::animation("spring mass must be > 0"));
        }
        if stiffness <= 0.0 {
            return Err(ScrimError::animation("spring stiffness must be > 0"));
        }
        if damping <= 0.0 {
            return Err(ScrimError::animation("spring damping must be > 0"));
        }
        Ok(Self {
            mass,
            stiffness,
            damping,
            initial_velocity,
        })
    }

    /// Time for the spring envelope to decay below a fixed rest threshold.
    ///
    /// Used as the effective duration of a spring-timed animation; the
    /// descriptor's nominal duration is ignored for springs.
    pub fn settling_duration(&self) -> f64 {
        const REST_THRESHOLD: f64 = 1e-3;

        let beta = self.damping / (2.0 * self.mass);
        let omega0 = (self.stiffness / self.mass).sqrt();
        // Underdamped and critically damped springs decay at `beta`;
        // overdamped springs decay at the slower characteristic root.
        let rate = if beta <= omega0 {
            beta
        } else {
            beta - (beta * beta - omega0 * omega0).sqrt()
        };
        (1.0 / REST_THRESHOLD).ln() / rate
    }
}

/// Easing curve of an animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Curve {
    /// The host's default curve.
    Default,
    /// Constant velocity.
    Linear,
    /// Accelerating from rest.
    EaseIn,
    /// Decelerating to rest.
    EaseOut,
    /// Accelerating then decelerating.
    EaseInOut,
    /// Physically modelled spring timing.
    Spring(SpringParams),
}

impl Curve {
    /// Whether this curve is spring-timed.
    pub fn is_spring(self) -> bool {
        matches!(self, Curve::Spring(_))
    }
}

/// Immutable timing description of a transition animation.
///
/// Builder-style modifiers return a new value; the default is a
/// 0.3-second single pass on the host's default curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    /// Delay before the animation begins, in seconds.
    pub delay: f64,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Nominal duration in seconds (springs derive their own).
    pub duration: f64,
    /// Repeat policy.
    pub repeat: Repeat,
    /// Easing curve.
    pub curve: Curve,
}

impl Default for AnimationDescriptor {
    fn default() -> Self {
        Self {
            delay: 0.0,
            speed: 1.0,
            duration: 0.3,
            repeat: Repeat::Once,
            curve: Curve::Default,
        }
    }
}

impl AnimationDescriptor {
    fn with_curve(curve: Curve) -> Self {
        Self {
            curve,
            ..Self::default()
        }
    }

    fn with_curve_duration(curve: Curve, duration: f64) -> Self {
        Self {
            curve,
            duration,
            ..Self::default()
        }
    }

    /// Linear timing at the default duration.
    pub fn linear() -> Self {
        Self::with_curve(Curve::Linear)
    }

    /// Linear timing with an explicit duration.
    pub fn linear_with_duration(duration: f64) -> Self {
        Self::with_curve_duration(Curve::Linear, duration)
    }

    /// Ease-in timing at the default duration.
    pub fn ease_in() -> Self {
        Self::with_curve(Curve::EaseIn)
    }

    /// Ease-in timing with an explicit duration.
    pub fn ease_in_with_duration(duration: f64) -> Self {
        Self::with_curve_duration(Curve::EaseIn, duration)
    }

    /// Ease-out timing at the default duration.
    pub fn ease_out() -> Self {
        Self::with_curve(Curve::EaseOut)
    }

    /// Ease-out timing with an explicit duration.
    pub fn ease_out_with_duration(duration: f64) -> Self {
        Self::with_curve_duration(Curve::EaseOut, duration)
    }

    /// Ease-in-out timing at the default duration.
    pub fn ease_in_out() -> Self {
        Self::with_curve(Curve::EaseInOut)
    }

    /// Ease-in-out timing with an explicit duration.
    pub fn ease_in_out_with_duration(duration: f64) -> Self {
        Self::with_curve_duration(Curve::EaseInOut, duration)
    }

    /// Spring timing from validated parameters.
    pub fn spring(params: SpringParams) -> Self {
        Self::with_curve(Curve::Spring(params))
    }

    /// Return a copy with the given start delay.
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Return a copy with the given speed multiplier.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Return a copy with the given nominal duration.
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Return a copy repeating forever.
    pub fn repeat_forever(mut self, autoreverse: bool) -> Self {
        self.repeat = Repeat::Forever { autoreverse };
        self
    }

    /// Return a copy repeating `count` times.
    pub fn repeat_count(mut self, count: u32, autoreverse: bool) -> Self {
        self.repeat = Repeat::Times { count, autoreverse };
        self
    }

    /// Duration the animation actually runs for: the spring settling time
    /// for spring curves, the nominal duration otherwise.
    pub fn effective_duration(&self) -> f64 {
        match self.curve {
            Curve::Spring(params) => params.settling_duration(),
            _ => self.duration,
        }
    }

    /// Wall-clock time from request to completion: delay plus effective
    /// duration.
    pub fn total_duration(&self) -> f64 {
        self.delay + self.effective_duration()
    }

    /// Validate the descriptor as configuration input.
    pub fn validate(&self) -> ScrimResult<()> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ScrimError::validation(
                "animation delay must be finite and >= 0",
            ));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ScrimError::validation("animation speed must be > 0"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ScrimError::validation(
                "animation duration must be finite and >= 0",
            ));
        }
        if let Repeat::Times { count: 0, .. } = self.repeat {
            return Err(ScrimError::validation("repeat count must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
