//! Ripple propagation and height clamping parameters.

/// Wave field physics parameters
#[derive(Debug, Clone)]
pub struct RipplePhysics {
    /// Radius at which a ripple stops carrying full energy (local units)
    /// Also the falloff distance: amplitude reaches zero at this distance
    pub max_radius: f32,

    /// Radius growth per tick (local units per frame)
    pub radius_increment: f32,

    /// Fade multiplier applied each tick once the radius exceeds `max_radius`
    pub fade_decay: f32,

    /// Ripples with fade at or below this are removed
    pub fade_expiry_threshold: f32,

    /// Maximum displacement from the baseline height (local units)
    pub max_deviation: f32,

    /// Phase advance per unit of distance from the ripple center (radians)
    pub distance_phase_scale: f32,

    /// Phase retreat per unit of ripple radius (radians)
    pub radius_phase_scale: f32,

    /// Cap on concurrent ripples; spawning past it evicts the oldest
    /// `None` leaves the active set unbounded
    pub max_ripples: Option<usize>,
}

impl Default for RipplePhysics {
    fn default() -> Self {
        Self {
            max_radius: 100.0,
            radius_increment: 0.5,
            fade_decay: 0.98,
            fade_expiry_threshold: 0.01,
            max_deviation: 2.0,
            distance_phase_scale: 0.2,
            radius_phase_scale: 0.05,
            max_ripples: None,
        }
    }
}

impl RipplePhysics {
    /// Ticks a ripple spends growing before its fade starts decaying
    pub fn growth_ticks(&self) -> u32 {
        if self.radius_increment <= 0.0 {
            return u32::MAX;
        }
        ((self.max_radius / self.radius_increment).floor() as u32).saturating_add(1)
    }

    /// Decaying ticks until a fresh fade of 1.0 drops to the expiry threshold
    pub fn fade_ticks(&self) -> u32 {
        if self.fade_decay <= 0.0 {
            return 1;
        }
        if self.fade_decay >= 1.0 || self.fade_expiry_threshold <= 0.0 {
            return u32::MAX;
        }
        (self.fade_expiry_threshold.ln() / self.fade_decay.ln()).ceil() as u32
    }
}
