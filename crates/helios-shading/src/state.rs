//! Shading mode controller.
//!
//! Tracks which of the three shading strategies is active plus the two
//! orthogonal detail-map toggles. The controller is a plain value: the input
//! layer drives the event methods on key presses and the render path reads
//! `(mode, normal_map_enabled, bump_map_enabled)` once per frame to pick
//! shader branches and texture bindings. It never touches GPU state, so it
//! is testable without a device.

/// The three shading strategies, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Analytic Phong: reflection-vector specular.
    Phong,
    /// Analytic Blinn-Phong: half-vector specular.
    BlinnPhong,
    /// Blinn-Phong approximated by precomputed lookup tables.
    LutBlinnPhong,
}

impl ShadingMode {
    /// The next mode in the cycle, wrapping after the last.
    pub fn next(self) -> Self {
        match self {
            Self::Phong => Self::BlinnPhong,
            Self::BlinnPhong => Self::LutBlinnPhong,
            Self::LutBlinnPhong => Self::Phong,
        }
    }

    /// Display label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phong => "Phong",
            Self::BlinnPhong => "Blinn-Phong",
            Self::LutBlinnPhong => "LUT Blinn-Phong",
        }
    }

    /// Branch selector for the shader uniform.
    pub fn shader_index(&self) -> u32 {
        match self {
            Self::Phong => 0,
            Self::BlinnPhong => 1,
            Self::LutBlinnPhong => 2,
        }
    }
}

/// Active shading strategy plus detail-map toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadingState {
    mode: ShadingMode,
    normal_map_enabled: bool,
    bump_map_enabled: bool,
}

impl ShadingState {
    /// Initial state: analytic Phong, both detail layers off.
    pub fn new() -> Self {
        Self {
            mode: ShadingMode::Phong,
            normal_map_enabled: false,
            bump_map_enabled: false,
        }
    }

    /// Currently active shading mode.
    pub fn mode(&self) -> ShadingMode {
        self.mode
    }

    /// Whether tangent-space normal mapping is requested.
    pub fn normal_map_enabled(&self) -> bool {
        self.normal_map_enabled
    }

    /// Whether height-based bump mapping is requested.
    pub fn bump_map_enabled(&self) -> bool {
        self.bump_map_enabled
    }

    /// Advance to the next shading mode in the cycle.
    pub fn advance_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Flip the normal-map toggle.
    pub fn toggle_normal_map(&mut self) {
        self.normal_map_enabled = !self.normal_map_enabled;
    }

    /// Flip the bump-map toggle.
    pub fn toggle_bump_map(&mut self) {
        self.bump_map_enabled = !self.bump_map_enabled;
    }

    /// Headline describing the active configuration.
    ///
    /// Derived on read rather than cached, so it cannot go stale. The
    /// normal-map suffix appears only when the toggle is set and the mode is
    /// not the LUT approximation (which ignores the normal map); the bump-map
    /// suffix follows its toggle alone.
    pub fn headline(&self) -> String {
        let mut headline = String::from(self.mode.label());
        if self.normal_map_enabled && self.mode != ShadingMode::LutBlinnPhong {
            headline.push_str(" + normal map");
        }
        if self.bump_map_enabled {
            headline.push_str(" + bump map");
        }
        headline
    }
}

impl Default for ShadingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ShadingState::new();
        assert_eq!(state.mode(), ShadingMode::Phong);
        assert!(!state.normal_map_enabled());
        assert!(!state.bump_map_enabled());
    }

    #[test]
    fn test_mode_cycle_returns_to_start_after_three() {
        let mut state = ShadingState::new();
        state.advance_mode();
        assert_eq!(state.mode(), ShadingMode::BlinnPhong);
        state.advance_mode();
        assert_eq!(state.mode(), ShadingMode::LutBlinnPhong);
        state.advance_mode();
        assert_eq!(state.mode(), ShadingMode::Phong);
    }

    #[test]
    fn test_toggle_normal_map_is_involution() {
        let mut state = ShadingState::new();
        state.toggle_normal_map();
        assert!(state.normal_map_enabled());
        state.toggle_normal_map();
        assert!(!state.normal_map_enabled());
    }

    #[test]
    fn test_toggle_bump_map_is_involution() {
        let mut state = ShadingState::new();
        state.toggle_bump_map();
        assert!(state.bump_map_enabled());
        state.toggle_bump_map();
        assert!(!state.bump_map_enabled());
    }

    #[test]
    fn test_toggles_are_independent_of_mode() {
        let mut state = ShadingState::new();
        state.toggle_normal_map();
        state.advance_mode();
        state.advance_mode();
        assert!(state.normal_map_enabled());
        assert!(!state.bump_map_enabled());
    }

    #[test]
    fn test_headline_plain_modes() {
        let mut state = ShadingState::new();
        assert_eq!(state.headline(), "Phong");
        state.advance_mode();
        assert_eq!(state.headline(), "Blinn-Phong");
        state.advance_mode();
        assert_eq!(state.headline(), "LUT Blinn-Phong");
    }

    #[test]
    fn test_headline_normal_map_suffix_not_shown_in_lut_mode() {
        let mut state = ShadingState::new();
        state.toggle_normal_map();
        assert_eq!(state.headline(), "Phong + normal map");

        state.advance_mode();
        assert_eq!(state.headline(), "Blinn-Phong + normal map");

        // The LUT path ignores the normal map, so the suffix disappears even
        // though the toggle stays set.
        state.advance_mode();
        assert!(state.normal_map_enabled());
        assert_eq!(state.headline(), "LUT Blinn-Phong");

        state.advance_mode();
        assert_eq!(state.headline(), "Phong + normal map");
    }

    #[test]
    fn test_headline_bump_map_suffix_in_every_mode() {
        let mut state = ShadingState::new();
        state.toggle_bump_map();
        assert_eq!(state.headline(), "Phong + bump map");
        state.advance_mode();
        state.advance_mode();
        assert_eq!(state.headline(), "LUT Blinn-Phong + bump map");
    }

    #[test]
    fn test_headline_both_suffixes() {
        let mut state = ShadingState::new();
        state.toggle_normal_map();
        state.toggle_bump_map();
        assert_eq!(state.headline(), "Phong + normal map + bump map");
    }

    #[test]
    fn test_shader_index_matches_cycle_order() {
        assert_eq!(ShadingMode::Phong.shader_index(), 0);
        assert_eq!(ShadingMode::BlinnPhong.shader_index(), 1);
        assert_eq!(ShadingMode::LutBlinnPhong.shader_index(), 2);
        assert_eq!(ShadingMode::Phong.next().shader_index(), 1);
    }
}
