use crate::config::Config;

/// Screen dimensions and the derived pixel-to-normalized scale factors.
///
/// The rendering backend works in the [-1, 1] normalized range along both
/// axes, so one pixel spans `2.0 / dimension` normalized units. Computed
/// once at startup; read-only thereafter.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub width: i32,
    pub height: i32,
    pub delta_width: f32,  // normalized units per pixel along x
    pub delta_height: f32, // normalized units per pixel along y
}

impl Environment {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            delta_width: 2.0 / width as f32,
            delta_height: 2.0 / height as f32,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.screen_width, config.screen_height)
    }

    /// Half of a pixel span along x, in normalized units.
    pub fn half_extent_x(&self, pixels: i32) -> f32 {
        pixels as f32 * self.delta_width * 0.5
    }

    /// Half of a pixel span along y, in normalized units.
    pub fn half_extent_y(&self, pixels: i32) -> f32 {
        pixels as f32 * self.delta_height * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_two_over_dimension() {
        let env = Environment::new(800, 600);
        assert_eq!(env.delta_width, 2.0 / 800.0);
        assert_eq!(env.delta_height, 2.0 / 600.0);
    }

    #[test]
    fn test_half_extents() {
        let env = Environment::new(800, 600);
        assert_eq!(env.half_extent_x(20), 0.025, "20 px paddle half-width");
        let half_height = env.half_extent_y(50);
        assert!((half_height - 50.0 / 600.0).abs() < 1e-7, "50 px paddle half-height");
    }
}
