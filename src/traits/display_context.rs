/// Drawing surface dimensions supplied by the host at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    /// Create new display context
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, 1.0 for a degenerate surface
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        // Phone held in landscape
        Self::new(2340, 1080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect() {
        assert!((DisplayContext::new(1600, 900).aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_aspect() {
        assert_eq!(DisplayContext::new(0, 900).aspect(), 1.0);
    }
}
