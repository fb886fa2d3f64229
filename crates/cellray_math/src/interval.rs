/// A closed range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Hits must lie strictly in front of the ray origin.
    pub const IN_FRONT: Interval = Interval {
        min: crate::EPSILON,
        max: f32::INFINITY,
    };

    /// Channel range of a displayable color.
    pub const CHANNEL: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval {
            min: 0.0,
            max: 10.0,
        };

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_in_front_rejects_origin() {
        assert!(!Interval::IN_FRONT.surrounds(0.0));
        assert!(!Interval::IN_FRONT.surrounds(1e-7));
        assert!(Interval::IN_FRONT.surrounds(1e-3));
        assert!(Interval::IN_FRONT.surrounds(1e10));
    }

    #[test]
    fn test_channel_clamp() {
        assert_eq!(Interval::CHANNEL.clamp(-5.0), 0.0);
        assert_eq!(Interval::CHANNEL.clamp(128.0), 128.0);
        assert_eq!(Interval::CHANNEL.clamp(300.0), 255.0);
    }
}
