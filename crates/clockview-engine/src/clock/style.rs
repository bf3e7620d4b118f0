use crate::paint::Color;

/// Visual configuration for the clock face.
///
/// Defaults reproduce the classic widget: red second hand, black minute and
/// hour hands, light-gray face disc, black outer ring and a dark-red center
/// dot. Every option can be overridden independently through the builder
/// methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    pub second_hand_color: Color,
    pub minute_hand_color: Color,
    pub hour_hand_color: Color,
    pub face_color: Color,
    pub ring_color: Color,
    pub center_dot_color: Color,
    pub ring_width: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            second_hand_color: Color::from_srgb_u8(0xFF, 0x00, 0x00, 0xFF),
            minute_hand_color: Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF),
            hour_hand_color: Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF),
            face_color: Color::from_srgb_u8(0xCC, 0xCC, 0xCC, 0xFF),
            ring_color: Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF),
            center_dot_color: Color::from_srgb_u8(0xF0, 0x00, 0x00, 0xFF),
            ring_width: 6.0,
        }
    }
}

impl ClockStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_second_hand_color(mut self, color: Color) -> Self {
        self.second_hand_color = color;
        self
    }

    pub fn with_minute_hand_color(mut self, color: Color) -> Self {
        self.minute_hand_color = color;
        self
    }

    pub fn with_hour_hand_color(mut self, color: Color) -> Self {
        self.hour_hand_color = color;
        self
    }

    pub fn with_face_color(mut self, color: Color) -> Self {
        self.face_color = color;
        self
    }

    pub fn with_ring_color(mut self, color: Color) -> Self {
        self.ring_color = color;
        self
    }

    pub fn with_center_dot_color(mut self, color: Color) -> Self {
        self.center_dot_color = color;
        self
    }

    pub fn with_ring_width(mut self, width: f32) -> Self {
        self.ring_width = width.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_palette() {
        let s = ClockStyle::default();
        assert_eq!(s.second_hand_color, Color::from_srgb_u8(0xFF, 0x00, 0x00, 0xFF));
        assert_eq!(s.minute_hand_color, Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF));
        assert_eq!(s.hour_hand_color, Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF));
        assert_eq!(s.face_color, Color::from_srgb_u8(0xCC, 0xCC, 0xCC, 0xFF));
        assert_eq!(s.ring_color, Color::from_srgb_u8(0x00, 0x00, 0x00, 0xFF));
        assert_eq!(s.center_dot_color, Color::from_srgb_u8(0xF0, 0x00, 0x00, 0xFF));
        assert_eq!(s.ring_width, 6.0);
    }

    #[test]
    fn builder_overrides_only_the_named_option() {
        let blue = Color::from_srgb_u8(0x00, 0x00, 0xFF, 0xFF);
        let s = ClockStyle::new().with_second_hand_color(blue);
        assert_eq!(s.second_hand_color, blue);
        assert_eq!(s.minute_hand_color, ClockStyle::default().minute_hand_color);
        assert_eq!(s.ring_width, ClockStyle::default().ring_width);
    }

    #[test]
    fn ring_width_is_clamped_non_negative() {
        let s = ClockStyle::new().with_ring_width(-3.0);
        assert_eq!(s.ring_width, 0.0);
    }
}
