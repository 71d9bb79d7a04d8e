use chrono::{Local, Timelike};

use crate::math::Color;

pub const DAY_SKY: Color = Color(0x87ceeb);
pub const SUNSET_SKY: Color = Color(0xffcc70);
pub const NIGHT_SKY: Color = Color(0x0a0e27);

/// Sky color for an hour of the day (0-23)
pub fn sky_color(hour: u32) -> Color {
    match hour % 24 {
        18..=23 | 0..=5 => NIGHT_SKY,
        16 | 17 => SUNSET_SKY,
        _ => DAY_SKY,
    }
}

/// Local wall-clock hour, read once when a scene is set up
pub fn current_hour() -> u32 {
    Local::now().hour()
}
