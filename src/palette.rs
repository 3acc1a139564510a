use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::Color;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const CHARCOAL: Color = Color::new(102, 102, 102);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const CREAM: Color = Color::new(250, 246, 228);
pub const RED: Color = Color::new(241, 95, 73);
pub const ORANGE_SHERBET: Color = Color::new(239, 157, 110);
pub const YELLOW_CANARY: Color = Color::new(255, 252, 103);
pub const GREEN_EGGS: Color = Color::new(135, 255, 175);
pub const BLUE_SMURF: Color = Color::new(0, 128, 255);
pub const BLUE_COFFEE: Color = Color::new(0, 192, 255);

pub const ALL: [(&str, Color); 10] = [
    ("black", BLACK),
    ("charcoal", CHARCOAL),
    ("white", WHITE),
    ("cream", CREAM),
    ("red", RED),
    ("orange_sherbet", ORANGE_SHERBET),
    ("yellow_canary", YELLOW_CANARY),
    ("green_eggs", GREEN_EGGS),
    ("blue_smurf", BLUE_SMURF),
    ("blue_coffee", BLUE_COFFEE),
];

static BY_NAME: Lazy<HashMap<&'static str, Color>> =
    Lazy::new(|| ALL.iter().copied().collect());

pub fn lookup(name: &str) -> Option<Color> {
    BY_NAME.get(name).copied()
}
