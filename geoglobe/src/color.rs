use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::try_from_hex(&value)
            .or_else(|| Self::from_name(&value))
            .unwrap_or(DEFAULT_COLOR)
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

/// Colors that can be referenced by name, with their normalized RGB values in comments.
pub const NAMED_COLORS: [(&str, Color); 10] = [
    ("red", Color::RED),         // (1, 0, 0)
    ("yellow", Color::YELLOW),   // (1, 1, 0)
    ("blue", Color::BLUE),       // (0, 0, 1)
    ("green", Color::GREEN),     // (0, 1, 0)
    ("cyan", Color::CYAN),       // (0, 1, 1)
    ("magenta", Color::MAGENTA), // (1, 0, 1)
    ("orange", Color::ORANGE),   // (1, 0.5, 0)
    ("purple", Color::PURPLE),   // (0.5, 0, 1)
    ("white", Color::WHITE),     // (1, 1, 1)
    ("pink", Color::PINK),       // (1, 0.5, 0.8)
];

/// Default color name of each known placemark group.
pub const GROUP_COLORS: [(&str, &str); 5] = [
    ("family", "red"),
    ("friends", "yellow"),
    ("work", "blue"),
    ("college", "green"),
    ("high_school", "orange"),
];

/// Color used when neither the explicit color nor the group gives one.
pub const DEFAULT_COLOR: Color = Color::YELLOW;

impl Color {
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Yellow color: `#FFFF00FF`
    pub const YELLOW: Color = Color::rgba(255, 255, 0, 255);
    /// Green color: `#00FF00FF`
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// Dark blue color: `#00008BFF`
    pub const DARK_BLUE: Color = Color::from_hex("#00008B");
    /// Cyan color: `#00FFFFFF`
    pub const CYAN: Color = Color::rgba(0, 255, 255, 255);
    /// Magenta color: `#FF00FFFF`
    pub const MAGENTA: Color = Color::rgba(255, 0, 255, 255);
    /// Orange color: `#FF8000FF`
    pub const ORANGE: Color = Color::from_hex("#FF8000");
    /// Purple color: `#8000FFFF`
    pub const PURPLE: Color = Color::from_hex("#8000FF");
    /// Pink color: `#FF80CCFF`
    pub const PINK: Color = Color::from_hex("#FF80CC");
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Looks up a color in [`NAMED_COLORS`]. The name is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Name of the color in [`NAMED_COLORS`], if it is there.
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }

    /// Default color of the placemark group from [`GROUP_COLORS`]. The group name is case-insensitive.
    pub fn for_group(group: &str) -> Option<Self> {
        GROUP_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(group))
            .and_then(|(_, color_name)| Self::from_name(color_name))
    }

    /// Resolves the display color of a placemark.
    ///
    /// The explicit color wins if it is a known name, then the default color of the group, then [`DEFAULT_COLOR`].
    pub fn resolve(explicit: Option<&str>, group: &str) -> Self {
        explicit
            .and_then(Self::from_name)
            .or_else(|| Self::for_group(group))
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Converts the color into f32 array as used by GPU pipelines.
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Normalized RGB triple, each channel in `[0, 1]`.
    pub fn to_rgb(&self) -> [f32; 3] {
        let [r, g, b, _] = self.to_f32_array();
        [r, g, b]
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 && hex_string.len() != 9 || hex_string.chars().next()? != '#' {
            return None;
        }

        let r = u8::from_str_radix(hex_string.get(1..3)?, 16).ok()?;
        let g = u8::from_str_radix(hex_string.get(3..5)?, 16).ok()?;
        let b = u8::from_str_radix(hex_string.get(5..7)?, 16).ok()?;
        let a = if hex_string.len() == 9 {
            u8::from_str_radix(hex_string.get(7..9)?, 16).ok()?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    ///
    /// # Panics
    ///
    /// Panics if the parsing fails.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 && bytes.len() != 9 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        let r = decode_byte(&[bytes[1], bytes[2]]);
        let g = decode_byte(&[bytes[3], bytes[4]]);
        let b = decode_byte(&[bytes[5], bytes[6]]);
        let a = if hex_string.len() == 9 {
            decode_byte(&[bytes[7], bytes[8]])
        } else {
            255
        };

        Self { r, g, b, a }
    }
}

const fn decode_byte(chars: &[u8]) -> u8 {
    debug_assert!(chars.len() == 2);
    let first = decode_char(chars[0]);
    let second = decode_char(chars[1]);

    first * 16 + second
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}
