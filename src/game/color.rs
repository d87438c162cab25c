/// A single burger layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Color {
    /// Every color, in button order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Blue, Color::Green];

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Green => "Green",
        }
    }

    /// Keyboard key that picks this color
    pub fn key(self) -> char {
        match self {
            Color::Red => 'Q',
            Color::Yellow => 'W',
            Color::Blue => 'E',
            Color::Green => 'R',
        }
    }

    /// Map a pressed key to a color (case-insensitive)
    pub fn from_key(key: char) -> Option<Color> {
        let key = key.to_ascii_uppercase();
        Color::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names() {
        assert_eq!(Color::Red.name(), "Red");
        assert_eq!(Color::Green.name(), "Green");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Color::from_key('q'), Some(Color::Red));
        assert_eq!(Color::from_key('W'), Some(Color::Yellow));
        assert_eq!(Color::from_key('e'), Some(Color::Blue));
        assert_eq!(Color::from_key('r'), Some(Color::Green));
        assert_eq!(Color::from_key('x'), None);
    }

    #[test]
    fn test_keys_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }
}
