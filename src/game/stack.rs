use super::Color;

/// Largest stack the generator may produce with the default configuration.
pub const MAX_STACK_LEN: usize = 5;

/// An ordered run of colors, read bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    layers: Vec<Color>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Stack { layers: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers from bottom to top
    pub fn layers(&self) -> &[Color] {
        &self.layers
    }

    /// Topmost layer, if any
    pub fn top(&self) -> Option<Color> {
        self.layers.last().copied()
    }

    pub(crate) fn push(&mut self, color: Color) {
        self.layers.push(color);
    }

    pub(crate) fn pop(&mut self) -> Option<Color> {
        self.layers.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.layers.clear();
    }
}

impl From<Vec<Color>> for Stack {
    fn from(layers: Vec<Color>) -> Self {
        Stack { layers }
    }
}

impl FromIterator<Color> for Stack {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Stack {
            layers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push(Color::Red);
        stack.push(Color::Blue);
        assert_eq!(stack.top(), Some(Color::Blue));
        assert_eq!(stack.pop(), Some(Color::Blue));
        assert_eq!(stack.layers(), &[Color::Red]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Stack::from(vec![Color::Red, Color::Yellow, Color::Blue]);
        let b = Stack::from(vec![Color::Red, Color::Blue, Color::Yellow]);
        let c: Stack = [Color::Red, Color::Yellow, Color::Blue].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_prefix_is_not_equal() {
        let a = Stack::from(vec![Color::Red, Color::Red]);
        let b = Stack::from(vec![Color::Red]);
        assert_ne!(a, b);
    }
}
