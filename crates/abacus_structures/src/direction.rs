//! Growth direction of an array

use abacus_core::Vec2;

/// Direction in which new elements are appended
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MArrayDirection {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl MArrayDirection {
    pub fn to_vec(self) -> Vec2 {
        match self {
            MArrayDirection::Up => Vec2::UP,
            MArrayDirection::Down => Vec2::DOWN,
            MArrayDirection::Left => Vec2::LEFT,
            MArrayDirection::Right => Vec2::RIGHT,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, MArrayDirection::Left | MArrayDirection::Right)
    }

    /// Side of the body that index labels sit on
    pub fn label_side(self) -> Vec2 {
        if self.is_horizontal() {
            Vec2::UP
        } else {
            Vec2::LEFT
        }
    }

    /// Side of the body that pointers attach to, opposite the labels
    pub fn pointer_side(self) -> Vec2 {
        -self.label_side()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_never_sit_on_the_growth_axis() {
        for direction in [
            MArrayDirection::Up,
            MArrayDirection::Down,
            MArrayDirection::Left,
            MArrayDirection::Right,
        ] {
            let growth = direction.to_vec();
            let side = direction.label_side();
            assert_eq!(growth.x * side.x + growth.y * side.y, 0.0, "{direction:?}");
            assert_eq!(direction.pointer_side(), -side);
        }
    }
}
