use std::fmt::Display;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heading::Up => write!(f, "^"),
            Heading::Right => write!(f, ">"),
            Heading::Down => write!(f, "v"),
            Heading::Left => write!(f, "<"),
        }
    }
}

impl Heading {
    pub fn turn_clockwise(&self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }
}

/// Position and heading of the guard. Two guards in the same state walk the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guard {
    pos: Position,
    heading: Heading,
}

impl Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.heading, self.pos)
    }
}

impl Guard {
    pub fn new(pos: &Position, heading: Heading) -> Self {
        Self {
            pos: pos.clone(),
            heading,
        }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn ahead_pos(&self) -> Option<Position> {
        self.pos.along(self.heading)
    }

    pub fn go_ahead(&mut self) -> bool {
        if let Some(ahead_pos) = self.ahead_pos() {
            self.pos = ahead_pos;
            true
        } else {
            false
        }
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_clockwise();
    }
}

#[test]
fn test_turn_clockwise() {
    let mut heading = Heading::Up;
    let mut seen = Vec::new();
    for _ in 0..4 {
        heading = heading.turn_clockwise();
        seen.push(heading);
    }

    assert_eq!(
        seen,
        vec![Heading::Right, Heading::Down, Heading::Left, Heading::Up]
    );
}

#[test]
fn test_turn_right() {
    let mut guard = Guard::new(&Position::new(2, 2), Heading::Left);
    guard.turn_right();
    assert_eq!(guard.pos(), &Position::new(2, 2));
    assert_eq!(guard.heading(), Heading::Up);
    assert_eq!(guard.to_string(), "^(2, 2)");
}

#[test]
fn test_go_ahead() {
    let mut guard = Guard::new(&Position::new(1, 0), Heading::Up);
    assert!(guard.go_ahead());
    assert_eq!(guard.pos(), &Position::new(0, 0));
    assert!(!guard.go_ahead());
    assert_eq!(guard.pos(), &Position::new(0, 0));
}
