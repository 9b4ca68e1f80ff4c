use std::fmt::Display;

pub const MAX_DISTANCE: u8 = 3;
pub const DIRECTIONS: usize = 8;
pub const POWER_CARDS: usize = DIRECTIONS * MAX_DISTANCE as usize;

/// Compass direction of a power card. Row 0 is the top row of the board,
/// so south increases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
    East,
}

impl Direction {
    pub const ALL: [Direction; DIRECTIONS] = [
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
    ];

    /// Unit step as (row, column).
    pub const fn step(self) -> (i8, i8) {
        match self {
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn symbol(self) -> &'static str {
        match self {
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
        }
    }
}

/// A power card moves the crown `distance` squares in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PowerCard {
    direction: Direction,
    distance: u8,
}

impl PowerCard {
    pub fn new(direction: Direction, distance: u8) -> Self {
        assert!(
            (1..=MAX_DISTANCE).contains(&distance),
            "power card distance must be between 1 and {MAX_DISTANCE}"
        );
        PowerCard { direction, distance }
    }

    pub const fn direction(self) -> Direction {
        self.direction
    }

    pub const fn distance(self) -> u8 {
        self.distance
    }

    /// Crown displacement as (row, column).
    pub const fn offset(self) -> (i8, i8) {
        let (row, column) = self.direction.step();
        let distance = self.distance as i8;
        (row * distance, column * distance)
    }

    /// Every card in the deck, grouped by distance.
    pub fn all() -> impl Iterator<Item = PowerCard> {
        (1..=MAX_DISTANCE)
            .flat_map(|distance| Direction::ALL.into_iter().map(move |direction| PowerCard::new(direction, distance)))
    }
}

impl Display for PowerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.direction.symbol(), self.distance)
    }
}
