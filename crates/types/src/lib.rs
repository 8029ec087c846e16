//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the simulator.
//! All types are pure data with no external dependencies, so they can be
//! used by the chain engine, the CLI and any presentation layer alike.
//!
//! # Field Dimensions
//!
//! Default (modern Tsu) field:
//!
//! - **Columns**: 6 (indexed 0-5)
//! - **Rows**: 13 including the hidden row (indexed 0-12, row 0 is the top)
//! - **Hidden rows**: 1 (row 0 sits above the visible play area)
//!
//! # Scoring Tables
//!
//! | Table | Indexed by | Default |
//! |-------|------------|---------|
//! | `CHAIN_POWER` | chain length - 1 | 0, 8, 16, 32, 64, ... 672 |
//! | `COLOR_BONUS` | distinct colors - 1 | 0, 3, 6, 12, 24 |
//! | `GROUP_BONUS` | group size - pop threshold | 0, 2, 3, 4, 5, 6, 7, 10 |
//!
//! Out-of-range indices use the last entry of the table.
//!
//! # Examples
//!
//! ```
//! use puyo_chainsim_types::{Connections, PuyoColor, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let red = PuyoColor::from_code('R').unwrap();
//! assert!(red.is_colored());
//! assert_eq!(red.code(), 'R');
//!
//! let mut c = Connections::NONE;
//! c.insert(Connections::UP);
//! assert_eq!(c.as_string(), "u");
//!
//! assert_eq!((DEFAULT_COLS, DEFAULT_ROWS), (6, 13));
//! ```

/// Default field width in columns
pub const DEFAULT_COLS: usize = 6;

/// Default field height in rows, hidden rows included
pub const DEFAULT_ROWS: usize = 13;

/// Default number of hidden rows above the visible field
pub const DEFAULT_HIDDEN_ROWS: usize = 1;

/// Score needed to generate one unit of garbage
pub const DEFAULT_TARGET_POINT: u32 = 70;

/// Minimum group size that pops
pub const DEFAULT_GROUP_MINIMUM: usize = 4;

/// Score value of a Point cell (reserved, not consumed by scoring)
pub const DEFAULT_POINT_VALUE: u32 = 50;

/// Chain power table, indexed by chain length - 1
pub const CHAIN_POWER: [u32; 24] = [
    0, 8, 16, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 480, 512, 544,
    576, 608, 640, 672,
];

/// Color bonus table, indexed by distinct popping colors - 1
pub const COLOR_BONUS: [u32; 5] = [0, 3, 6, 12, 24];

/// Group bonus table, indexed by group size - pop threshold
pub const GROUP_BONUS: [u32; 8] = [0, 2, 3, 4, 5, 6, 7, 10];

/// Lower clamp for the summed link bonus
pub const BONUS_MIN: u32 = 1;

/// Upper clamp for the summed link bonus
pub const BONUS_MAX: u32 = 999;

/// Base points per cleared cell
pub const POINTS_PER_CELL: u32 = 10;

/// The occupant of one field cell
///
/// Each variant has a single-character code used by text and URL formats:
///
/// | Code | Variant | Notes |
/// |------|---------|-------|
/// | `R` `G` `B` `Y` `P` | colors | pop in groups |
/// | `J` | Garbage | cleared by one adjacent pop |
/// | `H` | Hard | one adjacent pop downgrades it to Garbage |
/// | `N` | Point | reserved |
/// | `T` | Stone | falls, never pops |
/// | `S` | Sun | reserved |
/// | `L` | Block | never falls, acts as a shelf |
/// | `0` | Empty | |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PuyoColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Garbage,
    Hard,
    Point,
    Stone,
    Sun,
    Block,
    #[default]
    Empty,
}

impl PuyoColor {
    /// Every variant, colors first
    pub const ALL: [PuyoColor; 12] = [
        PuyoColor::Red,
        PuyoColor::Green,
        PuyoColor::Blue,
        PuyoColor::Yellow,
        PuyoColor::Purple,
        PuyoColor::Garbage,
        PuyoColor::Hard,
        PuyoColor::Point,
        PuyoColor::Stone,
        PuyoColor::Sun,
        PuyoColor::Block,
        PuyoColor::Empty,
    ];

    /// Parse a color from its single-character code (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_chainsim_types::PuyoColor;
    ///
    /// assert_eq!(PuyoColor::from_code('R'), Some(PuyoColor::Red));
    /// assert_eq!(PuyoColor::from_code('j'), Some(PuyoColor::Garbage));
    /// assert_eq!(PuyoColor::from_code('0'), Some(PuyoColor::Empty));
    /// assert_eq!(PuyoColor::from_code('x'), None);
    /// ```
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(PuyoColor::Red),
            'G' => Some(PuyoColor::Green),
            'B' => Some(PuyoColor::Blue),
            'Y' => Some(PuyoColor::Yellow),
            'P' => Some(PuyoColor::Purple),
            'J' => Some(PuyoColor::Garbage),
            'H' => Some(PuyoColor::Hard),
            'N' => Some(PuyoColor::Point),
            'T' => Some(PuyoColor::Stone),
            'S' => Some(PuyoColor::Sun),
            'L' => Some(PuyoColor::Block),
            '0' => Some(PuyoColor::Empty),
            _ => None,
        }
    }

    /// Parse a color code, treating unknown codes as Empty
    pub fn from_code_lossy(code: char) -> Self {
        Self::from_code(code).unwrap_or(PuyoColor::Empty)
    }

    /// Single-character code
    pub fn code(&self) -> char {
        match self {
            PuyoColor::Red => 'R',
            PuyoColor::Green => 'G',
            PuyoColor::Blue => 'B',
            PuyoColor::Yellow => 'Y',
            PuyoColor::Purple => 'P',
            PuyoColor::Garbage => 'J',
            PuyoColor::Hard => 'H',
            PuyoColor::Point => 'N',
            PuyoColor::Stone => 'T',
            PuyoColor::Sun => 'S',
            PuyoColor::Block => 'L',
            PuyoColor::Empty => '0',
        }
    }

    /// Lowercase display name, as used by sprite sheets
    ///
    /// Reserved and empty cells share the `spacer` name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PuyoColor::Red => "red",
            PuyoColor::Green => "green",
            PuyoColor::Blue => "blue",
            PuyoColor::Yellow => "yellow",
            PuyoColor::Purple => "purple",
            PuyoColor::Garbage => "garbage",
            PuyoColor::Hard => "hard",
            PuyoColor::Block => "block",
            PuyoColor::Stone => "stone",
            PuyoColor::Point | PuyoColor::Sun | PuyoColor::Empty => "spacer",
        }
    }

    /// One of the five poppable colors
    pub fn is_colored(&self) -> bool {
        matches!(
            self,
            PuyoColor::Red
                | PuyoColor::Green
                | PuyoColor::Blue
                | PuyoColor::Yellow
                | PuyoColor::Purple
        )
    }

    /// Plain or hard garbage
    pub fn is_garbage(&self) -> bool {
        matches!(self, PuyoColor::Garbage | PuyoColor::Hard)
    }

    pub fn is_block(&self) -> bool {
        matches!(self, PuyoColor::Block)
    }

    pub fn is_stone(&self) -> bool {
        matches!(self, PuyoColor::Stone)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PuyoColor::Empty)
    }
}

/// Set of directions in which a cell touches a settled same-colored neighbor
///
/// Stored as a 4-bit mask. Only used as a rendering hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Connections(u8);

impl Connections {
    pub const NONE: Connections = Connections(0);
    pub const UP: Connections = Connections(0b0001);
    pub const RIGHT: Connections = Connections(0b0010);
    pub const DOWN: Connections = Connections(0b0100);
    pub const LEFT: Connections = Connections(0b1000);

    /// Raw bit representation
    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: Connections) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Connections) {
        self.0 |= other.0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Compact string form in `u`, `r`, `d`, `l` order, or `n` when unconnected
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_chainsim_types::Connections;
    ///
    /// let mut c = Connections::NONE;
    /// assert_eq!(c.as_string(), "n");
    /// c.insert(Connections::LEFT);
    /// c.insert(Connections::DOWN);
    /// assert_eq!(c.as_string(), "dl");
    /// ```
    pub fn as_string(&self) -> String {
        if self.is_empty() {
            return String::from("n");
        }
        let mut s = String::with_capacity(4);
        for (flag, ch) in [
            (Connections::UP, 'u'),
            (Connections::RIGHT, 'r'),
            (Connections::DOWN, 'd'),
            (Connections::LEFT, 'l'),
        ] {
            if self.contains(flag) {
                s.push(ch);
            }
        }
        s
    }
}

/// Resolution phase of a chain engine
///
/// The phase always describes the work that is due on the next step:
///
/// - **Idle**: the board is quiescent
/// - **Dropping**: at least one cell floats above an empty cell
/// - **Popping**: the board is settled and a group qualifies to pop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dropping,
    Popping,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Dropping => "dropping",
            Phase::Popping => "popping",
        }
    }
}
