pub mod outcome;
pub mod points;

pub const N_TEAMS: usize = 4;
pub const N_MATCHES: usize = 6;

/// Canonical fixture list: every pairing of the four teams, home side first.
/// Assignment positions follow this order.
pub const FIXTURES: [(usize, usize); N_MATCHES] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// 3^6 possible outcome assignments across the six fixtures.
pub const TOTAL_ASSIGNMENTS: u32 = 729;

pub const POINTS_WIN: u8 = 3;
pub const POINTS_DRAW: u8 = 1;
