use crate::model::outcome::{Assignment, Outcome};
use crate::model::points::ScoreVector;
use crate::model::{FIXTURES, N_TEAMS, POINTS_DRAW, POINTS_WIN};

/// Apply the 3/1/0 rule across the six fixtures: a win puts 3 on the home
/// side, a loss puts 3 on the away side, a draw puts 1 on each.
pub fn score_assignment(assignment: &Assignment) -> ScoreVector {
    let mut scores: ScoreVector = [0; N_TEAMS];
    for (&(home, away), &outcome) in FIXTURES.iter().zip(assignment.iter()) {
        match outcome {
            Outcome::Win => scores[home] += POINTS_WIN,
            Outcome::Loss => scores[away] += POINTS_WIN,
            Outcome::Draw => {
                scores[home] += POINTS_DRAW;
                scores[away] += POINTS_DRAW;
            }
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::N_MATCHES;
    use crate::pipeline::stage1_enumerate::enumerate_assignments;

    #[test]
    fn test_home_sweep() {
        // Team 0 wins all three of its fixtures, 1 beats 2 and 3, 2 beats 3.
        let scores = score_assignment(&[Outcome::Win; N_MATCHES]);
        assert_eq!(scores, [9, 6, 3, 0]);
    }

    #[test]
    fn test_all_drawn() {
        let scores = score_assignment(&[Outcome::Draw; N_MATCHES]);
        assert_eq!(scores, [3, 3, 3, 3]);
    }

    #[test]
    fn test_away_sweep() {
        let scores = score_assignment(&[Outcome::Loss; N_MATCHES]);
        assert_eq!(scores, [0, 3, 6, 9]);
    }

    #[test]
    fn test_single_decisive_fixture() {
        let mut assignment = [Outcome::Draw; N_MATCHES];
        assignment[0] = Outcome::Win; // (0,1) to the home side
        assert_eq!(score_assignment(&assignment), [5, 2, 3, 3]);
    }

    #[test]
    fn test_total_points_tracks_draw_count() {
        // Each decisive fixture adds 3 points, each draw adds 2.
        for assignment in enumerate_assignments() {
            let draws = assignment
                .iter()
                .filter(|&&o| o == Outcome::Draw)
                .count() as u32;
            let total: u32 = score_assignment(&assignment)
                .iter()
                .map(|&p| u32::from(p))
                .sum();
            assert_eq!(total, 3 * (N_MATCHES as u32 - draws) + 2 * draws);
        }
    }
}
