use crate::model::outcome::{Assignment, Outcome};
use crate::model::{N_MATCHES, TOTAL_ASSIGNMENTS};

/// Lexicographic walk over every assignment of an outcome to each fixture,
/// ordered Win < Draw < Loss with the first fixture most significant.
pub struct Assignments {
    next: u32,
}

pub fn enumerate_assignments() -> Assignments {
    Assignments { next: 0 }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.next >= TOTAL_ASSIGNMENTS {
            return None;
        }
        let mut code = self.next;
        self.next += 1;

        let mut assignment = [Outcome::Win; N_MATCHES];
        for slot in assignment.iter_mut().rev() {
            *slot = Outcome::ALL[(code % 3) as usize];
            code /= 3;
        }
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (TOTAL_ASSIGNMENTS - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Assignments {}
