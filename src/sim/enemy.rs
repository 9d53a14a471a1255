//! Chasing enemy
//!
//! Steps one cell per axis toward the target. No pathfinding: obstacles are
//! walked straight through.

use super::grid::Pos;

/// One pursuit step from `enemy` toward `target`
pub fn step_toward(enemy: Pos, target: Pos) -> Pos {
    Pos {
        x: enemy.x + (target.x - enemy.x).signum(),
        y: enemy.y + (target.y - enemy.y).signum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_step() {
        assert_eq!(step_toward(Pos::new(5, 5), Pos::new(2, 8)), Pos::new(4, 6));
    }

    #[test]
    fn test_converges_then_holds() {
        let target = Pos::new(2, 8);
        let mut enemy = Pos::new(5, 5);
        for _ in 0..3 {
            enemy = step_toward(enemy, target);
        }
        assert_eq!(enemy, target);

        assert_eq!(step_toward(enemy, target), target);
    }

    #[test]
    fn test_holds_aligned_axis() {
        // Same row: only x moves
        assert_eq!(step_toward(Pos::new(10, 4), Pos::new(3, 4)), Pos::new(9, 4));
        // Same column: only y moves
        assert_eq!(step_toward(Pos::new(3, 1), Pos::new(3, 4)), Pos::new(3, 2));
    }
}
