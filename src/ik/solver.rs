use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct SolveResult {
    pub converged: bool,
    pub iterations: u32,
    pub final_distance: f32,
}

/// Position-level FABRIK. Operates on a joint-position array
/// (`lengths.len() + 1` entries, root first) and leaves rotation
/// extraction to the caller.
pub struct FabrikSolver;

impl FabrikSolver {
    pub fn solve(
        positions: &mut [Vec3],
        lengths: &[f32],
        target: Vec3,
        tolerance: f32,
        max_iterations: u32,
    ) -> SolveResult {
        let n = positions.len();
        if n < 2 || lengths.len() + 1 != n {
            return SolveResult {
                converged: true,
                iterations: 0,
                final_distance: 0.0,
            };
        }

        let base = positions[0];
        let total_length: f32 = lengths.iter().sum();
        let distance_to_target = (target - base).length();

        if distance_to_target > total_length {
            Self::stretch_towards_target(positions, lengths, base, target);
            return SolveResult {
                converged: false,
                iterations: 1,
                final_distance: distance_to_target - total_length,
            };
        }

        // At near-full extension only the straight pose can satisfy the
        // tolerance; iterating from a bent pose unbends one small step per
        // pass. Seed the straight pose and let the loop confirm it.
        if total_length - distance_to_target <= tolerance {
            Self::stretch_towards_target(positions, lengths, base, target);
        }

        for iteration in 0..max_iterations {
            Self::forward_pass(positions, lengths, target);
            Self::backward_pass(positions, lengths, base);

            let distance = (positions[n - 1] - target).length();
            if distance <= tolerance {
                return SolveResult {
                    converged: true,
                    iterations: iteration + 1,
                    final_distance: distance,
                };
            }
        }

        let final_distance = (positions[n - 1] - target).length();
        SolveResult {
            converged: final_distance <= tolerance,
            iterations: max_iterations,
            final_distance,
        }
    }

    /// Pin the tip to the target, walk back toward the root at fixed bone
    /// lengths.
    fn forward_pass(positions: &mut [Vec3], lengths: &[f32], target: Vec3) {
        let n = positions.len();
        positions[n - 1] = target;

        for i in (0..n - 1).rev() {
            let next = positions[i + 1];
            let dir = positions[i] - next;
            let len = dir.length();

            let direction = if len > 0.0001 { dir / len } else { Vec3::Y };
            positions[i] = next + direction * lengths[i];
        }
    }

    /// Pin the root back to its true position, walk out toward the tip.
    fn backward_pass(positions: &mut [Vec3], lengths: &[f32], base: Vec3) {
        positions[0] = base;

        for i in 1..positions.len() {
            let prev = positions[i - 1];
            let dir = positions[i] - prev;
            let len = dir.length();

            let direction = if len > 0.0001 { dir / len } else { Vec3::Y };
            positions[i] = prev + direction * lengths[i - 1];
        }
    }

    /// Lay every bone along the straight root-to-target line.
    fn stretch_towards_target(positions: &mut [Vec3], lengths: &[f32], base: Vec3, target: Vec3) {
        let direction = (target - base).normalize_or_zero();
        if direction.length_squared() < 0.0001 {
            return;
        }

        positions[0] = base;
        for i in 1..positions.len() {
            positions[i] = positions[i - 1] + direction * lengths[i - 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths_of(positions: &[Vec3]) -> Vec<f32> {
        positions.windows(2).map(|w| w[0].distance(w[1])).collect()
    }

    #[test]
    fn reachable_target_converges() {
        let mut positions = vec![Vec3::ZERO, Vec3::Y, Vec3::Y * 2.0];
        let lengths = [1.0, 1.0];
        let target = Vec3::new(1.0, 1.0, 0.0);

        let result = FabrikSolver::solve(&mut positions, &lengths, target, 0.01, 10);
        assert!(result.converged);
        assert!((positions[2] - target).length() < 0.01);
    }

    #[test]
    fn near_full_extension_converges_to_straight_pose() {
        let mut positions = vec![Vec3::ZERO, Vec3::Y, Vec3::Y * 2.0];
        let lengths = [1.0, 1.0];
        let target = Vec3::new(1.4142, 1.4142, 0.0);

        let result = FabrikSolver::solve(&mut positions, &lengths, target, 0.01, 10);
        assert!(result.converged);
        assert!((positions[2] - target).length() < 0.01);
    }

    #[test]
    fn bone_lengths_survive_any_solve() {
        let mut positions = vec![Vec3::ZERO, Vec3::Y, Vec3::new(0.5, 1.8, 0.0)];
        let lengths = lengths_of(&positions);

        FabrikSolver::solve(&mut positions, &lengths, Vec3::new(1.2, 0.3, 0.7), 0.01, 10);
        for (current, expected) in lengths_of(&positions).iter().zip(&lengths) {
            assert!((current - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn unreachable_target_stretches_collinear() {
        let mut positions = vec![Vec3::ZERO, Vec3::Y, Vec3::Y * 2.0];
        let lengths = [1.0, 1.0];
        let target = Vec3::new(3.0, 0.0, 0.0);

        let result = FabrikSolver::solve(&mut positions, &lengths, target, 0.01, 10);
        assert!(!result.converged);
        assert!((result.final_distance - 1.0).abs() < 1e-5);

        let direction = target.normalize();
        assert!((positions[1] - direction).length() < 1e-5);
        assert!((positions[2] - direction * 2.0).length() < 1e-5);
    }

    #[test]
    fn degenerate_chain_is_a_no_op() {
        let mut positions = vec![Vec3::ZERO];
        let result = FabrikSolver::solve(&mut positions, &[], Vec3::X, 0.01, 10);
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
    }
}
