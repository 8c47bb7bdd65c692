use glam::Vec3;
use posekit::relax::{PriorityTable, RelaxSolver};
use posekit::rig::{KeypointMap, PoseSnapshot};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let priorities: PriorityTable = [
        ("hips", 10),
        ("chest", 8),
        ("shoulder", 5),
        ("elbow", 3),
        ("wrist", 1),
    ]
    .into_iter()
    .collect();

    let mut solver = RelaxSolver::new().with_priorities(priorities);
    solver.add_edge("hips", "chest");
    solver.add_edge("chest", "shoulder");
    solver.add_edge("shoulder", "elbow");
    solver.add_edge("elbow", "wrist");

    let mut keypoints = KeypointMap::new();
    keypoints.set("hips", Vec3::new(0.0, 1.0, 0.0));
    keypoints.set("chest", Vec3::new(0.0, 1.4, 0.0));
    keypoints.set("shoulder", Vec3::new(0.2, 1.5, 0.0));
    keypoints.set("elbow", Vec3::new(0.45, 1.3, 0.0));
    keypoints.set("wrist", Vec3::new(0.6, 1.05, 0.0));
    solver.capture_lengths(&keypoints);

    // Simulate a drag gesture on the wrist.
    let drag_path = [
        Vec3::new(0.7, 1.2, 0.0),
        Vec3::new(0.8, 1.5, 0.1),
        Vec3::new(0.5, 1.9, 0.2),
    ];
    for position in drag_path {
        solver.apply_constraints(&mut keypoints, "wrist", position);
    }

    println!("settled pose:");
    for (name, p) in keypoints.iter() {
        println!("  {name}: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    }

    let snapshot = PoseSnapshot::from_keypoints(&keypoints);
    let json = serde_json::to_string_pretty(&snapshot).expect("snapshot serializes");
    println!("snapshot for the persistence layer:\n{json}");
}
