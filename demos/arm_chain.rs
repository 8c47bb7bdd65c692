use glam::Vec3;
use posekit::depth::DepthClassifier;
use posekit::ik::ChainRegistry;
use posekit::rig::Skeleton;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut skeleton = Skeleton::new();
    skeleton.add_group("armature", None, Vec3::ZERO);
    skeleton.add_bone("shoulder", Some("armature"), Vec3::new(0.2, 1.4, 0.0), 0.3);
    skeleton.add_bone("upper-arm", Some("shoulder"), Vec3::Y * 0.3, 0.35);
    skeleton.add_bone("forearm", Some("upper-arm"), Vec3::Y * 0.35, 0.3);
    skeleton.add_bone("hand", Some("forearm"), Vec3::Y * 0.3, 0.1);

    let mut chains = ChainRegistry::new();
    chains
        .create_chain(&skeleton, "left-arm", &["upper-arm", "forearm", "hand"])
        .expect("arm chain is well-formed");
    chains.set_constraint("upper-arm", Vec3::splat(-120.0), Vec3::splat(120.0));

    let mut classifier = DepthClassifier::new();
    classifier.compute_depths(&skeleton);
    classifier.set_depth_limit(2);
    println!("manipulators at depth limit 2:");
    for bone in skeleton.bone_names() {
        println!("  {bone}: {}", if classifier.is_visible(bone) { "shown" } else { "hidden" });
    }

    let targets = [
        Vec3::new(0.6, 1.8, 0.1),
        Vec3::new(0.3, 1.1, 0.4),
        Vec3::new(4.0, 0.0, 0.0), // far out of reach
    ];

    for target in targets {
        let converged = chains.solve(&mut skeleton, "left-arm", target);
        let tip = chains
            .end_effector_position(&skeleton, "left-arm")
            .expect("chain is registered");
        println!(
            "target {:?} -> tip ({:.3}, {:.3}, {:.3}), converged: {converged}",
            target, tip.x, tip.y, tip.z
        );
    }
}
