use rand::Rng;

/// Generates a monster display name from prefix/root/suffix tables.
pub fn generate_monster_name() -> String {
    let mut rng = rand::thread_rng();
    generate_monster_name_with(&mut rng)
}

/// Seedable variant for deterministic tests and simulations.
pub fn generate_monster_name_with(rng: &mut impl Rng) -> String {
    let prefixes = [
        "Grizz", "Sav", "Dark", "Blood", "Bone", "Shadow", "Fel", "Dire", "Wild", "Grim",
    ];
    let roots = [
        "led", "age", "en", "tooth", "claw", "fang", "heart", "eye", "maw", "tail",
    ];
    let suffixes = [
        "Stalker", "Crawler", "Lurker", "Render", "Gnasher", "Creeper", "Shambler", "Howler",
    ];

    let prefix = prefixes[rng.gen_range(0..prefixes.len())];
    let root = roots[rng.gen_range(0..roots.len())];
    let suffix = suffixes[rng.gen_range(0..suffixes.len())];

    format!("{}{} {}", prefix, root, suffix)
}
