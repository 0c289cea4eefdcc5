//! Derive through a re-exported path to the runtime crate.

mod deps {
    pub use envstruct as runtime;
}

use envstruct::EnvConfig;

/// Settings whose generated code refers to `deps::runtime`.
#[derive(Default, EnvConfig)]
#[envstruct(crate = "deps::runtime")]
struct Aliased {
    port: u16,
}

fn main() {
    let env = std::collections::BTreeMap::from([(String::from("PORT"), String::from("80"))]);
    let aliased: Aliased = envstruct::load_from(&env, "");
    assert_eq!(aliased.port, 80);
}
