//! Derive on generic structs, with and without loadable generic fields.

use std::collections::BTreeMap;

use envstruct::{EnvConfig, EnvValue};

/// Generic parameter only on a skipped field.
#[derive(Default, EnvConfig)]
struct Wrapper<T: Default> {
    name: String,
    #[envstruct(skip)]
    extra: T,
}

/// Generic parameter on a loadable field.
#[derive(Default, EnvConfig)]
#[envstruct(prefix = "lim")]
struct Limit<N>
where
    N: Default + EnvValue,
{
    #[envstruct(default = "5")]
    max: N,
}

fn main() {
    let env = BTreeMap::from([(String::from("NAME"), String::from("svc"))]);
    let wrapper: Wrapper<Vec<u8>> = envstruct::load_from(&env, "");
    assert_eq!(wrapper.name, "svc");
    assert!(wrapper.extra.is_empty());

    let limit: Limit<u32> = envstruct::load_from(&env, Limit::<u32>::prefix());
    assert_eq!(limit.max, 5);
}
