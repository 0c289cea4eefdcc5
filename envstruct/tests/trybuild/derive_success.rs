//! Derive on structs exercising every supported attribute and field type.

use std::sync::Arc;

use envstruct::EnvConfig;

/// Loadable settings covering each supported field type.
#[derive(Default, EnvConfig)]
#[envstruct(prefix = "app")]
struct Everything {
    flag: bool,
    small: i8,
    medium: i16,
    normal: i32,
    large: i64,
    native: isize,
    byte: u8,
    count: usize,
    single: f32,
    double: f64,
    #[envstruct(default = "x,y")]
    list: Vec<String>,
    #[envstruct(default = "fallback")]
    r#type: String,
    #[envstruct(skip)]
    handle: Option<Arc<()>>,
}

/// Unit structs load trivially.
#[derive(Default, EnvConfig)]
struct Nothing;

fn main() {
    let everything: Everything = envstruct::load_envs();
    let _nothing: Nothing = envstruct::load_envs();
    assert_eq!(Everything::prefix(), "app");
    assert_eq!(Everything::fields().len(), 12);
    assert!(everything.handle.is_none());
    assert_eq!(Nothing::prefix(), "");
}
