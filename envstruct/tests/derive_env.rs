//! Behavioural tests for `#[derive(EnvConfig)]` against the process
//! environment.
//!
//! Each test holds an environment scope for the whole load so concurrent
//! tests cannot change variables mid-read.

use anyhow::{Result, ensure};
use envstruct::{EnvConfig, FieldKind, describe, load_envs, load_envs_with_prefix};
use rstest::rstest;
use test_helpers::env;

#[derive(Debug, Default, PartialEq, EnvConfig)]
#[envstruct(prefix = "pref")]
struct Settings {
    username: String,
    #[envstruct(default = "s3cr37")]
    secret_key: String,
    #[envstruct(default = "true")]
    auto_restart: bool,
    #[envstruct(skip)]
    ignored_field: String,
}

#[derive(Debug, Default, EnvConfig)]
#[envstruct(prefix = "DRV")]
struct Typed {
    enabled: bool,
    workers: i8,
    port: u16,
    timeout: i64,
    ratio: f32,
    scale: f64,
    hosts: Vec<String>,
    #[envstruct(default = "a,b")]
    tags: Vec<String>,
    #[envstruct(default = "")]
    region: String,
    #[envstruct(default = "7")]
    retries: i32,
}

const TYPED_KEYS: [&str; 10] = [
    "DRV_ENABLED",
    "DRV_WORKERS",
    "DRV_PORT",
    "DRV_TIMEOUT",
    "DRV_RATIO",
    "DRV_SCALE",
    "DRV_HOSTS",
    "DRV_TAGS",
    "DRV_REGION",
    "DRV_RETRIES",
];

/// Sets the given `DRV_*` variables and clears every other one.
fn typed_env(set: &[(&'static str, &'static str)]) -> env::EnvScope {
    env::vars(TYPED_KEYS.iter().map(|key| {
        let value = set.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
        (*key, value)
    }))
}

#[rstest]
fn loads_prefixed_settings() -> Result<()> {
    let _env = env::vars([
        ("PREF_USERNAME", Some("Rob")),
        ("PREF_AUTO_RESTART", Some("false")),
        ("PREF_SECRET_KEY", None),
        ("PREF_IGNORED_FIELD", Some("should not load")),
    ]);
    let settings: Settings = load_envs();
    let expected = Settings {
        username: String::from("Rob"),
        secret_key: String::from("s3cr37"),
        auto_restart: false,
        ignored_field: String::new(),
    };
    ensure!(settings == expected, "unexpected settings: {settings:?}");
    Ok(())
}

#[rstest]
fn explicit_prefix_overrides_declared_prefix() -> Result<()> {
    let _env = env::vars([
        ("OTHER_USERNAME", Some("Ada")),
        ("PREF_USERNAME", Some("Rob")),
    ]);
    let settings: Settings = load_envs_with_prefix("other");
    ensure!(settings.username == "Ada", "got {:?}", settings.username);
    Ok(())
}

#[rstest]
fn missing_variables_leave_zero_values() -> Result<()> {
    let _env = typed_env(&[]);
    let cfg: Typed = load_envs();
    ensure!(!cfg.enabled, "bool should default to false");
    ensure!(cfg.workers == 0 && cfg.port == 0 && cfg.timeout == 0, "{cfg:?}");
    ensure!(cfg.ratio == 0.0 && cfg.scale == 0.0, "{cfg:?}");
    ensure!(cfg.hosts.is_empty(), "hosts: {:?}", cfg.hosts);
    ensure!(cfg.region.is_empty(), "empty default means no default");
    ensure!(cfg.tags == ["a", "b"], "tags: {:?}", cfg.tags);
    ensure!(cfg.retries == 7, "retries: {}", cfg.retries);
    Ok(())
}

#[rstest]
#[case::upper("YES", true)]
#[case::lower("no", false)]
#[case::numeric("1", true)]
#[case::on("on", true)]
#[case::garbage("maybe", false)]
fn booleans_follow_truthy_set(#[case] raw: &'static str, #[case] expected: bool) -> Result<()> {
    let _env = typed_env(&[("DRV_ENABLED", raw)]);
    let cfg: Typed = load_envs();
    ensure!(cfg.enabled == expected, "{raw:?} gave {}", cfg.enabled);
    Ok(())
}

#[rstest]
fn numbers_are_parsed_at_declared_width() -> Result<()> {
    let _env = typed_env(&[
        ("DRV_WORKERS", "-12"),
        ("DRV_PORT", "8080"),
        ("DRV_TIMEOUT", "9000000000"),
        ("DRV_RATIO", "0.5"),
        ("DRV_SCALE", "-2.25"),
    ]);
    let cfg: Typed = load_envs();
    ensure!(cfg.workers == -12, "workers: {}", cfg.workers);
    ensure!(cfg.port == 8080, "port: {}", cfg.port);
    ensure!(cfg.timeout == 9_000_000_000, "timeout: {}", cfg.timeout);
    ensure!(cfg.ratio == 0.5, "ratio: {}", cfg.ratio);
    ensure!(cfg.scale == -2.25, "scale: {}", cfg.scale);
    Ok(())
}

#[rstest]
fn malformed_numbers_are_silently_zeroed() -> Result<()> {
    let _env = typed_env(&[
        ("DRV_WORKERS", "abc"),
        ("DRV_PORT", "70000"),
        ("DRV_RATIO", "half"),
        ("DRV_RETRIES", "many"),
    ]);
    let cfg: Typed = load_envs();
    ensure!(cfg.workers == 0, "workers: {}", cfg.workers);
    ensure!(cfg.port == 0, "port: {}", cfg.port);
    ensure!(cfg.ratio == 0.0, "ratio: {}", cfg.ratio);
    // A present but malformed value does not fall back to the default.
    ensure!(cfg.retries == 0, "retries: {}", cfg.retries);
    Ok(())
}

#[rstest]
fn empty_variable_uses_default() -> Result<()> {
    let _env = typed_env(&[("DRV_RETRIES", ""), ("DRV_TAGS", "")]);
    let cfg: Typed = load_envs();
    ensure!(cfg.retries == 7, "retries: {}", cfg.retries);
    ensure!(cfg.tags == ["a", "b"], "tags: {:?}", cfg.tags);
    Ok(())
}

// Lists are recognised from the declared `Vec<String>` type alone.
#[rstest]
#[case::three("a,b,c", &["a", "b", "c"])]
#[case::keeps_spaces("a, b", &["a", " b"])]
#[case::keeps_duplicates("a,a", &["a", "a"])]
fn string_lists_split_on_commas(
    #[case] raw: &'static str,
    #[case] expected: &[&str],
) -> Result<()> {
    let _env = typed_env(&[("DRV_HOSTS", raw)]);
    let cfg: Typed = load_envs();
    ensure!(cfg.hosts == expected, "hosts: {:?}", cfg.hosts);
    Ok(())
}

#[rstest]
fn skipped_fields_are_not_described() -> Result<()> {
    let keys: Vec<String> = describe::<Settings>(Settings::prefix())
        .into_iter()
        .map(|info| info.key)
        .collect();
    ensure!(
        keys == ["PREF_USERNAME", "PREF_SECRET_KEY", "PREF_AUTO_RESTART"],
        "keys: {keys:?}"
    );
    Ok(())
}

#[rstest]
fn describe_reports_kinds_and_defaults() -> Result<()> {
    let info = describe::<Typed>("DRV");
    let tags = info.iter().find(|f| f.name == "tags");
    ensure!(
        tags.is_some_and(|f| f.kind == FieldKind::StrList && f.default == Some("a,b")),
        "tags: {tags:?}"
    );
    let region = info.iter().find(|f| f.name == "region");
    ensure!(
        region.is_some_and(|f| f.default.is_none()),
        "region: {region:?}"
    );
    let i8_kind = FieldKind::Signed { bits: 8 };
    let workers = info.iter().find(|f| f.name == "workers");
    ensure!(
        workers.is_some_and(|f| f.kind == i8_kind),
        "workers: {workers:?}"
    );
    Ok(())
}
