//! Loading from `.env` files and the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use envconf::{Envconf, Environment, ErrorKind, Source};

#[derive(Debug, Default, Envconf)]
struct Service {
    #[envconf("ENVCONF_TEST_NAME,required")]
    name: String,
    #[envconf("ENVCONF_TEST_PORT")]
    port: u16,
    #[envconf("ENVCONF_TEST_ORIGINS")]
    origins: Vec<String>,
}

fn write_env_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("envconf-{}-{}.env", name, std::process::id()));
    fs::write(&path, contents).expect("write .env file");
    path
}

fn read_env_file(path: &Path) -> Environment {
    dotenvy::from_path_iter(path)
        .expect("open .env file")
        .collect::<Result<Vec<_>, _>>()
        .expect("parse .env file")
        .into_iter()
        .collect()
}

#[test]
fn test_load_from_env_file() {
    let path = write_env_file(
        "load",
        "ENVCONF_TEST_NAME=billing\nENVCONF_TEST_PORT=7000\nENVCONF_TEST_ORIGINS=\"a.test, b.test\"\n",
    );
    let env = read_env_file(&path);
    fs::remove_file(&path).ok();

    let service = Service::from_source(&env).unwrap();
    assert_eq!(service.name, "billing");
    assert_eq!(service.port, 7000);
    assert_eq!(service.origins, vec!["a.test", "b.test"]);
}

#[test]
fn test_env_file_layered_over_snapshot() {
    let path = write_env_file("layered", "ENVCONF_TEST_PORT=7001\n");
    let mut env = Environment::default();
    env.set("ENVCONF_TEST_NAME", "base");
    env.set("ENVCONF_TEST_PORT", "1");
    env.extend(read_env_file(&path));
    fs::remove_file(&path).ok();

    assert_eq!(env.get("ENVCONF_TEST_PORT"), Some("7001"));
    let service = Service::from_source(&env).unwrap();
    assert_eq!(service.name, "base");
    assert_eq!(service.port, 7001);
}

#[test]
fn test_empty_env_file_reports_missing() {
    let path = write_env_file("empty", "");
    let env = read_env_file(&path);
    fs::remove_file(&path).ok();

    let errors = Service::from_source(&env).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "ENVCONF_TEST_NAME");
    assert_eq!(errors[0].kind, ErrorKind::Missing);
}

#[test]
fn test_from_env_reads_process_environment() {
    // ENVCONF_TEST_* is never set by the harness, so the required name is missing.
    let errors = Service::from_env().unwrap_err();
    assert_eq!(errors[0].field, "name");
}
