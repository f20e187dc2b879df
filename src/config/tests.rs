use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_duetto_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("DUETTO_CONFIG_PATH", "/tmp/duetto-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/duetto-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("duetto")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("duetto")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playlist]
default_resource = "./tunes/all.json"
resource_template = "./tunes/{name}.json"

[playback]
initial_volume = 60
volume_step = 10

[lyrics]
placeholder = "..."
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DUETTO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("DUETTO__PLAYBACK__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.playlist.default_resource, "./tunes/all.json");
    assert_eq!(s.playlist.resource_template, "./tunes/{name}.json");
    assert_eq!(s.playback.initial_volume, 60);
    assert_eq!(s.playback.volume_step, 10);
    assert_eq!(s.lyrics.placeholder, "...");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
initial_volume = 60
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DUETTO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("DUETTO__PLAYBACK__INITIAL_VOLUME", "35");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.initial_volume, 35);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.playback.volume_step = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playlist.resource_template = "./tunes/fixed.json".to_string();
    assert!(s.validate().is_err());
}
