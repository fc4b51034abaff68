use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/data.json";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub fn server_port() -> u16 {
    non_empty_env("PORT")
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// File served as `/data.json`. Replaced out-of-band by the ingest job.
pub fn snapshot_path() -> PathBuf {
    non_empty_env("SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH))
}

pub fn static_dir() -> PathBuf {
    non_empty_env("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        temp_env::with_vars_unset(["PORT", "SNAPSHOT_PATH", "STATIC_DIR"], || {
            assert_eq!(server_port(), 3000);
            assert_eq!(snapshot_path(), PathBuf::from("data/data.json"));
            assert_eq!(static_dir(), PathBuf::from("client/dist"));
        });
    }

    #[test]
    fn env_overrides_are_honoured() {
        temp_env::with_vars(
            [
                ("PORT", Some("8080")),
                ("SNAPSHOT_PATH", Some("/srv/streams.json")),
                ("STATIC_DIR", Some(" /srv/www ")),
            ],
            || {
                assert_eq!(server_port(), 8080);
                assert_eq!(snapshot_path(), PathBuf::from("/srv/streams.json"));
                assert_eq!(static_dir(), PathBuf::from("/srv/www"));
            },
        );
    }

    #[test]
    fn invalid_port_falls_back() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("0"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("SNAPSHOT_PATH", Some("   "), || {
            assert_eq!(snapshot_path(), PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        });
    }
}
