use std::env;

pub const ENV_DEFAULT_PATTERN: &str = "SEQRENAME_PATTERN";
pub const ENV_DEFAULT_EXT: &str = "SEQRENAME_EXT";

/// Defaults picked up from the environment (or a .env file loaded at
/// startup). CLI flags and interactive input always win over these.
#[derive(Debug, Clone, Default)]
pub struct EnvDefaults {
    pub pattern: Option<String>,
    pub extension: Option<String>,
}

pub fn defaults_from_env() -> EnvDefaults {
    EnvDefaults {
        pattern: non_empty(env::var(ENV_DEFAULT_PATTERN).ok()),
        extension: non_empty(env::var(ENV_DEFAULT_EXT).ok()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to serialize env var tests (they share global state)
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_absent() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::remove_var(ENV_DEFAULT_PATTERN);
        env::remove_var(ENV_DEFAULT_EXT);

        let defaults = defaults_from_env();

        assert!(defaults.pattern.is_none());
        assert!(defaults.extension.is_none());
    }

    #[test]
    fn test_defaults_from_env_values() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::set_var(ENV_DEFAULT_PATTERN, "file_{num}");
        env::set_var(ENV_DEFAULT_EXT, "txt");

        let defaults = defaults_from_env();

        assert_eq!(defaults.pattern.as_deref(), Some("file_{num}"));
        assert_eq!(defaults.extension.as_deref(), Some("txt"));

        env::remove_var(ENV_DEFAULT_PATTERN);
        env::remove_var(ENV_DEFAULT_EXT);
    }

    #[test]
    fn test_blank_values_treated_as_absent() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::set_var(ENV_DEFAULT_PATTERN, "   ");

        let defaults = defaults_from_env();
        assert!(defaults.pattern.is_none());

        env::remove_var(ENV_DEFAULT_PATTERN);
    }
}
