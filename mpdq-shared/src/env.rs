use std::sync::LazyLock;

/// Read access to the process environment.
///
/// With the `test-impl` feature the variables live in an in-memory map so
/// tests can set up `MPD_HOST` and friends without touching the real process
/// environment.
pub struct Env {
    #[cfg(feature = "test-impl")]
    vars: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

pub static ENV: LazyLock<Env> = LazyLock::new(|| Env {
    #[cfg(feature = "test-impl")]
    vars: std::sync::Mutex::new(std::collections::HashMap::default()),
});

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Env")
    }
}

impl Env {
    /// Returns the value of `key` if it is set and not empty.
    pub fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

#[cfg(not(feature = "test-impl"))]
impl Env {
    pub fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn set(&self, _key: impl Into<String>, _value: impl Into<String>) {}

    pub fn remove(&self, _key: &str) {}

    pub fn clear(&self) {}
}

#[cfg(feature = "test-impl")]
#[allow(clippy::unwrap_used, clippy::missing_panics_doc)]
impl Env {
    pub fn var(&self, key: &str) -> Option<String> {
        self.vars.lock().unwrap().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.lock().unwrap().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.lock().unwrap().remove(key);
    }

    pub fn clear(&self) {
        self.vars.lock().unwrap().clear();
    }
}
