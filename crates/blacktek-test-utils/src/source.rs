use blacktek_config::{ConfigError, ConfigSource, Environment};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Response {
    Env(Environment),
    Fail(String),
    Missing,
}

/// In-memory source whose answer can be swapped between loads. Share it
/// with the store through an `Arc`.
#[derive(Debug)]
pub struct StaticSource {
    response: Mutex<Response>,
    reads: Mutex<Vec<PathBuf>>,
}

impl StaticSource {
    /// Source answering every read with `env`.
    pub fn new(env: Environment) -> Self {
        Self::with_response(Response::Env(env))
    }

    /// Source that fails every read with a script error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Response::Fail(message.into()))
    }

    /// Source that behaves like a missing file.
    pub fn missing() -> Self {
        Self::with_response(Response::Missing)
    }

    fn with_response(response: Response) -> Self {
        Self {
            response: Mutex::new(response),
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Answers later reads with `env`.
    pub fn set(&self, env: Environment) {
        *self.response.lock() = Response::Env(env);
    }

    /// Fails later reads with a script error.
    pub fn fail(&self, message: impl Into<String>) {
        *self.response.lock() = Response::Fail(message.into());
    }

    /// Paths passed to `read`, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().clone()
    }
}

impl ConfigSource for StaticSource {
    fn read(&self, path: &Path) -> Result<Environment, ConfigError> {
        self.reads.lock().push(path.to_path_buf());
        match &*self.response.lock() {
            Response::Env(env) => Ok(env.clone()),
            Response::Fail(message) => Err(ConfigError::ScriptFailed(message.clone())),
            Response::Missing => Err(ConfigError::ReadFailed(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))),
        }
    }
}
