//! In-process router: current path plus a back stack.

use crate::config::DEFAULT_ROUTE;
use crate::context::Navigator;

#[derive(Debug, Clone)]
pub struct Router {
    path: String,
    history: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE)
    }
}

impl Router {
    pub fn new(initial: &str) -> Self {
        Self {
            path: initial.to_string(),
            history: Vec::new(),
        }
    }

    /// Return to the previous path. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!("route back: {} -> {}", self.path, previous);
                self.path = previous;
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Navigator for Router {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: &str) {
        if self.path == path {
            return;
        }
        tracing::debug!("route: {} -> {}", self.path, path);
        let previous = std::mem::replace(&mut self.path, path.to_string());
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::default();
        assert_eq!(router.current_path(), "/balance");

        router.navigate("/bond");
        router.navigate("/docs");
        assert_eq!(router.current_path(), "/docs");
        assert_eq!(router.history(), ["/balance", "/bond"]);

        assert!(router.back());
        assert_eq!(router.current_path(), "/bond");
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.current_path(), "/balance");
    }

    #[test]
    fn test_navigate_to_current_path_is_noop() {
        let mut router = Router::new("/bond");
        router.navigate("/bond");
        assert!(router.history().is_empty());
    }
}
