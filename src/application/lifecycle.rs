use std::fmt;

/// The stages an `Application` moves through. Transitions only go forward, one step at a
/// time, and are never re-entered. `terminate` is the one shortcut, from any live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lifecycle {
    Uninitialized,
    WindowCreated,
    ResourcesBound,
    Running,
    Terminated,
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum LifecycleError {
    #[fail(display = "Can not move from {} to {}.", from, to)]
    InvalidTransition { from: Lifecycle, to: Lifecycle },
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::Uninitialized
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Lifecycle {
    /// The state that follows this one, `None` once terminated.
    pub fn next(self) -> Option<Lifecycle> {
        match self {
            Lifecycle::Uninitialized => Some(Lifecycle::WindowCreated),
            Lifecycle::WindowCreated => Some(Lifecycle::ResourcesBound),
            Lifecycle::ResourcesBound => Some(Lifecycle::Running),
            Lifecycle::Running => Some(Lifecycle::Terminated),
            Lifecycle::Terminated => None,
        }
    }

    pub fn advance(self, to: Lifecycle) -> Result<Lifecycle, LifecycleError> {
        if self.next() == Some(to) {
            info!("Lifecycle {} -> {}.", self, to);
            Ok(to)
        } else {
            Err(LifecycleError::InvalidTransition { from: self, to })
        }
    }

    /// Moves straight to `Terminated`, used when start-up or the frame loop fails part way.
    /// Fails only if already terminated.
    pub fn terminate(self) -> Result<Lifecycle, LifecycleError> {
        if self == Lifecycle::Terminated {
            return Err(LifecycleError::InvalidTransition {
                from: self,
                to: Lifecycle::Terminated,
            });
        }

        info!("Lifecycle {} -> {}.", self, Lifecycle::Terminated);
        Ok(Lifecycle::Terminated)
    }
}
