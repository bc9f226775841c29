use crate::error::Result;
use std::fmt;

/// Identity of the shell session that owns a development record.
///
/// Processes started by the same parent share one scope, so a child can
/// recompute the record location without being told. Everything inside the
/// crate takes the scope as an explicit value; only [`SessionScope::current`]
/// looks at the process tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionScope {
    id: u32,
}

impl SessionScope {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// Scope of the invoking session: the parent process id.
    #[cfg(unix)]
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::os::unix::process::parent_id()))
    }

    #[cfg(not(unix))]
    pub fn current() -> Result<Self> {
        Err(crate::error::ArmadaError::SessionUnavailable)
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for SessionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
