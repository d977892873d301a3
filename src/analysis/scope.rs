//! Block scope tracking
//!
//! CMake scripts in the wild are not always balanced: a stray `endmacro()` or a `function` that is never closed
//! must not derail discovery of the blocks around it. The tracker keeps a stack of open blocks and matches each
//! closer against the innermost open block of the same kind, discarding any differently-kinded blocks above it.

use cmakedoc_core::lang::commands::CallableKind;

/// An open block on the stack: its kind and the slot of the callable it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBlock {
    kind: CallableKind,
    slot: usize,
}

/// Stack of currently open `function`/`macro` blocks.
#[derive(Debug, Default)]
pub(crate) struct ScopeTracker {
    stack: Vec<OpenBlock>,
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an opener. `slot` is handed back by the matching [`ScopeTracker::close`].
    pub fn open(&mut self, kind: CallableKind, slot: usize) {
        self.stack.push(OpenBlock { kind, slot });
    }

    /// Close the innermost open block of `kind`.
    ///
    /// Pops entries until one of the same kind is found and returns its slot. Popped entries of the other kind are
    /// dropped and keep their default range. With no matching entry the stack ends up empty and `None` is
    /// returned; the closer is ignored.
    pub fn close(&mut self, kind: CallableKind) -> Option<usize> {
        while let Some(block) = self.stack.pop() {
            if block.kind == kind {
                return Some(block.slot);
            }
            tracing::debug!(open = %block.kind, closer = %kind, "discarding block interrupted by a mismatched closer");
        }
        None
    }

    /// Number of blocks still open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
