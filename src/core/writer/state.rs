use crate::core::error::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Object,
    Array,
}

impl Scope {
    pub fn name(self) -> &'static str {
        match self {
            Scope::Object => "object",
            Scope::Array => "array",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Frame {
    scope: Scope,
    /// No member/element has been written into this scope yet.
    first: bool,
    /// Only ever set while `scope` is `Object`.
    pending_key: Option<String>,
}

/// Where the next value lands, as decided by the scope stack.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Element { first: bool },
    Member { first: bool, key: String },
}

/// Nesting state of one document.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ScopeStack {
    frames: Vec<Frame>,
    complete: bool,
}

impl ScopeStack {
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn key(&mut self, name: &str) -> Result<(), Violation> {
        let Some(frame) = self.frames.last_mut() else {
            return Err(Violation::KeyOutsideObject(name.to_string()));
        };
        match (frame.scope, &frame.pending_key) {
            (Scope::Array, _) => Err(Violation::KeyInArray(name.to_string())),
            (Scope::Object, Some(pending)) => Err(Violation::KeyAlreadyPending {
                pending: pending.clone(),
                requested: name.to_string(),
            }),
            (Scope::Object, None) => {
                frame.pending_key = Some(name.to_string());
                Ok(())
            }
        }
    }

    /// Claims the slot for a scalar or a nested scope, consuming the pending key.
    pub fn begin_value(&mut self) -> Result<Slot, Violation> {
        if self.complete {
            return Err(Violation::DocumentComplete);
        }
        let Some(frame) = self.frames.last_mut() else {
            return Ok(Slot::Root);
        };
        let first = frame.first;
        match frame.scope {
            Scope::Array => {
                frame.first = false;
                Ok(Slot::Element { first })
            }
            Scope::Object => {
                let key = frame.pending_key.take().ok_or(Violation::ValueWithoutKey)?;
                frame.first = false;
                Ok(Slot::Member { first, key })
            }
        }
    }

    /// Marks a scalar value as written. A scalar at the root completes the document.
    pub fn end_value(&mut self) {
        if self.frames.is_empty() {
            self.complete = true;
        }
    }

    pub fn push(&mut self, scope: Scope) {
        self.frames.push(Frame {
            scope,
            first: true,
            pending_key: None,
        });
    }

    /// Pops the innermost scope and returns the scope that now encloses the
    /// finished one, if any.
    pub fn pop(&mut self, closing: Scope) -> Result<Option<Scope>, Violation> {
        let frame = self
            .frames
            .last()
            .ok_or(Violation::NothingToClose(closing.name()))?;
        if frame.scope != closing {
            return Err(Violation::MismatchedEnd {
                open: frame.scope.name(),
                closing: closing.name(),
            });
        }
        if let Some(key) = &frame.pending_key {
            return Err(Violation::DanglingKey(key.clone()));
        }
        self.frames.pop();
        match self.frames.last() {
            Some(parent) => Ok(Some(parent.scope)),
            None => {
                self.complete = true;
                Ok(None)
            }
        }
    }

    pub fn finish(&self) -> Result<(), Violation> {
        if !self.frames.is_empty() {
            return Err(Violation::Unbalanced(self.frames.len()));
        }
        if !self.complete {
            return Err(Violation::EmptyDocument);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_at_root_completes_document() {
        let mut state = ScopeStack::default();
        assert_eq!(state.begin_value(), Ok(Slot::Root));
        state.end_value();
        assert_eq!(state.finish(), Ok(()));
        assert_eq!(state.begin_value(), Err(Violation::DocumentComplete));
    }

    #[test]
    fn object_members_consume_keys() {
        let mut state = ScopeStack::default();
        assert_eq!(state.begin_value(), Ok(Slot::Root));
        state.push(Scope::Object);
        assert_eq!(state.begin_value(), Err(Violation::ValueWithoutKey));
        assert_eq!(state.key("a"), Ok(()));
        assert_eq!(
            state.key("b"),
            Err(Violation::KeyAlreadyPending {
                pending: "a".into(),
                requested: "b".into()
            })
        );
        assert_eq!(
            state.begin_value(),
            Ok(Slot::Member {
                first: true,
                key: "a".into()
            })
        );
        state.end_value();
        assert_eq!(state.key("b"), Ok(()));
        assert_eq!(
            state.begin_value(),
            Ok(Slot::Member {
                first: false,
                key: "b".into()
            })
        );
        assert_eq!(state.pop(Scope::Object), Ok(None));
        assert_eq!(state.finish(), Ok(()));
    }

    #[test]
    fn key_is_rejected_in_array_and_at_root() {
        let mut state = ScopeStack::default();
        assert_eq!(
            state.key("a"),
            Err(Violation::KeyOutsideObject("a".into()))
        );
        state.push(Scope::Array);
        assert_eq!(state.key("a"), Err(Violation::KeyInArray("a".into())));
        assert_eq!(state.begin_value(), Ok(Slot::Element { first: true }));
        assert_eq!(state.begin_value(), Ok(Slot::Element { first: false }));
    }

    #[test]
    fn pop_checks_scope_and_pending_key() {
        let mut state = ScopeStack::default();
        state.push(Scope::Object);
        state.push(Scope::Array);
        assert_eq!(
            state.pop(Scope::Object),
            Err(Violation::MismatchedEnd {
                open: "array",
                closing: "object"
            })
        );
        assert_eq!(state.pop(Scope::Array), Ok(Some(Scope::Object)));
        state.key("dangling").unwrap();
        assert_eq!(
            state.pop(Scope::Object),
            Err(Violation::DanglingKey("dangling".into()))
        );
        assert_eq!(state.finish(), Err(Violation::Unbalanced(1)));
    }

    #[test]
    fn empty_document_is_rejected() {
        let mut state = ScopeStack::default();
        assert_eq!(state.finish(), Err(Violation::EmptyDocument));
        assert_eq!(
            state.pop(Scope::Array),
            Err(Violation::NothingToClose("array"))
        );
    }
}
