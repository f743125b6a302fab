use std::collections::HashMap;

use super::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Global,
    /// Opened by a function call. Names missing here resolve in the global
    /// frame directly, skipping the caller's frames.
    Call,
    /// Opened by a block or a loop iteration.
    Block,
}

/// Variable bindings of one runtime scope.
#[derive(Debug, Clone)]
pub struct Frame {
    pub name: String,
    pub kind: FrameKind,
    values: HashMap<String, Value>,
}

impl Frame {
    pub fn new(name: &str, kind: FrameKind) -> Self {
        Frame {
            name: name.to_string(),
            kind,
            values: HashMap::new(),
        }
    }

    pub fn global() -> Self {
        Frame::new("global", FrameKind::Global)
    }

    pub fn call(function: &str) -> Self {
        Frame::new(function, FrameKind::Call)
    }

    pub fn block(name: &str) -> Self {
        Frame::new(name, FrameKind::Block)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn declare(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }
}

/// Stack of runtime frames, innermost last. The global frame sits at the
/// bottom and is never popped.
#[derive(Debug)]
pub struct MemoryStack {
    frames: Vec<Frame>,
}

impl MemoryStack {
    pub fn new() -> Self {
        MemoryStack {
            frames: vec![Frame::global()],
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    pub fn global_frame(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop_frame(&mut self) -> Option<Frame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Index of the frame `name` resolves to.
    ///
    /// Block frames fall through to the frame below them. A call frame
    /// falls through to the global frame only.
    fn locate(&self, name: &str) -> Option<usize> {
        for (index, frame) in self.frames.iter().enumerate().rev() {
            if frame.contains(name) {
                return Some(index);
            }
            if frame.kind == FrameKind::Call {
                return self.frames[0].contains(name).then_some(0);
            }
        }

        None
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.locate(name)
            .and_then(|index| self.frames[index].get(name))
            .cloned()
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        let index = self.locate(name)?;
        self.frames[index].values.get_mut(name)
    }

    /// Binds `name` in the innermost frame, replacing a binding of that frame.
    pub fn declare(&mut self, name: &str, value: Value) {
        let index = self.frames.len() - 1;
        self.frames[index].declare(name.to_string(), value);
    }

    pub fn declare_global(&mut self, name: &str, value: Value) {
        self.frames[0].declare(name.to_string(), value);
    }

    /// Overwrites an existing binding, following the lookup rules. Returns
    /// false and drops `value` when `name` is not bound.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.lookup_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Like `assign`, but an unbound name becomes a new global.
    pub fn assign_or_declare_global(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.lookup_mut(name) {
            *slot = value;
            return;
        }
        self.declare_global(name, value);
    }
}

impl Default for MemoryStack {
    fn default() -> Self {
        Self::new()
    }
}
