//! Scope management for the Tern interpreter.
//!
//! The interpreter's evaluation state is a stack of *frames*, each of
//! which is a stack of *lookup tables* mapping names to values. Frame 0 is
//! the call-root frame holding the globals in its bottom table. Within a
//! frame, blocks push and pop tables to model lexical block scope.
//!
//! A function call pushes a new frame whose bottom table is a copy of the
//! current frame's bottom table (a snapshot of the globals) plus a fresh
//! table for the parameters. This gives callees visibility of globals and
//! recursion, but deliberately no closure over enclosing non-global
//! scopes, and no write-through: global mutations made inside a call are
//! not visible to the caller.

use std::collections::HashMap;

use super::value::Value;

/// A single lookup table mapping names to values.
type Table = HashMap<String, Value>;

/// A per-call stack of lookup tables.
#[derive(Debug, Default)]
struct Frame {
    tables: Vec<Table>,
}

impl Frame {
    fn with_bottom(bottom: Table) -> Self {
        Frame {
            tables: vec![bottom],
        }
    }
}

/// The interpreter's scope stack: a stack of frames of tables.
///
/// Name resolution (`get`/`assign`) walks the innermost frame's tables
/// from top to bottom and never crosses a frame boundary. `define` only
/// consults the innermost table.
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    /// Creates a scope stack with a single call-root frame holding one
    /// empty globals table.
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![Frame::with_bottom(Table::new())],
        }
    }

    fn current_frame(&self) -> &Frame {
        // frames is never empty: new() seeds one frame and pop_frame
        // refuses to pop the call-root frame
        self.frames.last().expect("scope stack has no frames")
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("scope stack has no frames")
    }

    /// Defines `name` in the innermost table.
    ///
    /// Returns `false` without modifying anything if `name` is already
    /// present in the innermost table. Shadowing a name from an *outer*
    /// table is allowed.
    #[must_use]
    pub fn define(&mut self, name: &str, value: Value) -> bool {
        let table = self
            .current_frame_mut()
            .tables
            .last_mut()
            .expect("frame has no tables");
        if table.contains_key(name) {
            return false;
        }
        table.insert(name.to_string(), value);
        true
    }

    /// Assigns `value` to an existing `name`.
    ///
    /// Walks the innermost frame's tables from top to bottom and updates
    /// the first binding found. Returns `false` if `name` is not bound in
    /// the current frame.
    #[must_use]
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        for table in self.current_frame_mut().tables.iter_mut().rev() {
            if let Some(slot) = table.get_mut(name) {
                *slot = value;
                return true;
            }
        }
        false
    }

    /// Looks up `name` in the current frame.
    ///
    /// Walks the innermost frame's tables from top to bottom; lookups do
    /// not cross frame boundaries.
    pub fn get(&self, name: &str) -> Option<&Value> {
        for table in self.current_frame().tables.iter().rev() {
            if let Some(value) = table.get(name) {
                return Some(value);
            }
        }
        None
    }

    /// Pushes a fresh block table onto the current frame.
    pub fn push_table(&mut self) {
        self.current_frame_mut().tables.push(Table::new());
    }

    /// Pops the innermost block table of the current frame.
    ///
    /// # Panics
    /// Panics if this would pop the frame's bottom table; every pop must
    /// balance a prior [`push_table`](Self::push_table).
    pub fn pop_table(&mut self) {
        let frame = self.current_frame_mut();
        assert!(frame.tables.len() > 1, "cannot pop the bottom table");
        frame.tables.pop();
    }

    /// Pushes a call frame.
    ///
    /// The new frame's bottom table is a copy of the current frame's
    /// bottom table (the globals snapshot), topped with a fresh table for
    /// parameter bindings.
    pub fn push_frame(&mut self) {
        let globals = self.current_frame().tables[0].clone();
        let mut frame = Frame::with_bottom(globals);
        frame.tables.push(Table::new());
        self.frames.push(frame);
    }

    /// Pops the current call frame.
    ///
    /// # Panics
    /// Panics if this would pop the call-root frame; every pop must
    /// balance a prior [`push_frame`](Self::push_frame).
    pub fn pop_frame(&mut self) {
        assert!(self.frames.len() > 1, "cannot pop the call-root frame");
        self.frames.pop();
    }

    /// Returns the number of frames on the stack.
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the number of tables in the current frame.
    pub fn table_depth(&self) -> usize {
        self.current_frame().tables.len()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}
