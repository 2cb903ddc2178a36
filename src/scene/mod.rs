//!
//! # Scene graph
//!
//! Scenes are described as `Module`s: ordered, append-only programs of transform, attribute and
//! drawing instructions, interpreted against a view matrix and a caller-supplied global
//! transform. Modules reference each other through shared handles, so a sub-scene built once can
//! be instanced under any number of transforms; the interpreter copies the `DrawState` at every
//! module boundary, which keeps attribute changes scoped to the module that made them.
//!

mod draw_state;
mod element;
mod module;

pub use draw_state::*;
pub use element::*;
pub use module::*;
