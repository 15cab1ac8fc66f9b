//! Human-readable rendering of reflected values for diagnostics.
//!
//! Rendering never fails: cycles, deep graphs, unreadable members and
//! panicking getters all produce a placeholder instead of an error.

use crate::comparer::Identity;
use crate::reflect::{address, Composite, Reflect, Reflected, Sequence, TypeDescriptor};
use std::panic::{self, AssertUnwindSafe};

/// Nesting depth below which composites and collections are elided
pub const MAX_DEPTH: usize = 8;

/// Elements rendered per collection before the rest is summarized
pub const MAX_ELEMENTS: usize = 32;

/// Render a value, e.g. `Person { name: "a", tags: ["x", "y"] }`
pub fn stringify(value: &dyn Reflect) -> String {
    let mut printer = Printer::default();
    printer.write_guarded(None, |p| p.write(value, 0));
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    visiting: Vec<Identity>,
}

impl Printer {
    /// Run `write`, replacing whatever it produced with a placeholder if it panics
    fn write_guarded(&mut self, ty: Option<TypeDescriptor>, write: impl FnOnce(&mut Printer)) {
        let mark = self.out.len();
        let visiting = self.visiting.len();

        if panic::catch_unwind(AssertUnwindSafe(|| write(self))).is_err() {
            self.out.truncate(mark);
            self.visiting.truncate(visiting);
            match ty {
                Some(ty) => self.out.push_str(&format!("<unprintable {}>", ty)),
                None => self.out.push_str("<unprintable>"),
            }
        }
    }

    fn write(&mut self, value: &dyn Reflect, depth: usize) {
        match value.reflect() {
            Reflected::Null => self.out.push_str("null"),
            Reflected::Simple(simple) => self.out.push_str(&simple.to_string()),
            Reflected::Sequence(sequence) => self.write_sequence(sequence, depth),
            Reflected::Composite(composite) => self.write_composite(composite, depth),
            Reflected::Indirect(handle) => self.write(&*handle, depth),
            Reflected::Inaccessible(err) => {
                self.out.push_str(&format!("<inaccessible: {}>", err));
            }
        }
    }

    /// Returns false (after writing a placeholder) when `ty` must not be expanded
    fn enter(&mut self, addr: usize, ty: TypeDescriptor, depth: usize) -> bool {
        // a struct and its first member share an address
        let identity = Identity::new(addr, ty.id());
        if self.visiting.contains(&identity) {
            self.out.push_str(&format!("<cycle {}>", ty));
            return false;
        }
        if depth >= MAX_DEPTH {
            self.out.push_str(&format!("<.. {}>", ty));
            return false;
        }
        self.visiting.push(identity);
        true
    }

    fn write_sequence(&mut self, sequence: &dyn Sequence, depth: usize) {
        if !self.enter(address(sequence), sequence.type_descriptor(), depth) {
            return;
        }

        let element_type = sequence.element_type();
        self.out.push('[');
        for (i, element) in sequence.elements().enumerate() {
            if i == MAX_ELEMENTS {
                self.out
                    .push_str(&format!(", .. ({} more)", sequence.len() - MAX_ELEMENTS));
                break;
            }
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_guarded(Some(element_type), |p| p.write(&*element, depth + 1));
        }
        self.out.push(']');

        self.visiting.pop();
    }

    fn write_composite(&mut self, composite: &dyn Composite, depth: usize) {
        let ty = composite.type_descriptor();
        if !self.enter(address(composite), ty, depth) {
            return;
        }

        self.out.push_str(&ty.short_name());
        let members = composite.members();
        let mut readable = members.iter().filter(|m| m.is_readable()).peekable();
        if readable.peek().is_none() {
            self.out.push_str(" {}");
        } else {
            self.out.push_str(" { ");
            for (i, member) in readable.enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.out.push_str(member.name());
                self.out.push_str(": ");
                self.write_guarded(Some(member.declared_type()), |p| {
                    match member.read(composite) {
                        Ok(value) => p.write(&*value, depth + 1),
                        Err(err) => p.out.push_str(&format!("<unreadable: {}>", err)),
                    }
                });
            }
            self.out.push_str(" }");
        }

        self.visiting.pop();
    }
}
