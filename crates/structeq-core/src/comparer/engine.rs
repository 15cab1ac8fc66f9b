//! The structural comparison engine.

use super::config::ComparisonConfig;
use super::pending::{Identity, PendingComparisonSet};
use crate::errors::{Result, StructEqError};
use crate::printer::stringify;
use crate::reflect::{
    address, runtime_type_name, value_kind, Composite, Handle, MemberDescriptor, MemberKind,
    Reflect, Reflected, Sequence, Simple, ValueKind,
};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeSet;
use std::time::Instant;
use structeq_core_types::schema::EVENT_MISMATCH;
use structeq_core_types::ComparisonId;

const OP_COMPARE: &str = "compare";

/// Decides whether two object graphs are equal under a [`ComparisonConfig`].
///
/// A comparer is cheap to build and holds per-call state (the pending pair
/// set and the recorded diagnostics), so it is used from one thread at a
/// time; concurrent comparisons use one comparer each.
///
/// ```
/// use structeq_core::{reflect_struct, StructuralComparer};
///
/// struct Tagged { name: String, tags: Vec<String> }
/// reflect_struct!(Tagged { properties { name: String, tags: Vec<String> } });
///
/// let a = Tagged { name: "a".into(), tags: vec!["x".into()] };
/// let b = Tagged { name: "b".into(), tags: vec!["x".into()] };
///
/// let mut comparer = StructuralComparer::full().recording_errors();
/// assert!(!comparer.compare(&a, &b).unwrap());
/// assert!(comparer.errors()[0].contains("name"));
/// ```
#[derive(Debug, Default)]
pub struct StructuralComparer {
    config: ComparisonConfig,
    ignored: BTreeSet<String>,
    pending: PendingComparisonSet,
    errors: Vec<String>,
    comparison_id: Option<ComparisonId>,
}

impl StructuralComparer {
    pub fn new(config: ComparisonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn full() -> Self {
        Self::new(ComparisonConfig::full())
    }

    pub fn sub() -> Self {
        Self::new(ComparisonConfig::sub())
    }

    pub fn intersection() -> Self {
        Self::new(ComparisonConfig::intersection())
    }

    pub fn shape() -> Self {
        Self::new(ComparisonConfig::shape())
    }

    pub fn sub_shape() -> Self {
        Self::new(ComparisonConfig::sub_shape())
    }

    /// Skip members with these names on both sides, at every depth
    pub fn ignoring<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Turn on diagnostics recording
    pub fn recording_errors(mut self) -> Self {
        self.config.record_errors = true;
        self
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.ignored.iter().map(String::as_str)
    }

    /// Diagnostics of the last comparison, in discovery order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }

    /// Correlation id of the last comparison, as found in its log events
    pub fn last_comparison_id(&self) -> Option<&ComparisonId> {
        self.comparison_id.as_ref()
    }

    /// Compare two values.
    ///
    /// Mismatches are reported as `Ok(false)`, with diagnostics in
    /// [`errors`](Self::errors) when recording is on.
    ///
    /// # Errors
    ///
    /// Member access failures from the compared types: a mutably borrowed
    /// `RefCell` (`BorrowConflict`), or a getter that reports
    /// `MemberNotFound`/`MemberNotReadable`.
    pub fn compare(&mut self, left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
        let id = ComparisonId::new();
        self.pending.clear();
        self.errors.clear();
        self.comparison_id = Some(id.clone());

        let start = Instant::now();
        log_op_start!(
            OP_COMPARE,
            comparison_id = %id,
            left_type = %runtime_type_name(left),
            right_type = %runtime_type_name(right),
        );

        let outcome = self
            .compare_values(left, right)
            .and_then(|equal| self.ensure_settled().map(|()| equal));
        self.pending.clear();

        let duration_ms = start.elapsed().as_millis() as u64;
        match outcome {
            Ok(equal) => {
                if !equal {
                    self.record_top_level(left, right);
                }
                log_op_end!(
                    OP_COMPARE,
                    duration_ms = duration_ms,
                    comparison_id = %id,
                    equal = equal,
                    error_count = self.errors.len() as u64,
                );
                Ok(equal)
            }
            Err(err) => {
                log_op_error!(OP_COMPARE, err.clone(), duration_ms = duration_ms, comparison_id = %id);
                Err(err)
            }
        }
    }

    /// Every pair marked in flight during a walk is unmarked by the end of it
    fn ensure_settled(&self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        Err(StructEqError::Internal {
            message: format!(
                "{} pending comparisons left after the walk",
                self.pending.len()
            ),
        })
    }

    fn record_top_level(&mut self, left: &dyn Reflect, right: &dyn Reflect) {
        if value_kind(left) == ValueKind::Simple && value_kind(right) == ValueKind::Simple {
            self.record(|| {
                format!(
                    "Primitive values differ: {} != {}",
                    stringify(left),
                    stringify(right)
                )
            });
        } else if self.errors.is_empty() {
            self.record(|| format!("Values differ: {} != {}", stringify(left), stringify(right)));
        }
    }

    /// Keep a diagnostic if recording; the message is only built when kept
    fn record(&mut self, diagnostic: impl FnOnce() -> String) {
        if !self.config.record_errors {
            return;
        }
        let diagnostic = diagnostic();
        tracing::debug!(
            component = module_path!(),
            op = OP_COMPARE,
            event = EVENT_MISMATCH,
            comparison_id = self.comparison_id.as_ref().map(ComparisonId::as_str).unwrap_or_default(),
            diagnostic = %diagnostic,
        );
        self.errors.push(diagnostic);
    }

    /// Short-circuit unless recording, in which case the walk goes on to collect more diagnostics
    fn keep_going(&self) -> bool {
        self.config.record_errors
    }

    fn compare_values(&mut self, left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
        let left_view = match left.reflect() {
            Reflected::Indirect(handle) => return self.compare_values(&*handle, right),
            Reflected::Inaccessible(err) => return Err(err),
            view => view,
        };
        let right_view = match right.reflect() {
            Reflected::Indirect(handle) => return self.compare_values(left, &*handle),
            Reflected::Inaccessible(err) => return Err(err),
            view => view,
        };

        match (left_view, right_view) {
            (Reflected::Null, Reflected::Null) => Ok(true),
            (Reflected::Null, _) | (_, Reflected::Null) => Ok(false),
            (Reflected::Simple(l), Reflected::Simple(r)) => Ok(self.compare_simple(&l, &r)),
            (Reflected::Sequence(l), Reflected::Sequence(r)) => self.compare_ordered(l, r),
            (Reflected::Composite(l), Reflected::Composite(r)) => self.compare_composites(l, r),
            (l, r) => {
                let (l, r) = (l.label(), r.label());
                self.record(|| format!("Cannot compare a {} value with a {} value", l, r));
                Ok(false)
            }
        }
    }

    fn compare_simple(&self, left: &Simple<'_>, right: &Simple<'_>) -> bool {
        if left.type_descriptor() == right.type_descriptor() {
            return self.config.only_compare_shape || left.scalar().same_value(right.scalar());
        }

        match (left.to_numeric(), right.to_numeric()) {
            (Some(l), Some(r)) => self.config.only_compare_shape || l == r,
            _ => false,
        }
    }

    /// Run `compare` with `(left, right)` marked in flight; a pair already in flight is equal
    fn guarded(
        &mut self,
        left: Identity,
        right: Identity,
        compare: impl FnOnce(&mut Self) -> Result<bool>,
    ) -> Result<bool> {
        if self.pending.contains(left, right) {
            return Ok(true);
        }

        self.pending.insert(left, right);
        let outcome = compare(self);
        self.pending.remove(left, right);
        outcome
    }

    fn compare_ordered(&mut self, left: &dyn Sequence, right: &dyn Sequence) -> Result<bool> {
        self.guarded(sequence_identity(left), sequence_identity(right), |this| {
            this.compare_elements(left, right)
        })
    }

    fn compare_elements(&mut self, left: &dyn Sequence, right: &dyn Sequence) -> Result<bool> {
        if left.len() != right.len() {
            self.record(|| {
                format!(
                    "Collection lengths differ: {} has {} elements, {} has {}",
                    left.type_descriptor(),
                    left.len(),
                    right.type_descriptor(),
                    right.len()
                )
            });
            return Ok(false);
        }

        for (index, (l, r)) in left.elements().zip(right.elements()).enumerate() {
            if !self.compare_values(&*l, &*r)? {
                self.record(|| {
                    format!(
                        "Collection elements at index {} differ: {} != {}",
                        index,
                        stringify(&*l),
                        stringify(&*r)
                    )
                });
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn compare_composites(&mut self, left: &dyn Composite, right: &dyn Composite) -> Result<bool> {
        let l = Identity::new(address(left), left.type_descriptor().id());
        let r = Identity::new(address(right), right.type_descriptor().id());
        self.guarded(l, r, |this| this.compare_members(left, right))
    }

    fn comparable_members(&self, host: &dyn Composite) -> Vec<MemberDescriptor> {
        host.members()
            .iter()
            .filter(|m| m.is_readable())
            .filter(|m| m.kind() == MemberKind::Property || self.config.include_fields)
            .filter(|m| !self.ignored.contains(m.name()))
            .cloned()
            .collect()
    }

    fn compare_members(&mut self, left: &dyn Composite, right: &dyn Composite) -> Result<bool> {
        let mut left_members = self.comparable_members(left);
        let right_members = self.comparable_members(right);

        if self.config.only_intersecting_members {
            left_members.retain(|m| {
                right_members
                    .iter()
                    .any(|r| r.name() == m.name() && r.declared_type() == m.declared_type())
            });
            if left_members.is_empty() {
                self.record(|| {
                    format!(
                        "{} and {} have no members in common",
                        left.type_descriptor(),
                        right.type_descriptor()
                    )
                });
                return Ok(false);
            }
        } else if self.config.fail_on_missing_members && left_members.len() != right_members.len()
        {
            self.record(|| {
                format!(
                    "Member counts differ: {} has [{}], {} has [{}]",
                    left.type_descriptor(),
                    describe(&left_members),
                    right.type_descriptor(),
                    describe(&right_members)
                )
            });
            return Ok(false);
        }

        let mut equal = true;
        for member in &left_members {
            let Some(counterpart) = right_members.iter().find(|r| r.name() == member.name()) else {
                if self.config.fail_on_missing_members {
                    self.record(|| {
                        format!(
                            "No matching property {} on {}",
                            member.name(),
                            right.type_descriptor()
                        )
                    });
                    equal = false;
                    if !self.keep_going() {
                        return Ok(false);
                    }
                }
                continue;
            };

            if !self.compare_member(left, right, member, counterpart)? {
                equal = false;
                if !self.keep_going() {
                    return Ok(false);
                }
            }
        }
        Ok(equal)
    }

    fn compare_member(
        &mut self,
        left: &dyn Composite,
        right: &dyn Composite,
        left_member: &MemberDescriptor,
        right_member: &MemberDescriptor,
    ) -> Result<bool> {
        let declared = left_member.declared_type();
        let other = right_member.declared_type();
        if declared != other && !(declared.is_sequence() && other.is_sequence()) {
            self.record(|| {
                format!(
                    "Member {} has type {} on {} but {} on {}",
                    left_member.name(),
                    declared,
                    left.type_descriptor(),
                    other,
                    right.type_descriptor()
                )
            });
            return Ok(false);
        }

        let left_value = left_member.read(left)?;
        let right_value = right_member.read(right)?;

        let equal = if declared.is_simple() {
            self.compare_values(&*left_value, &*right_value)?
        } else {
            match (value_kind(&*left_value), value_kind(&*right_value)) {
                (ValueKind::Sequence, ValueKind::Sequence) => {
                    self.config.only_compare_shape
                        || self.compare_unordered(&*left_value, &*right_value)?
                }
                (ValueKind::Inaccessible, _) | (_, ValueKind::Inaccessible) => {
                    self.compare_values(&*left_value, &*right_value)?
                }
                (ValueKind::Sequence, _) | (_, ValueKind::Sequence) => false,
                _ => self.compare_values(&*left_value, &*right_value)?,
            }
        };

        if !equal {
            self.record(|| {
                format!(
                    "Member {} differs: {} != {}",
                    left_member.name(),
                    stringify(&*left_value),
                    stringify(&*right_value)
                )
            });
        }
        Ok(equal)
    }

    /// Look through indirections down to the two collections, then match them as multisets
    fn compare_unordered(&mut self, left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
        let left_view = match left.reflect() {
            Reflected::Indirect(handle) => return self.compare_unordered(&*handle, right),
            view => view,
        };
        let right_view = match right.reflect() {
            Reflected::Indirect(handle) => return self.compare_unordered(left, &*handle),
            view => view,
        };

        match (left_view, right_view) {
            (Reflected::Sequence(l), Reflected::Sequence(r)) => self.compare_multiset(l, r),
            _ => self.compare_values(left, right),
        }
    }

    /// Every element on each side has a deeply equal counterpart on the other
    fn compare_multiset(&mut self, left: &dyn Sequence, right: &dyn Sequence) -> Result<bool> {
        self.guarded(sequence_identity(left), sequence_identity(right), |this| {
            this.match_elements(left, right)
        })
    }

    fn match_elements(&mut self, left: &dyn Sequence, right: &dyn Sequence) -> Result<bool> {
        if left.len() != right.len() {
            self.record(|| {
                format!(
                    "Collection lengths differ: {} != {}",
                    left.len(),
                    right.len()
                )
            });
            return Ok(false);
        }

        let left_items: Vec<Handle<'_>> = left.elements().collect();
        let right_items: Vec<Handle<'_>> = right.elements().collect();

        for l in &left_items {
            if !self.any_equal(&**l, &right_items, false)? {
                self.record(|| format!("No match for {} in right collection", stringify(&**l)));
                return Ok(false);
            }
        }
        for r in &right_items {
            if !self.any_equal(&**r, &left_items, true)? {
                self.record(|| format!("No match for {} in left collection", stringify(&**r)));
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether `item` equals some candidate; `item` stays on its own side of the comparison
    fn any_equal(
        &mut self,
        item: &dyn Reflect,
        candidates: &[Handle<'_>],
        item_is_right: bool,
    ) -> Result<bool> {
        for candidate in candidates {
            let equal = if item_is_right {
                self.detached_equal(&**candidate, item)?
            } else {
                self.detached_equal(item, &**candidate)?
            };
            if equal {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// A nested comparison that records nothing but shares the pending set
    fn detached_equal(&mut self, left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
        let record_errors = std::mem::replace(&mut self.config.record_errors, false);
        let outcome = self.compare_values(left, right);
        self.config.record_errors = record_errors;
        outcome
    }
}

fn sequence_identity(sequence: &dyn Sequence) -> Identity {
    Identity::new(address(sequence), sequence.type_descriptor().id())
}

fn describe(members: &[MemberDescriptor]) -> String {
    members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
