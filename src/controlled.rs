//! Controlled/uncontrolled value reconciliation.
//!
//! A picker's visible value is either owned by the caller (controlled) or by
//! the widget itself (uncontrolled). The policy is carried by an explicit
//! authority flag rather than by the presence of a parameter: while the
//! caller holds authority its value wins every read, but committed
//! selections keep updating an internal shadow copy, so withdrawing caller
//! authority falls back to the most recent selection instead of resetting.

/// Who currently owns the visible value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// An externally supplied value is authoritative.
    Caller,
    /// The widget's own state is authoritative.
    Widget,
}

/// A reconciled value: the caller's copy, the widget's shadow copy, and the
/// flag saying which one reads resolve to.
#[derive(Debug, Clone)]
pub struct Controlled<T> {
    authority: Authority,
    external: T,
    shadow: T,
}

impl<T: Clone + Default> Controlled<T> {
    /// Start uncontrolled with an empty value.
    pub fn new() -> Self {
        Controlled {
            authority: Authority::Widget,
            external: T::default(),
            shadow: T::default(),
        }
    }

    /// Start uncontrolled with a widget-owned initial value.
    pub fn seeded(value: T) -> Self {
        Controlled {
            authority: Authority::Widget,
            external: T::default(),
            shadow: value,
        }
    }

    /// Start controlled by `value`. The shadow mirrors it immediately.
    pub fn controlled(value: T) -> Self {
        Controlled {
            authority: Authority::Caller,
            external: value.clone(),
            shadow: value,
        }
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    /// The visible value under the current authority.
    pub fn get(&self) -> &T {
        match self.authority {
            Authority::Caller => &self.external,
            Authority::Widget => &self.shadow,
        }
    }

    /// Supply a caller-owned value (an explicitly empty value counts: the
    /// caller keeps authority). The shadow mirrors every supplied value so a
    /// later withdrawal is seamless. Rapid updates are last-write-wins.
    pub fn set_external(&mut self, value: T) {
        self.authority = Authority::Caller;
        self.external = value.clone();
        self.shadow = value;
    }

    /// The caller stops supplying a value: reads fall back to the shadow.
    pub fn withdraw(&mut self) {
        self.authority = Authority::Widget;
    }

    /// Record a committed selection in the shadow. Only visible while the
    /// widget holds authority.
    pub fn commit(&mut self, value: T) {
        self.shadow = value;
    }
}

impl<T: Clone + Default> Default for Controlled<T> {
    fn default() -> Self {
        Controlled::new()
    }
}
