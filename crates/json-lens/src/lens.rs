//! Functional lenses.
//!
//! A [`Lens<A, B>`] focuses on a `B` inside an `A`: `get` reads it and `set`
//! returns a new `A` with the focus replaced. Lenses never mutate; they
//! compose with [`Lens::and_then`] to reach deeper.

use std::fmt;
use std::sync::Arc;

type Getter<A, B> = Arc<dyn Fn(&A) -> B + Send + Sync>;
type Setter<A, B> = Arc<dyn Fn(&A, B) -> A + Send + Sync>;

/// A getter/setter pair focusing on a `B` within an `A`.
///
/// # Example
///
/// ```
/// use json_lens::Lens;
///
/// let first: Lens<(i32, i32), i32> = Lens::new(|p: &(i32, i32)| p.0, |p: &(i32, i32), x| (x, p.1));
/// assert_eq!(first.get(&(1, 2)), 1);
/// assert_eq!(first.set(&(1, 2), 5), (5, 2));
/// assert_eq!(first.update(&(1, 2), |x| x * 10), (10, 2));
/// ```
pub struct Lens<A, B> {
    getter: Getter<A, B>,
    setter: Setter<A, B>,
}

/// A lens whose focus has the same type as the whole.
pub type MonoLens<A> = Lens<A, A>;

impl<A: 'static, B: 'static> Lens<A, B> {
    pub fn new<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn(&A) -> B + Send + Sync + 'static,
        S: Fn(&A, B) -> A + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    pub fn get(&self, whole: &A) -> B {
        (self.getter)(whole)
    }

    pub fn set(&self, whole: &A, focus: B) -> A {
        (self.setter)(whole, focus)
    }

    /// `set(whole, f(get(whole)))`
    pub fn update<F>(&self, whole: &A, f: F) -> A
    where
        F: FnOnce(B) -> B,
    {
        self.set(whole, f(self.get(whole)))
    }

    /// Compose: focus on `that`'s target inside this lens's target.
    ///
    /// Setting through the composite reads the intermediate value, sets the
    /// inner focus on it, then writes the result back through `self`.
    pub fn and_then<C: 'static>(&self, that: &Lens<B, C>) -> Lens<A, C> {
        let (outer, inner) = (self.clone(), that.clone());
        let (outer_set, inner_set) = (self.clone(), that.clone());
        Lens::new(
            move |whole: &A| inner.get(&outer.get(whole)),
            move |whole: &A, focus: C| outer_set.update(whole, |part| inner_set.set(&part, focus)),
        )
    }

    /// Turn a function on the focus into a function on the whole.
    pub fn lift<F>(&self, f: F) -> impl Fn(&A) -> A
    where
        F: Fn(B) -> B,
    {
        let lens = self.clone();
        move |whole: &A| lens.update(whole, &f)
    }
}

impl<A: Clone + 'static> Lens<A, A> {
    /// Focus on the whole value itself.
    pub fn identity() -> Self {
        Lens::new(|whole: &A| whole.clone(), |_: &A, focus: A| focus)
    }
}

impl<A, B> Clone for Lens<A, B> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<A, B> fmt::Debug for Lens<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}
