//! Composable request modifiers.
//!
//! A [`Modifier`] transforms a [`Request`] and returns it. A [`Decorator`]
//! wraps an inner modifier into a new one that runs the decorator's own stage
//! first and then hands the request to the inner modifier.
//!
//! # Composition Order
//!
//! Folding decorators over the [`Identity`] modifier reverses their order:
//! folding `[d1, d2, d3]` with [`compose`] produces a modifier that runs `d3`,
//! then `d2`, then `d1`, then the identity. The identity is always innermost.
//!
//! ```rust
//! use foreman_api::clients::{compose, Decorator, HttpMethod, Modifier, Request, Target};
//!
//! let modifier = compose([
//!     Decorator::new("first", |mut req: Request| { req.target.path.push_str("/1"); req }),
//!     Decorator::new("second", |mut req: Request| { req.target.path.push_str("/2"); req }),
//! ]);
//!
//! let request = modifier.modify(Request::new(HttpMethod::Get, Target::default()));
//! assert_eq!(request.target.path, "/2/1");
//! ```
//!
//! Modifiers are total: they never fail and never return an error.

use std::fmt;
use std::sync::Arc;

use crate::clients::http_request::Request;

/// A transformation applied to an outbound request.
///
/// Implemented for [`Identity`], for composed decorator chains, and for any
/// `Fn(Request) -> Request` closure that is `Send + Sync`.
pub trait Modifier: Send + Sync {
    /// Transforms `request` and returns the request to continue with.
    fn modify(&self, request: Request) -> Request;
}

impl<F> Modifier for F
where
    F: Fn(Request) -> Request + Send + Sync,
{
    fn modify(&self, request: Request) -> Request {
        self(request)
    }
}

/// A boxed, type-erased modifier.
pub type BoxModifier = Box<dyn Modifier>;

/// The modifier that returns its input unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Modifier for Identity {
    fn modify(&self, request: Request) -> Request {
        request
    }
}

type Stage = Arc<dyn Fn(Request) -> Request + Send + Sync>;

/// Wraps a modifier to produce a new modifier with one extra stage.
///
/// Decorators are cheap to clone; clones share the same stage function.
#[derive(Clone)]
pub struct Decorator {
    name: &'static str,
    stage: Stage,
}

impl Decorator {
    /// Creates a decorator from a named stage function.
    pub fn new<F>(name: &'static str, stage: F) -> Self
    where
        F: Fn(Request) -> Request + Send + Sync + 'static,
    {
        Self {
            name,
            stage: Arc::new(stage),
        }
    }

    /// Returns the stage name, used in logs and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a modifier that applies this stage, then delegates to `inner`.
    #[must_use]
    pub fn decorate(&self, inner: BoxModifier) -> BoxModifier {
        Box::new(Decorated {
            stage: Arc::clone(&self.stage),
            inner,
        })
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Decorator").field(&self.name).finish()
    }
}

struct Decorated {
    stage: Stage,
    inner: BoxModifier,
}

impl Modifier for Decorated {
    fn modify(&self, request: Request) -> Request {
        let request = (self.stage)(request);
        self.inner.modify(request)
    }
}

/// Folds `decorators` over [`Identity`] in iteration order.
///
/// The resulting modifier applies the decorators in reverse iteration order.
pub fn compose<I>(decorators: I) -> BoxModifier
where
    I: IntoIterator<Item = Decorator>,
{
    let identity: BoxModifier = Box::new(Identity);
    decorators
        .into_iter()
        .fold(identity, |inner, decorator| decorator.decorate(inner))
}
