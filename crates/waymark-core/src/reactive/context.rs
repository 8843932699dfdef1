//! Context - thread-scoped provider/consumer values
//!
//! A [`Context<T>`] is a key. [`provide_context`] pushes a value for that key and
//! returns a [`ContextGuard`]; while the guard lives, [`get_context`] returns the
//! innermost provided value. Dropping the guard removes exactly the value it
//! pushed, so scopes may end in any order.
//!
//! ```
//! use waymark_core::reactive::{Context, get_context, provide_context};
//!
//! let theme: Context<String> = Context::new();
//! assert_eq!(get_context(&theme), None);
//!
//! {
//!     let _outer = provide_context(&theme, "light".to_string());
//!     {
//!         let _inner = provide_context(&theme, "dark".to_string());
//!         assert_eq!(get_context(&theme).as_deref(), Some("dark"));
//!     }
//!     assert_eq!(get_context(&theme).as_deref(), Some("light"));
//! }
//! assert_eq!(get_context(&theme), None);
//! ```

use core::any::Any;
use core::cell::RefCell;
use core::marker::PhantomData;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::runtime::NodeId;

type ProvidedValue = (NodeId, Rc<dyn Any>);

thread_local! {
	static CONTEXT_VALUES: RefCell<BTreeMap<NodeId, Vec<ProvidedValue>>> = const { RefCell::new(BTreeMap::new()) };
}

/// Key identifying one context.
pub struct Context<T> {
	id: NodeId,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Context<T> {
	/// Creates a new, distinct context key.
	pub fn new() -> Self {
		Self {
			id: NodeId::new(),
			_marker: PhantomData,
		}
	}

	/// Returns the key's id.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T> Default for Context<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for Context<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Context<T> {}

impl<T> core::fmt::Debug for Context<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Context").field("id", &self.id).finish()
	}
}

/// Keeps a provided value visible; removes it when dropped.
#[must_use = "the provided value is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ContextGuard {
	context: NodeId,
	entry: NodeId,
}

impl Drop for ContextGuard {
	fn drop(&mut self) {
		let _ = CONTEXT_VALUES.try_with(|values| {
			let mut values = values.borrow_mut();
			if let Some(stack) = values.get_mut(&self.context) {
				stack.retain(|(entry, _)| *entry != self.entry);
				if stack.is_empty() {
					values.remove(&self.context);
				}
			}
		});
	}
}

/// Provides `value` for `ctx` until the returned guard is dropped.
pub fn provide_context<T: 'static>(ctx: &Context<T>, value: T) -> ContextGuard {
	let entry = NodeId::new();
	CONTEXT_VALUES.with(|values| {
		values
			.borrow_mut()
			.entry(ctx.id)
			.or_default()
			.push((entry, Rc::new(value)));
	});
	ContextGuard {
		context: ctx.id,
		entry,
	}
}

/// Returns the innermost value provided for `ctx`, if any.
pub fn get_context<T: Clone + 'static>(ctx: &Context<T>) -> Option<T> {
	CONTEXT_VALUES.with(|values| {
		values
			.borrow()
			.get(&ctx.id)
			.and_then(|stack| stack.last())
			.and_then(|(_, value)| value.downcast_ref::<T>())
			.cloned()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_provider_returns_none() {
		let ctx: Context<i32> = Context::new();
		assert_eq!(get_context(&ctx), None);
	}

	#[rstest]
	fn test_contexts_are_independent() {
		let a: Context<i32> = Context::new();
		let b: Context<i32> = Context::new();

		let _guard = provide_context(&a, 1);
		assert_eq!(get_context(&a), Some(1));
		assert_eq!(get_context(&b), None);
	}

	#[rstest]
	fn test_out_of_order_drop() {
		let ctx: Context<&'static str> = Context::new();

		let outer = provide_context(&ctx, "outer");
		let inner = provide_context(&ctx, "inner");

		drop(outer);
		assert_eq!(get_context(&ctx), Some("inner"));

		drop(inner);
		assert_eq!(get_context(&ctx), None);
	}
}
