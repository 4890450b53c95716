//! Shared component models.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared, mutable value read by components and written by callbacks.
///
/// Clones share the same value. Models live inside one page instance and
/// are never shared across requests.
pub struct Model<T> {
	inner: Rc<RefCell<T>>,
}

impl<T> Model<T> {
	pub fn of(value: T) -> Self {
		Self {
			inner: Rc::new(RefCell::new(value)),
		}
	}

	pub fn set(&self, value: T) {
		*self.inner.borrow_mut() = value;
	}

	/// Reads the value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&*self.inner.borrow())
	}

	/// Mutates the value in place.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut *self.inner.borrow_mut());
	}
}

impl<T: Clone> Model<T> {
	pub fn get(&self) -> T {
		self.inner.borrow().clone()
	}
}

impl<T: 'static> Model<T> {
	/// Derives a read-only getter from this model.
	///
	/// ## Example
	///
	/// ```ignore
	/// let name = Model::of("World".to_string());
	/// let greeting = name.map(|n| format!("Hello {n}!"));
	/// assert_eq!(greeting(), "Hello World!");
	/// ```
	pub fn map<U>(&self, f: impl Fn(&T) -> U + 'static) -> impl Fn() -> U + 'static {
		let model = self.clone();
		move || model.with(&f)
	}
}

impl<T> Clone for Model<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Model<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.inner.try_borrow() {
			Ok(value) => f.debug_tuple("Model").field(&*value).finish(),
			Err(_) => f.write_str("Model(<borrowed>)"),
		}
	}
}
