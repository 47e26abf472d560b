/// Combinators on [`Option`] that filter, supply fallbacks, and run side effects without unwrapping.
///
/// Every method takes the option by value and hands it back (or a value derived from it), so calls chain the
/// same way the inherent [`Option`] methods do. Closures are invoked at most once, and only on the variant their
/// method documents.
///
/// Names differ from the inherent methods where they would collide: an inherent `Option::filter` or
/// `Option::is_some` always wins method resolution over a trait method of the same name.
pub trait OptionExt<T>: Sized {
  /// Returns `self` when it is present and `predicate` holds for its value, `None` otherwise. `predicate` is only
  /// called when a value is present.
  fn keep_if(self, predicate: impl FnOnce(&T) -> bool) -> Option<T>;

  /// Returns `self` when present, otherwise the value created by `producer`. `producer` is only called when
  /// `self` is absent.
  fn map_nil(self, producer: impl FnOnce() -> T) -> Option<T>;

  /// Returns `self` when present, otherwise `replacement`.
  ///
  /// Unlike [`map_nil`](Self::map_nil), `replacement` is evaluated by the caller whether or not it is used.
  fn replace_nil(self, replacement: T) -> Option<T>;

  /// Returns `self` when present, otherwise the option returned by `producer`, which may itself be `None`.
  /// `producer` is only called when `self` is absent.
  fn flat_map_nil(self, producer: impl FnOnce() -> Option<T>) -> Option<T>;

  /// Calls `f` with the value when present, does nothing otherwise.
  fn apply(self, f: impl FnOnce(T));

  /// Returns `transform` applied to the value when present, otherwise `default`.
  ///
  /// `default` is a plain value and is therefore always evaluated by the caller; use
  /// [`Option::map_or_else`] for a lazily computed default.
  fn maybe<U>(self, default: U, transform: impl FnOnce(T) -> U) -> U;

  /// Calls `f` with a reference to the value when present, then returns `self` unchanged.
  fn on_some(self, f: impl FnOnce(&T)) -> Option<T>;

  /// Calls `f` when absent, then returns `self` unchanged.
  fn on_none(self, f: impl FnOnce()) -> Option<T>;

  fn is_present(&self) -> bool;

  fn is_absent(&self) -> bool;
}

impl<T> OptionExt<T> for Option<T> {
  #[inline]
  fn keep_if(self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
    match self {
      Some(value) if predicate(&value) => Some(value),
      _ => None,
    }
  }

  #[inline]
  fn map_nil(self, producer: impl FnOnce() -> T) -> Option<T> {
    match self {
      Some(value) => Some(value),
      None => Some(producer()),
    }
  }

  #[inline]
  fn replace_nil(self, replacement: T) -> Option<T> {
    self.map_nil(move || replacement)
  }

  #[inline]
  fn flat_map_nil(self, producer: impl FnOnce() -> Option<T>) -> Option<T> {
    match self {
      Some(value) => Some(value),
      None => producer(),
    }
  }

  #[inline]
  fn apply(self, f: impl FnOnce(T)) {
    if let Some(value) = self {
      f(value);
    }
  }

  #[inline]
  fn maybe<U>(self, default: U, transform: impl FnOnce(T) -> U) -> U {
    match self {
      Some(value) => transform(value),
      None => default,
    }
  }

  #[inline]
  fn on_some(self, f: impl FnOnce(&T)) -> Option<T> {
    if let Some(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  fn on_none(self, f: impl FnOnce()) -> Option<T> {
    if self.is_none() {
      f();
    }
    self
  }

  #[inline]
  fn is_present(&self) -> bool { self.is_some() }

  #[inline]
  fn is_absent(&self) -> bool { !self.is_present() }
}


#[cfg(test)]
mod test {
  use std::cell::Cell;

  use super::OptionExt;

  #[test]
  fn keep_if_keeps_value_matching_predicate() {
    assert_eq!(Some(3).keep_if(|x| *x > 2), Some(3));
    assert_eq!(Some(3).keep_if(|x| *x > 3), None);
  }

  #[test]
  fn keep_if_skips_predicate_when_absent() {
    let calls = Cell::new(0);
    let result = None::<i32>.keep_if(|_| {
      calls.set(calls.get() + 1);
      true
    });
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn keep_if_moves_value_through() {
    let name = String::from("crate");
    let ptr = name.as_ptr();
    let kept = Some(name).keep_if(|n| !n.is_empty()).unwrap();
    assert_eq!(kept.as_ptr(), ptr);
  }

  #[test]
  fn map_nil_produces_fallback_only_when_absent() {
    let calls = Cell::new(0);
    let producer = || {
      calls.set(calls.get() + 1);
      2
    };
    assert_eq!(Some(3).map_nil(producer), Some(3));
    assert_eq!(calls.get(), 0);
    assert_eq!(None.map_nil(producer), Some(2));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn replace_nil_uses_replacement_only_when_absent() {
    assert_eq!(Some(3).replace_nil(2), Some(3));
    assert_eq!(None.replace_nil(2), Some(2));
  }

  #[test]
  fn flat_map_nil_returns_producer_result_verbatim() {
    let calls = Cell::new(0);
    assert_eq!(Some(3).flat_map_nil(|| {
      calls.set(calls.get() + 1);
      Some(4)
    }), Some(3));
    assert_eq!(calls.get(), 0);
    assert_eq!(None::<i32>.flat_map_nil(|| None), None);
    assert_eq!(None.flat_map_nil(|| Some(4)), Some(4));
  }

  #[test]
  fn apply_runs_once_with_value() {
    let mut seen = Vec::new();
    Some(7).apply(|v| seen.push(v));
    None.apply(|v| seen.push(v));
    assert_eq!(seen, vec![7]);
  }

  #[test]
  fn maybe_transforms_or_returns_default() {
    assert_eq!(Some(3).maybe(100, |x| x + 1), 4);

    let calls = Cell::new(0);
    let result = None::<i32>.maybe(100, |x| {
      calls.set(calls.get() + 1);
      x + 1
    });
    assert_eq!(result, 100);
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn maybe_can_change_type() {
    assert_eq!(Some("abc").maybe(0, str::len), 3);
    assert_eq!(None::<&str>.maybe(0, str::len), 0);
  }

  #[test]
  fn on_some_observes_without_changing() {
    let mut seen = None;
    assert_eq!(Some(5).on_some(|v| seen = Some(*v)), Some(5));
    assert_eq!(seen, Some(5));

    let calls = Cell::new(0);
    assert_eq!(None::<i32>.on_some(|_| calls.set(calls.get() + 1)), None);
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn on_none_observes_without_changing() {
    let calls = Cell::new(0);
    assert_eq!(None::<i32>.on_none(|| calls.set(calls.get() + 1)), None);
    assert_eq!(calls.get(), 1);
    assert_eq!(Some(5).on_none(|| calls.set(calls.get() + 1)), Some(5));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn side_effects_chain() {
    let log = std::cell::RefCell::new(Vec::new());
    let result = Some(1)
      .on_some(|v| log.borrow_mut().push(format!("some {v}")))
      .keep_if(|v| *v > 1)
      .on_none(|| log.borrow_mut().push("none".to_string()))
      .map_nil(|| 10);
    assert_eq!(result, Some(10));
    assert_eq!(*log.borrow(), vec!["some 1".to_string(), "none".to_string()]);
  }

  #[test]
  fn presence_queries() {
    assert!(Some(()).is_present());
    assert!(!Some(()).is_absent());
    assert!(None::<()>.is_absent());
    assert!(!None::<()>.is_present());
  }

  #[test]
  fn nested_options_are_plain_values() {
    let inner_absent: Option<Option<i32>> = Some(None);
    assert!(inner_absent.is_present());
    assert_eq!(inner_absent.keep_if(|inner| inner.is_absent()), Some(None));
    assert_eq!(None::<Option<i32>>.map_nil(|| Some(1)), Some(Some(1)));
    assert_eq!(Some(None::<i32>).map_nil(|| Some(1)), Some(None));
  }
}
