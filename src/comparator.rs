use std::cmp::Ordering;

/// Implementations must describe a total order: antisymmetric, transitive
/// and consistent across calls for the same pair. A tree built on anything
/// else loses both its ordering and its balance guarantees; this is not
/// detected at runtime.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Adapts a comparison returning a negative, zero or positive number,
/// e.g. `by_sign(|a: &i32, b: &i32| a - b)`. An unordered result (NaN)
/// counts as equal.
pub fn by_sign<T: ?Sized, N, F>(f: F) -> impl Fn(&T, &T) -> Ordering
where
    N: PartialOrd + Default,
    F: Fn(&T, &T) -> N,
{
    move |a, b| {
        f(a, b)
            .partial_cmp(&N::default())
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_uses_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert_eq!(Natural.compare(&7, &7), Ordering::Equal);
    }

    #[test]
    fn closure_is_comparator() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn sign_adapter() {
        let cmp = by_sign(|a: &i64, b: &i64| a - b);
        assert_eq!(cmp.compare(&-5, &3), Ordering::Less);
        assert_eq!(cmp.compare(&3, &3), Ordering::Equal);
        assert_eq!(cmp.compare(&40, &3), Ordering::Greater);
    }

    #[test]
    fn sign_adapter_other_numbers() {
        let ints = by_sign(|a: &i32, b: &i32| a - b);
        assert_eq!(ints.compare(&1, &2), Ordering::Less);
        assert_eq!(ints.compare(&2, &2), Ordering::Equal);

        let floats = by_sign(|a: &f64, b: &f64| a - b);
        assert_eq!(floats.compare(&2.5, &0.5), Ordering::Greater);
        assert_eq!(floats.compare(&-0.5, &0.5), Ordering::Less);
        assert_eq!(floats.compare(&f64::NAN, &1.0), Ordering::Equal);
    }
}
