//! Comma-separated rendering shared by the containers' `Display` impls.

use std::fmt::{self, Display, Formatter};

/// Writes `items` separated by `", "`. Nothing is written for no items.
pub(crate) fn write_joined<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        Display::fmt(first, f)?;
        for item in items {
            f.write_str(", ")?;
            Display::fmt(item, f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Joined<'a>(&'a [i32]);

    impl Display for Joined<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write_joined(f, self.0)
        }
    }

    #[test]
    fn joins_with_comma_space() {
        assert_eq!(Joined(&[1, 2, 3]).to_string(), "1, 2, 3");
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(Joined(&[4]).to_string(), "4");
        assert_eq!(Joined(&[]).to_string(), "");
    }
}
