//! Class list composition.
//!
//! Builds a class string from tokens, optional tokens and conditional flags,
//! then resolves conflicts between utility classes with `tw_merge`, keeping
//! the later class of each conflicting pair. The button relies on that rule:
//! anything composed after the built-in tokens (caller classes in particular)
//! overrides them.
//!
//! ```
//! use buttonkit_core::classes;
//!
//! let read_only = true;
//! let list = classes!(("readOnly", read_only), "btn", "flex", None::<&str>, "hidden");
//! assert_eq!(list.merge().to_string(), "readOnly btn hidden");
//! ```

use std::collections::HashSet;
use std::fmt;

/// Ordered list of class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append anything that converts into class tokens.
    pub fn push(&mut self, item: impl IntoClass) -> &mut Self {
        item.push_into(self);
        self
    }

    /// Append whitespace-separated tokens, skipping empty ones.
    pub fn push_str(&mut self, raw: &str) {
        self.tokens.extend(raw.split_whitespace().map(str::to_owned));
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resolve conflicts, keeping the last occurrence.
    ///
    /// A repeated token keeps its last position. Utility classes that set the
    /// same property are resolved by `tw_merge`, so only the last of them
    /// survives. Tokens it does not recognise are never dropped.
    pub fn merge(&self) -> ClassList {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.tokens.len());
        let mut unique: Vec<&str> = self
            .tokens
            .iter()
            .rev()
            .map(String::as_str)
            .filter(|token| seen.insert(*token))
            .collect();
        unique.reverse();

        let merged = tw_merge::tw_merge!(unique.join(" "));
        let mut list = ClassList::new();
        list.push_str(&merged);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Values accepted by [`classes!`](crate::classes!).
///
/// Strings contribute their tokens, `None` contributes nothing, and a
/// `(token, flag)` pair contributes the token only when the flag is set.
pub trait IntoClass {
    fn push_into(self, list: &mut ClassList);
}

impl IntoClass for &str {
    fn push_into(self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl IntoClass for String {
    fn push_into(self, list: &mut ClassList) {
        list.push_str(&self);
    }
}

impl IntoClass for &String {
    fn push_into(self, list: &mut ClassList) {
        list.push_str(self);
    }
}

impl IntoClass for ClassList {
    fn push_into(self, list: &mut ClassList) {
        list.tokens.extend(self.tokens);
    }
}

impl<T: IntoClass> IntoClass for Option<T> {
    fn push_into(self, list: &mut ClassList) {
        if let Some(item) = self {
            item.push_into(list);
        }
    }
}

impl<T: IntoClass> IntoClass for (T, bool) {
    fn push_into(self, list: &mut ClassList) {
        if self.1 {
            self.0.push_into(list);
        }
    }
}

/// Build a [`ClassList`](crate::classes::ClassList) from a sequence of
/// [`IntoClass`](crate::classes::IntoClass) values.
#[macro_export]
macro_rules! classes {
    ($($item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut list = $crate::classes::ClassList::new();
        $( list.push($item); )*
        list
    }};
}
