/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn any_contains_ci(fields: &[&str], needle: &str) -> bool {
    needle.is_empty() || fields.iter().any(|f| contains_ci(f, needle))
}

/// Exact-match filter where `All` lets everything through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl Filter<String> {
    /// Reads a select box value, where `"all"` (or nothing) means no filter.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "" | "all" => Filter::All,
            other => Filter::Only(other.to_string()),
        }
    }
}
