pub mod category;
pub mod product;
pub mod user;

pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput, ProductQuery};
pub use user::User;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derives a URL slug from a display name: lowercase, with every run of
/// non-alphanumeric characters collapsed into a single hyphen. Used for both
/// category and product slugs, which are the public lookup keys.
pub fn slugify(name: &str) -> String {
    NON_ALNUM
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
