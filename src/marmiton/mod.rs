mod extractor;

pub use extractor::MarmitonExtractor;

use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;

pub const ENTREE_URL: &str = "https://www.marmiton.org/recettes/top-internautes-entree.aspx";
pub const PLAT_URL: &str = "https://www.marmiton.org/recettes/top-internautes-plat-principal.aspx";
pub const DESSERT_URL: &str = "https://www.marmiton.org/recettes/top-internautes-dessert.aspx";

/// Listing pages in the order their batches appear in the dataset.
pub const LISTING_URLS: [&str; 3] = [ENTREE_URL, PLAT_URL, DESSERT_URL];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Entree,
    Plat,
    Dessert,
}

impl Category {
    /// Closed mapping over the three top-rated listing pages.
    pub fn from_listing_url(url: &str) -> Option<Self> {
        match url {
            ENTREE_URL => Some(Category::Entree),
            PLAT_URL => Some(Category::Plat),
            DESSERT_URL => Some(Category::Dessert),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Entree => "entree",
            Category::Plat => "plat",
            Category::Dessert => "dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ingredient name to quantity, kept in page order.
///
/// Inserting a name that is already present overwrites its quantity but
/// keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingredients(Vec<(String, String)>);

impl Ingredients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, quantity: String) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, q)) => *q = quantity,
            None => self.0.push((name, quantity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, q)| q.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, q)| (n.as_str(), q.as_str()))
    }
}

impl Serialize for Ingredients {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, quantity) in &self.0 {
            map.serialize_entry(name, quantity)?;
        }
        map.end()
    }
}

/// Fields read from a single recipe page, before category tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePage {
    pub name: String,
    pub rating: String,
    /// Full phrase as shown on the page, e.g. "42 avis".
    pub comments: String,
    pub difficulty: String,
    pub timer: String,
    pub ingredients: Ingredients,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub category: Category,
    pub name: String,
    pub rating: String,
    pub comments: String,
    pub difficulty: String,
    pub timer: String,
    pub ingredients: Ingredients,
    pub url: String,
}

impl RecipeRecord {
    /// Tags a scraped page with its category and source url. Only the first
    /// word of the comments phrase is kept.
    pub fn from_page(category: Category, url: String, page: RecipePage) -> Option<Self> {
        let comments = page.comments.split_whitespace().next()?.to_string();
        Some(RecipeRecord {
            category,
            name: page.name,
            rating: page.rating,
            comments,
            difficulty: page.difficulty,
            timer: page.timer,
            ingredients: page.ingredients,
            url,
        })
    }
}

impl fmt::Display for RecipeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe Type     : {}", self.category)?;
        writeln!(f, "Recipe Name     : {}", self.name)?;
        writeln!(f, "Rating          : {}", self.rating)?;
        writeln!(f, "Comments        : {}", self.comments)?;
        writeln!(f, "Difficulty      : {}", self.difficulty)?;
        writeln!(f, "Timer           : {}", self.timer)?;
        writeln!(f, "Ingredients     : ")?;
        for (name, quantity) in self.ingredients.iter() {
            writeln!(f, "> {} ({})", name, quantity)?;
        }
        writeln!(f, "URL             : {}", self.url)?;

        Ok(())
    }
}
