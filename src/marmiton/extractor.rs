use crate::{
    marmiton::{Ingredients, RecipePage},
    ScrapeError,
};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref RECIPE_CARD_LINK: Selector = Selector::parse("a.recipe-card-link").expect(E);
    static ref H1: Selector = Selector::parse("h1").expect(E);
    static ref RATING: Selector = Selector::parse("span.recipe-header__rating-text").expect(E);
    static ref COMMENT_ICON: Selector =
        Selector::parse(r#"i[class="icon icon-icon_comment"]"#).expect(E);
    static ref REVIEWS_LINK: Selector = Selector::parse(r##"a[href="#topReviewsTitle"]"##).expect(E);
    static ref DIFFICULTY_ICON: Selector =
        Selector::parse(r#"i[class="icon icon-difficulty"]"#).expect(E);
    static ref TIMER_ICON: Selector = Selector::parse(r#"i[class="icon icon-timer1"]"#).expect(E);
    static ref SPAN: Selector = Selector::parse("span").expect(E);
    static ref INGREDIENT: Selector = Selector::parse("div.card-ingredient[data-name]").expect(E);
    static ref COUNT: Selector = Selector::parse("span.count").expect(E);
}

#[derive(Debug)]
pub struct MarmitonExtractor;

impl MarmitonExtractor {
    /// One entry per recipe card anchor, in document order. Anchors without
    /// an `href` are kept as `None`.
    pub fn extract_links(&self, doc: &Html) -> Vec<Option<String>> {
        doc.select(&RECIPE_CARD_LINK)
            .map(|a| a.value().attr("href").map(ToString::to_string))
            .collect()
    }

    /// Fails on the first marker that is missing from the page.
    pub fn extract_recipe(&self, doc: &Html) -> Result<RecipePage, ScrapeError> {
        let name = first(doc, &H1, "name")?;
        let rating = first(doc, &RATING, "rating")?;

        let comment_icon = find(doc, &COMMENT_ICON, "comments icon")?;
        let comments = find_next(doc, comment_icon, &REVIEWS_LINK)
            .map(text)
            .ok_or(ScrapeError::MissingElement { field: "comments" })?;

        let difficulty_icon = find(doc, &DIFFICULTY_ICON, "difficulty icon")?;
        let difficulty = find_next(doc, difficulty_icon, &SPAN)
            .map(text)
            .ok_or(ScrapeError::MissingElement {
                field: "difficulty",
            })?;

        let timer_icon = find(doc, &TIMER_ICON, "timer icon")?;
        let timer = find_next(doc, timer_icon, &SPAN)
            .map(text)
            .ok_or(ScrapeError::MissingElement { field: "timer" })?;

        let mut ingredients = Ingredients::new();
        let cards = doc
            .select(&INGREDIENT)
            .filter_map(|card| card.value().attr("data-name").map(|name| (card, name)));
        for (card, name) in cards {
            let quantity = find_next(doc, card, &COUNT).map(text).ok_or(
                ScrapeError::MissingElement {
                    field: "ingredient quantity",
                },
            )?;
            ingredients.insert(name.to_string(), quantity);
        }

        Ok(RecipePage {
            name,
            rating,
            comments,
            difficulty,
            timer,
            ingredients,
        })
    }
}

fn find<'a>(
    doc: &'a Html,
    selector: &Selector,
    field: &'static str,
) -> Result<ElementRef<'a>, ScrapeError> {
    doc.select(selector)
        .next()
        .ok_or(ScrapeError::MissingElement { field })
}

fn first(doc: &Html, selector: &Selector, field: &'static str) -> Result<String, ScrapeError> {
    find(doc, selector, field).map(text)
}

fn text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// First element matching `selector` after `from` in document order,
/// starting with the descendants of `from`.
fn find_next<'a>(doc: &'a Html, from: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .skip_while(|node| node.id() != from.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| selector.matches(el))
}
