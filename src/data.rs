use crate::{marmiton::RecipeRecord, ScrapeError};
use itertools::Itertools;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

pub const DEFAULT_OUTPUT: &str = "DataFrame Marmiton.csv";

/// Leading empty column holds the row index.
pub const HEADER: [&str; 9] = [
    "",
    "Recipe Type",
    "Recipe Name",
    "Rating",
    "Comments",
    "Difficulty",
    "Timer",
    "Ingredients",
    "URL",
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<RecipeRecord>,
}

impl Dataset {
    pub fn from_batches<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<RecipeRecord>>,
    {
        Dataset {
            records: batches.into_iter().flatten().collect(),
        }
    }

    pub fn records(&self) -> &[RecipeRecord] {
        self.records.as_slice()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn write_csv<W: Write>(&self, mut w: W) -> Result<(), ScrapeError> {
        write_row(&mut w, HEADER)?;
        for (index, record) in self.records.iter().enumerate() {
            let ingredients = serde_json::to_string(&record.ingredients)?;
            write_row(
                &mut w,
                [
                    index.to_string().as_str(),
                    record.category.label(),
                    record.name.as_str(),
                    record.rating.as_str(),
                    record.comments.as_str(),
                    record.difficulty.as_str(),
                    record.timer.as_str(),
                    ingredients.as_str(),
                    record.url.as_str(),
                ],
            )?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScrapeError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        fs::write(path, buf)?;
        Ok(())
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn escape(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<'a, W, I>(mut w: W, row: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    writeln!(w, "{}", row.into_iter().map(escape).join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marmiton::{Category, Ingredients};
    use pretty_assertions::assert_eq;

    fn record(category: Category, name: &str) -> RecipeRecord {
        let mut ingredients = Ingredients::new();
        ingredients.insert("farine".to_string(), "200".to_string());
        ingredients.insert("oeuf".to_string(), "2".to_string());
        RecipeRecord {
            category,
            name: name.to_string(),
            rating: "4.5/5".to_string(),
            comments: "12".to_string(),
            difficulty: "facile".to_string(),
            timer: "30 min".to_string(),
            ingredients,
            url: format!("https://www.marmiton.org/{}", name),
        }
    }

    #[test]
    fn test_from_batches_keeps_order() {
        let dataset = Dataset::from_batches(vec![
            vec![record(Category::Entree, "a"), record(Category::Entree, "b")],
            vec![],
            vec![record(Category::Dessert, "c")],
        ]);

        assert_eq!(dataset.len(), 3);
        let names = dataset
            .records()
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_write_csv() {
        let dataset = Dataset::from_batches(vec![vec![
            record(Category::Plat, "gratin"),
            record(Category::Dessert, "crêpes"),
        ]]);

        let mut buf = Vec::new();
        dataset.write_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let expected = concat!(
            ",Recipe Type,Recipe Name,Rating,Comments,Difficulty,Timer,Ingredients,URL\n",
            "0,plat,gratin,4.5/5,12,facile,30 min,\"{\"\"farine\"\":\"\"200\"\",\"\"oeuf\"\":\"\"2\"\"}\",https://www.marmiton.org/gratin\n",
            "1,dessert,crêpes,4.5/5,12,facile,30 min,\"{\"\"farine\"\":\"\"200\"\",\"\"oeuf\"\":\"\"2\"\"}\",https://www.marmiton.org/crêpes\n",
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a, b"), "\"a, b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_empty_dataset_has_header_only() {
        let mut buf = Vec::new();
        Dataset::default().write_csv(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            ",Recipe Type,Recipe Name,Rating,Comments,Difficulty,Timer,Ingredients,URL\n"
        );
    }
}
