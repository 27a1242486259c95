//! Search index builder.
//!
//! Indexes catalog products into an in-memory Tantivy index.

use tantivy::Index;
use tracing::{info, instrument, warn};

use crate::catalog::Product;

use super::{SearchError, SearchFields, SearchIndex, TOKENIZER};

/// Build the search index from the catalog's products.
///
/// # Errors
///
/// Returns an error if the index writer cannot be created or committed.
#[instrument(skip_all, fields(products = products.len()))]
pub fn build_index(products: &[Product]) -> Result<SearchIndex, SearchError> {
    let (schema, fields) = SearchIndex::build_schema();
    let index = Index::create_in_ram(schema);

    // Register the English stemmer tokenizer
    index.tokenizers().register(
        TOKENIZER,
        tantivy::tokenizer::TextAnalyzer::builder(tantivy::tokenizer::SimpleTokenizer::default())
            .filter(tantivy::tokenizer::RemoveLongFilter::limit(40))
            .filter(tantivy::tokenizer::LowerCaser)
            .filter(tantivy::tokenizer::Stemmer::new(
                tantivy::tokenizer::Language::English,
            ))
            .build(),
    );

    let mut writer = index
        .writer_with_num_threads(1, 15_000_000) // 15MB buffer
        .map_err(|e| SearchError::Build(format!("Failed to create writer: {e}")))?;

    let count = index_products(products, &writer, &fields);

    writer
        .commit()
        .map_err(|e| SearchError::Build(format!("Failed to commit index: {e}")))?;

    info!(count, "Search index built");
    SearchIndex::from_index(index, fields)
}

/// Add one document per product.
fn index_products(
    products: &[Product],
    writer: &tantivy::IndexWriter,
    fields: &SearchFields,
) -> usize {
    let mut count = 0;

    for product in products {
        let doc = tantivy::doc!(
            fields.handle => product.handle.as_str().to_string(),
            fields.name_text => product.name.clone(),
            fields.description_text => format!(
                "{} {}",
                product.short_description,
                strip_html(&product.full_description_html)
            ),
            fields.tags_text => tags(product)
        );

        if let Err(e) = writer.add_document(doc) {
            warn!(error = %e, handle = %product.handle, "Failed to index product");
        } else {
            count += 1;
        }
    }

    count
}

/// Category, brand and specification values as one text blob.
fn tags(product: &Product) -> String {
    product
        .category
        .iter()
        .chain(product.brand.iter())
        .chain(product.specifications.iter().map(|s| &s.value))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip HTML tags from a string.
fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                result.push(' ');
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Battery&nbsp;life</p><p>GPS</p>").split_whitespace().collect::<Vec<_>>(),
            vec!["Battery", "life", "GPS"]
        );
    }
}
