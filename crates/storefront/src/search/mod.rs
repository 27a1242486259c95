//! Full-text product search using Tantivy.
//!
//! The catalog is in memory and fixed for the life of the process, so the
//! index is built once at startup, in RAM, before the server accepts
//! requests. Queries return product handles with their relevance scores;
//! callers look the products up in the catalog.

mod indexer;

use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, FuzzyTermQuery, Occur, Query, RegexQuery, TermQuery};
use tantivy::schema::{
    Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions, Value,
};
use tantivy::tokenizer::TokenStream;
use tantivy::{Index, IndexReader, Term};
use tracing::instrument;

use electromart_core::ProductHandle;

pub use indexer::build_index;

/// Name of the stemming tokenizer registered on the index.
const TOKENIZER: &str = "en_stem";

/// A matching product and how well it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub handle: ProductHandle,
    pub score: f32,
}

/// Schema field handles for the search index.
#[derive(Clone)]
pub struct SearchFields {
    /// Stored, exact-match product handle.
    pub handle: Field,
    // Text fields for full-text search (not stored, just indexed)
    pub name_text: Field,
    pub description_text: Field,
    /// Category, brand and specification values.
    pub tags_text: Field,
}

/// The product search index.
pub struct SearchIndex {
    index: Index,
    reader: IndexReader,
    fields: SearchFields,
}

impl SearchIndex {
    /// Wrap a built index.
    fn from_index(index: Index, fields: SearchFields) -> Result<Self, SearchError> {
        let reader = index
            .reader_builder()
            .reload_policy(tantivy::ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| SearchError::Index(format!("Failed to create reader: {e}")))?;

        Ok(Self {
            index,
            reader,
            fields,
        })
    }

    /// Build the schema for the search index.
    pub(crate) fn build_schema() -> (Schema, SearchFields) {
        let mut schema_builder = Schema::builder();

        // STRING means indexed but not tokenized (exact match)
        let handle = schema_builder.add_text_field("handle", STRING | STORED);

        let text_indexing = TextFieldIndexing::default()
            .set_tokenizer(TOKENIZER)
            .set_index_option(IndexRecordOption::WithFreqsAndPositions);
        let text_options = TextOptions::default().set_indexing_options(text_indexing);

        let name_text = schema_builder.add_text_field("name_text", text_options.clone());
        let description_text =
            schema_builder.add_text_field("description_text", text_options.clone());
        let tags_text = schema_builder.add_text_field("tags_text", text_options);

        let schema = schema_builder.build();
        let fields = SearchFields {
            handle,
            name_text,
            description_text,
            tags_text,
        };

        (schema, fields)
    }

    /// Search products, best match first.
    ///
    /// Blank queries match nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the search query fails.
    #[instrument(skip(self))]
    pub fn search(&self, query_str: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        let query_str = query_str.trim().to_lowercase();
        if query_str.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let mut subqueries: Vec<(Occur, Box<dyn Query>)> = Vec::new();

        for word in query_str.split_whitespace() {
            if word.chars().count() < 3 {
                // Prefix match on short terms (e.g., "wi" matches "wireless")
                let prefix_pattern = format!("{}.*", regex::escape(word));
                for field in [self.fields.name_text, self.fields.tags_text] {
                    if let Ok(regex_query) = RegexQuery::from_pattern(&prefix_pattern, field) {
                        subqueries.push((Occur::Should, Box::new(regex_query)));
                    }
                }
                continue;
            }

            for token in self.analyze(word)? {
                // Name exact match
                let name_term = Term::from_field_text(self.fields.name_text, &token);
                subqueries.push((
                    Occur::Should,
                    Box::new(TermQuery::new(name_term.clone(), IndexRecordOption::Basic)),
                ));

                // Name fuzzy match (1 edit distance)
                subqueries.push((
                    Occur::Should,
                    Box::new(FuzzyTermQuery::new(name_term, 1, true)),
                ));

                // Description fuzzy match
                let desc_term = Term::from_field_text(self.fields.description_text, &token);
                subqueries.push((
                    Occur::Should,
                    Box::new(FuzzyTermQuery::new(desc_term, 1, true)),
                ));

                // Tags exact match
                let tags_term = Term::from_field_text(self.fields.tags_text, &token);
                subqueries.push((
                    Occur::Should,
                    Box::new(TermQuery::new(tags_term, IndexRecordOption::Basic)),
                ));
            }
        }

        if subqueries.is_empty() {
            return Ok(Vec::new());
        }

        let query = BooleanQuery::new(subqueries);
        let searcher = self.reader.searcher();
        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(limit))
            .map_err(|e| SearchError::Query(format!("Search failed: {e}")))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc = searcher
                .doc::<tantivy::TantivyDocument>(doc_address)
                .map_err(|e| SearchError::Query(format!("Failed to retrieve doc: {e}")))?;
            let handle = doc
                .get_first(self.fields.handle)
                .and_then(|v| v.as_str())
                .ok_or_else(|| SearchError::Query("Document without handle".to_string()))?;
            hits.push(SearchHit {
                handle: ProductHandle::new(handle),
                score,
            });
        }

        Ok(hits)
    }

    /// Run a query word through the index tokenizer (lower-case + stem).
    fn analyze(&self, word: &str) -> Result<Vec<String>, SearchError> {
        let mut analyzer = self
            .index
            .tokenizer_for_field(self.fields.name_text)
            .map_err(|e| SearchError::Index(format!("Missing tokenizer: {e}")))?;
        let mut stream = analyzer.token_stream(word);
        let mut tokens = Vec::new();
        stream.process(&mut |token| tokens.push(token.text.clone()));
        Ok(tokens)
    }

    /// Number of indexed products.
    #[must_use]
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }
}

/// Search errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Index error: {0}")]
    Index(String),
    #[error("Query error: {0}")]
    Query(String),
    #[error("Build error: {0}")]
    Build(String),
}
